//! Environment-backed configuration.
//!
//! Defaults are compiled in from `.config.env`. Variables already present in the process
//! environment take precedence over them, and command-line flags take precedence over both.

use serde::de::DeserializeOwned;

mod error;

pub mod driver;
pub mod strategy;

pub use driver::DriverConfig;
pub use error::Error;
pub use strategy::Strategy;

const CONFIG_ENV_PREFIX: &str = "FACT";

/// Default environment, loaded without overriding variables that are already set.
pub const DEFAULT_ENV: &str = include_str!("../.config.env");

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);
        dotenvy::from_read(DEFAULT_ENV.as_bytes())?;

        Ok(config::Config::builder()
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}
