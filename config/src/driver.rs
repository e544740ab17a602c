use serde::Deserialize;

use super::Config;

/// Settings of the agreement check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverConfig {
    /// Value every computation is evaluated at.
    pub input: i64,
}

impl Config for DriverConfig {
    const PREFIX: &'static str = "DRIVER";
}
