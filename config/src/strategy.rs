use std::fmt;

use serde::Deserialize;

/// Control-flow style used to compute a factorial.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum Strategy {
    #[serde(rename = "recursive")]
    #[cfg_attr(feature = "clap_derive", clap(name = "recursive"))]
    Recursive,

    #[serde(rename = "while")]
    #[cfg_attr(feature = "clap_derive", clap(name = "while"))]
    While,

    #[serde(rename = "for")]
    #[cfg_attr(feature = "clap_derive", clap(name = "for"))]
    For,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::While => write!(f, "while"),
            Strategy::For => write!(f, "for"),
        }
    }
}
