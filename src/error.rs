//! Error types for network parsing and configuration.

use crate::models::Family;
use thiserror::Error;

/// Reasons a raw line cannot become a [`crate::models::Network`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("empty network string")]
    Empty,

    #[error("too many '/' in '{0}'")]
    TooManySlashes(String),

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),

    #[error("prefix length {prefix} is too long for {family} (max {max})")]
    PrefixTooLong { family: Family, prefix: u32, max: u8 },

    #[error("invalid netmask '{0}'")]
    InvalidNetmask(String),

    #[error("expected an {expected} network, got '{input}'")]
    FamilyMismatch { expected: Family, input: String },
}

/// Invalid values found in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number >= 1, got '{value}'")]
    InvalidMaxPasses { var: &'static str, value: String },

    #[error("{var} must be 'text' or 'json', got '{value}'")]
    InvalidFormat { var: &'static str, value: String },

    #[error("{var} is not a log level, got '{value}'")]
    InvalidLogLevel { var: &'static str, value: String },
}
