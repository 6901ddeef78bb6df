//! Runtime settings read from the environment (and `.env` via dotenv).

use crate::error::ConfigError;
use crate::processing::DEFAULT_MAX_PASSES;
use log::LevelFilter;
use std::path::PathBuf;

pub const ENV_MAX_PASSES: &str = "CIDR_COMPRESS_MAX_PASSES";
pub const ENV_FORMAT: &str = "CIDR_COMPRESS_FORMAT";
pub const ENV_LOG_CONFIG: &str = "CIDR_COMPRESS_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "CIDR_COMPRESS_LOG_LEVEL";

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One CIDR per line, IPv4 first.
    #[default]
    Text,
    /// A single JSON document with both family reports.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_passes: usize,
    pub format: OutputFormat,
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Level for the built-in stderr logger.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_passes: DEFAULT_MAX_PASSES,
            format: OutputFormat::Text,
            log_config: PathBuf::from("log4rs.yml"),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_MAX_PASSES) {
            config.max_passes = match value.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidMaxPasses {
                        var: ENV_MAX_PASSES,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(ENV_FORMAT) {
            config.format = match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidFormat { var: ENV_FORMAT, value }),
            };
        }

        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(value);
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.log_level = value.trim().parse().map_err(|_| ConfigError::InvalidLogLevel {
                var: ENV_LOG_LEVEL,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}
