//! log4rs setup. Diagnostics always go to stderr so stdout stays clean.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const STDERR_PATTERN: &str = "{h({l})} {m}{n}";

/// Built-in config: one stderr console appender at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Load the YAML log config if present, otherwise log to stderr.
///
/// A config file that fails to load falls back to stderr with a warning.
pub fn init(config: &Config) -> Result<(), Box<dyn Error>> {
    let load_error = if config.log_config.exists() {
        match log4rs::init_file(&config.log_config, Default::default()) {
            Ok(()) => {
                log::debug!("logging configured from {}", config.log_config.display());
                return Ok(());
            }
            Err(e) => Some(e),
        }
    } else {
        None
    };

    log4rs::init_config(stderr_config(config.log_level)?)?;
    if let Some(e) = load_error {
        log::warn!(
            "Error loading {}, logging to stderr: {e}",
            config.log_config.display()
        );
    }
    Ok(())
}
