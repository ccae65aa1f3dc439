use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, fmt::time::ChronoUtc, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::default_log_dir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub max_log_files: usize,
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_file_prefix: CompactString::const_new("cmdchain"),
            log_level: CompactString::const_new("info"),
            max_log_files: 5,
            rotation: LogRotation::Daily,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Invalid log directory: {0}")]
    InvalidLogDirectory(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn validate_config(config: &LoggerConfig) -> Result<(), LoggingError> {
    if config.log_dir.as_os_str().is_empty() {
        return Err(LoggingError::InvalidLogDirectory(
            "log_dir must not be empty".into(),
        ));
    }

    if config.log_file_prefix.is_empty() {
        return Err(LoggingError::ConfigError(
            "log_file_prefix must not be empty".into(),
        ));
    }

    if config.max_log_files == 0 {
        return Err(LoggingError::ConfigError(
            "max_log_files must be at least 1".into(),
        ));
    }

    Directive::from_str(&config.log_level)
        .map_err(|e| LoggingError::ConfigError(format!("invalid log level: {e}")))?;

    Ok(())
}

// Logger builder
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.config.log_level = CompactString::new(level);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Install the global subscriber: JSON lines into a rolling file.
    ///
    /// Keep the returned guard alive for the life of the process; dropping
    /// it flushes and stops the background writer.
    pub fn build(self) -> Result<WorkerGuard> {
        validate_config(&self.config)?;
        std::fs::create_dir_all(&self.config.log_dir).map_err(LoggingError::from)?;

        let rotation = match self.config.rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Daily => Rotation::DAILY,
        };

        let file_appender = RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(self.config.log_file_prefix.as_str())
            .filename_suffix("jsonl")
            .max_log_files(self.config.max_log_files)
            .build(&self.config.log_dir)
            .context("Failed to create file appender")?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let filter = EnvFilter::from_default_env().add_directive(
            Directive::from_str(&self.config.log_level).context("Invalid log level in config")?,
        );

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_file(true)
            .with_line_number(true)
            .with_writer(non_blocking)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(json_layer)
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialized)?;

        Ok(guard)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_level() {
        let config = LoggerConfig {
            log_level: CompactString::const_new("cmdchain=loud"),
            ..LoggerConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(LoggingError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_empty_log_dir() {
        let config = LoggerConfig {
            log_dir: PathBuf::new(),
            ..LoggerConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(LoggingError::InvalidLogDirectory(_))
        ));
    }

    #[test]
    fn test_with_level_overrides_config() {
        let builder = LoggerBuilder::new().with_level("debug");
        assert_eq!(builder.config().log_level.as_str(), "debug");
    }
}
