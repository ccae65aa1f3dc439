//! src/config.rs
//! ============================================================================
//! # Config: command chain configuration loader and saver
//!
//! Loads and saves settings as TOML from the platform config directory
//! resolved by [`directories`](https://docs.rs/directories).
//!
//! ## Features
//! - XDG-compliant config discovery (Linux, macOS, Windows)
//! - Every field defaulted; a missing file yields `Config::default()`
//! - Async load/save on Tokio
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save_to(&path).await?;
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::{CmdError, CmdResult};
use crate::logging::LoggerConfig;
use crate::model::Keyword;

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input used when none is given on the command line.
    pub default_input: Vec<Keyword>,

    /// Handler names to disable after registration.
    pub disabled_handlers: Vec<String>,

    pub logging: LoggerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: vec![Keyword::Help],
            disabled_handlers: Vec::new(),
            logging: LoggerConfig::default(),
        }
    }
}

impl Config {
    /// Loads config from the platform config dir, or returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/cmdchain/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> CmdResult<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Loads config from `path`; a missing file yields defaults.
    pub async fn load_from(path: &Path) -> CmdResult<Self> {
        if !TokioFs::try_exists(path)
            .await
            .map_err(|e| CmdError::config_io(path, e))?
        {
            info!(
                "No config file found at {}, using default configuration",
                path.display()
            );

            return Ok(Self::default());
        }

        info!("Loading config from {}", path.display());

        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|e| CmdError::config_io(path, e))?;

        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> CmdResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Saves config as TOML to `path`, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> CmdResult<()> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| CmdError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| CmdError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> CmdResult<PathBuf> {
        let proj_dirs = project_dirs()
            .ok_or_else(|| CmdError::Other("Could not determine config directory.".into()))?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "cmdchain", "cmdchain")
}

/// Default log directory: `logs/` under the platform local data dir
/// (`$XDG_DATA_HOME/cmdchain/logs` on Linux), or under the system temp dir
/// when no home directory can be resolved. Never the working directory.
pub fn default_log_dir() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().join("logs"),
        None => std::env::temp_dir().join("cmdchain").join("logs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogRotation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = Config::from_toml("default_input = [\"create\", \"database\"]\n").unwrap();

        assert_eq!(cfg.default_input, vec![Keyword::Create, Keyword::Database]);
        assert!(cfg.disabled_handlers.is_empty());
        assert_eq!(cfg.logging, LoggerConfig::default());
    }

    #[test]
    fn test_nested_logging_section() {
        let text = r#"
disabled_handlers = ["database"]

[logging]
log_level = "debug"
rotation = "never"
"#;
        let cfg = Config::from_toml(text).unwrap();

        assert_eq!(cfg.disabled_handlers, vec!["database".to_string()]);
        assert_eq!(cfg.logging.log_level.as_str(), "debug");
        assert_eq!(cfg.logging.rotation, LogRotation::Never);
        assert_eq!(cfg.logging.max_log_files, 5);
    }

    #[test]
    fn test_default_input_is_case_insensitive() {
        let cfg = Config::from_toml("default_input = [\"Help\"]\n").unwrap();
        assert_eq!(cfg.default_input, vec![Keyword::Help]);
    }

    #[test]
    fn test_unknown_keyword_is_config_error() {
        let err = Config::from_toml("default_input = [\"select\"]\n").unwrap_err();
        assert!(matches!(err, CmdError::Config(_)));
    }

    #[test]
    fn test_default_log_dir_is_outside_working_dir() {
        let dir = default_log_dir();

        assert!(dir.is_absolute());
        assert!(dir.ends_with("logs"));
        assert_eq!(Config::default().logging.log_dir, dir);
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml"))
            .await
            .unwrap();

        assert_eq!(cfg, Config::default());
        assert!(!dir.path().join("absent.toml").exists());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            default_input: vec![Keyword::Drop, Keyword::Database],
            disabled_handlers: vec!["basic".into()],
            ..Config::default()
        };

        cfg.save_to(&path).await.unwrap();
        let loaded = Config::load_from(&path).await.unwrap();

        assert_eq!(loaded, cfg);
    }
}
