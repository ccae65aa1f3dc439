//! src/error.rs
//! ============================================================================
//! # `CmdError`: Unified Error Type for the command chain
//!
//! Every fallible operation in the crate returns `Result<T, CmdError>`.
//! "No handler matched" and "no handler registered" are not errors; they are
//! reported through [`DispatchOutcome`](crate::controller::DispatchOutcome).

use std::{io, path::PathBuf};
use thiserror::Error;

/// Convenience alias used across the crate.
pub type CmdResult<T> = Result<T, CmdError>;

/// Unified error type for tokenizing, dispatching and configuration.
#[derive(Debug, Error)]
pub enum CmdError {
    /// Read past the end of a token sequence (including any read on an empty one).
    #[error("Token index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Word that does not name any known keyword.
    #[error("Unknown keyword: {0:?}")]
    UnknownKeyword(String),

    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl CmdError {
    /// Attach extra context to an error.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        Self::Other(format!("{}: {}", ctx.into(), self))
    }

    /// Create an out-of-range error for `index` in a sequence of `len` tokens
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create an unknown keyword error
    pub fn unknown_keyword<S: Into<String>>(word: S) -> Self {
        Self::UnknownKeyword(word.into())
    }

    /// Create a config I/O error bound to the file it concerns
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for CmdError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
