//! Combat log read errors.
//!
//! Malformed lines are never errors; only failing to read the input is.

use std::path::PathBuf;

/// Errors that abort a parse.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to open combat log {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read combat log at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
