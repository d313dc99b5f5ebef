//! Error types for datamodel loading.
//!
//! The compilers themselves are total: every context combination has a
//! defined directive, so no error can cross the compiler boundary. Errors
//! only arise while loading the datamodel document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a datamodel document.
#[derive(Debug, Error)]
pub enum SchemaError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid datamodel JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SchemaError::FileNotFound { .. } | SchemaError::ReadError { .. } => 3,
            SchemaError::InvalidJson { .. } => 2,
        }
    }
}
