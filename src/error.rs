//! Error types for loading and rendering values.
//!
//! Comparing two values never fails; these errors come from the codecs and
//! the file handling around them.

use std::path::PathBuf;
use thiserror::Error;

/// Error represents a failure to read, parse, or serialize a document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
