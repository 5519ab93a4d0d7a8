//! Loading values from JSON and YAML documents.

use super::{from_json, from_yaml, Value};
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Format is the textual representation of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "" => Err(Error::UnsupportedFormat(path.display().to_string())),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses a document in this format.
    pub fn parse(self, content: &str) -> Result<Value> {
        match self {
            Format::Json => Ok(from_json(content)?),
            Format::Yaml => Ok(from_yaml(content)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

/// Reads and parses the document at `path`, choosing the format by extension.
pub fn load(path: &Path) -> Result<Value> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), %format, "loading document");
    format.parse(&content)
}
