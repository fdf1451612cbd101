//! Error type shared by the library

use std::io;
use std::path::PathBuf;

/// Errors raised while loading, composing or writing documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize {document}: {source}")]
    Serialize {
        document: String,
        source: serde_json::Error,
    },

    /// A document or one of its fields does not have the JSON type the merge needs
    #[error("{document}: expected {field} to be {expected}")]
    Shape {
        document: String,
        field: String,
        expected: &'static str,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    pub(crate) fn shape(document: &str, field: &str, expected: &'static str) -> Self {
        Error::Shape {
            document: document.to_string(),
            field: field.to_string(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
