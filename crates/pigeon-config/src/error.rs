//! Error types for pigeon-config

use std::path::PathBuf;

/// Result type for pigeon-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("key is empty")]
    EmptyKey,

    #[error("not exist key {key:?}")]
    KeyNotFound { key: String },

    #[error("Failed to decode {format} content: {message}")]
    Decode { format: String, message: String },

    #[error("config: unknown adapter {0:?}")]
    UnknownAdapter(String),

    #[error("config: Register called twice for adapter {0}")]
    DuplicateAdapter(String),

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn decode(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
