//! Error types for Thicket.
//!
//! Tree operations never fail: an out-of-range coordinate is a silently
//! ignored request. Errors only arise when reading or writing configuration.

use std::path::PathBuf;

/// Result type alias for Thicket operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to access config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Invalid TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Failed to serialize config as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing or serialization error.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
