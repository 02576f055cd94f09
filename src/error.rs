//! Error types for keytext.
//!
//! Resolving text never fails. These errors only come from building a
//! resolver: loading mapping files, strict construction and CLI input.

use thiserror::Error;

/// Result type for keytext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a text resolver.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mapping file is not valid JSON.
    #[error("Failed to parse JSON mapping: {0}")]
    Json(#[from] serde_json::Error),

    /// Mapping file is not valid TOML.
    #[error("Failed to parse TOML mapping: {0}")]
    Toml(#[from] toml::de::Error),

    /// Mapping has an entry whose value is not a string.
    #[error("Invalid mapping entry '{key}': expected a string, found {found}")]
    InvalidMapping { key: String, found: String },

    /// Two keys are equal once case is ignored.
    #[error("Keys '{first}' and '{second}' collide when case is ignored")]
    KeyCollision { first: String, second: String },

    /// Inline entry is not of the form `KEY=VALUE`.
    #[error("Invalid entry '{0}': expected KEY=VALUE")]
    InvalidEntry(String),
}
