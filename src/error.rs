//! Error types for brace-outlines

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration value for `{key}`: {message}")]
    Config { key: String, message: String },

    #[error("unknown color: {0}")]
    UnknownColor(String),
}
