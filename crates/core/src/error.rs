use std::io;

/// Errors that can occur while assembling the pipeline configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid rule pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Lint error: {0}")]
    Lint(String),
}

/// Result type alias for tschain operations
pub type Result<T> = std::result::Result<T, Error>;
