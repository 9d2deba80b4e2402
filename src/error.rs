//! Error types for documentation-to-Markdown generation.

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error types for generation operations
#[derive(Debug, Error)]
pub enum GenerateError {
    /// HTML parsing failed for a single entry
    #[error("Failed to parse rendered HTML: {0}")]
    Parse(String),

    /// Markdown serialization failed for a single entry
    #[error("Failed to serialize Markdown: {0}")]
    Serialize(String),

    /// Configuration resolution failed (invalid selector, invalid glob, bad file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested entry not found in the content store
    #[error("Documentation entry not found: {0}")]
    MissingEntry(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for GenerateError {
    fn from(error: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        GenerateError::Other(format!("{error:#}"))
    }
}
