//! Error types for the tokenizer.

use thiserror::Error;

/// Errors raised at the tokenizer's boundary.
///
/// Everything inside the pipeline is permissive: out-of-range fragments,
/// empty input and duplicate list entries are not errors.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// A value outside the closed language registry, or `Auto` where a
    /// concrete language is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTML collaborator rejected the markup.
    #[error("failed to parse html: {0}")]
    ParseFailure(String),

    /// I/O error while reading a configuration file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
