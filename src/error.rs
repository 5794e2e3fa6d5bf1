//! Error types for summarization requests.
//!
//! The summarization core never fails on well-formed text; errors only arise
//! at the edges, when a request or configuration is parsed and validated.

use thiserror::Error;

/// The main error type for rapid-summarizer operations.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Text was missing, not a string, or blank.
    #[error("{0}")]
    InvalidInput(String),

    /// The method tag is not one of the supported strategies. The rejected
    /// tag is kept for diagnostics but not echoed in the message.
    #[error("Invalid summarization method")]
    InvalidMethod(String),

    /// Malformed JSON request or configuration document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummarizeError {
    /// Short, stable identifier for the error kind (e.g., `"invalid_method"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidMethod(_) => "invalid_method",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
        }
    }

    /// Whether the error was caused by the caller's request rather than the
    /// environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidMethod(_) | Self::Json(_)
        )
    }
}

/// Result type alias for rapid-summarizer operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;
