//! JSON request contract
//!
//! Callers that speak JSON send `{"text": ..., "ratio": ..., "method": ...}`
//! and receive `{"summary": ...}` or `{"error": ...}`. Validation here is
//! the only place a summarization call can be rejected; the core itself
//! accepts any text.
//!
//! ```json
//! { "text": "First sentence. Second one.", "ratio": 0.3, "method": "extractive" }
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SummarizeError};
use crate::summarizer::engine::Summarizer;
use crate::types::{SummarizationMethod, SummarizerConfig, DEFAULT_RATIO};

/// Message returned when `text` is absent, not a string, or blank.
pub const TEXT_REQUIRED: &str = "Text is required and must be a string";

/// Raw summarization request, as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Any JSON value; only a non-blank string is accepted.
    #[serde(default)]
    pub text: Option<serde_json::Value>,
    /// A JSON number or a string holding one, e.g. `0.5` or `"0.5"`.
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(ratio)) => Ok(Some(ratio)),
        Some(NumberOrString::Text(raw)) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
            D::Error::custom(format!("invalid ratio {raw:?}, expected a number"))
        }),
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub text: String,
    pub config: SummarizerConfig,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&SummarizeError> for ErrorResponse {
    fn from(err: &SummarizeError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl SummarizeRequest {
    /// Build a request for `text` with default ratio and method.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(serde_json::Value::String(text.into())),
            ratio: None,
            method: None,
        }
    }

    /// Parse a request from a JSON document.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check the request and fill in defaults.
    ///
    /// Missing `ratio` becomes 0.3 and missing `method` becomes extractive.
    /// The ratio itself is passed through unchecked.
    pub fn validate(self) -> Result<ValidatedRequest> {
        let text = match self.text {
            Some(serde_json::Value::String(text)) if !text.trim().is_empty() => text,
            _ => return Err(SummarizeError::InvalidInput(TEXT_REQUIRED.to_string())),
        };

        let method = match self.method.as_deref() {
            Some(tag) => tag.parse::<SummarizationMethod>()?,
            None => SummarizationMethod::default(),
        };

        Ok(ValidatedRequest {
            text,
            config: SummarizerConfig::new(self.ratio.unwrap_or(DEFAULT_RATIO), method),
        })
    }
}

impl ValidatedRequest {
    /// Run the summarizer for this request.
    pub fn run(&self) -> SummarizeResponse {
        SummarizeResponse {
            summary: Summarizer::new(self.config).summarize(&self.text),
        }
    }
}

/// Parse, validate, and summarize a JSON request body.
pub fn handle_json(body: &str) -> Result<SummarizeResponse> {
    let request = SummarizeRequest::from_json(body)?.validate()?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        method = request.config.method.as_str(),
        ratio = request.config.ratio,
        bytes = request.text.len(),
        "summarize request"
    );

    Ok(request.run())
}
