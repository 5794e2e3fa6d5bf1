//! # rapid-summarizer
//!
//! Frequency-based extractive text summarization.
//!
//! A summary is a subset of the document's own sentences, kept in document
//! order. Sentences are scored against a term-frequency table built once over
//! the whole document, using one of two strategies:
//!
//! - **Extractive**: sum of the document-level counts of the sentence's words.
//! - **Frequency**: number of the sentence's words that fall in the document's
//!   top frequency band.
//!
//! ## Quick start
//!
//! ```
//! use rapid_summarizer::{summarize, SummarizationMethod};
//!
//! let text = "Rust compiles fast code. Rust checks memory safety at compile time. \
//!             Cats sleep. Compile errors in Rust explain memory problems.";
//! let summary = summarize(text, 0.5, SummarizationMethod::Extractive);
//! assert_eq!(
//!     summary,
//!     "Rust checks memory safety at compile time. \
//!      Compile errors in Rust explain memory problems."
//! );
//! ```

pub mod error;
pub mod nlp;
pub mod request;
pub mod summarizer;
pub mod types;

pub use error::{Result, SummarizeError};
pub use nlp::stopwords::StopwordFilter;
pub use request::{handle_json, SummarizeRequest, SummarizeResponse};
pub use summarizer::engine::Summarizer;
pub use summarizer::frequency::FrequencyTable;
pub use summarizer::selector::{SelectedSentence, Summary};
pub use types::{ScoredSentence, Sentence, SummarizationMethod, SummarizerConfig};

/// Summarize `text`, keeping about `ratio` of its sentences.
///
/// Documents with three or fewer sentences are returned whole.
pub fn summarize(text: &str, ratio: f64, method: SummarizationMethod) -> String {
    Summarizer::with_method(ratio, method).summarize(text)
}
