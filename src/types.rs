//! Core types for summarization
//!
//! This module defines the configuration, strategy tag, and the sentence
//! records that flow between the pipeline stages.

use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;

/// Default compression ratio (fraction of sentences kept).
pub const DEFAULT_RATIO: f64 = 0.3;

/// Documents with this many sentences or fewer are returned whole.
pub const SHORT_DOCUMENT_SENTENCES: usize = 3;

/// Sentence-scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarizationMethod {
    /// Sum of document-level term frequencies of each sentence's words.
    #[default]
    Extractive,
    /// Count of a sentence's words that fall in the top frequency band.
    Frequency,
}

impl SummarizationMethod {
    /// Returns the user-facing tag used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Frequency => "frequency",
        }
    }
}

impl std::fmt::Display for SummarizationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SummarizationMethod {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "extractive" => Ok(Self::Extractive),
            "frequency" => Ok(Self::Frequency),
            other => Err(SummarizeError::InvalidMethod(other.to_string())),
        }
    }
}

/// Configuration for a summarization call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep, expected in (0, 1].
    ///
    /// The frequency strategy also uses this value to size its top-word band.
    #[serde(default = "default_ratio")]
    pub ratio: f64,
    /// Scoring strategy
    #[serde(default)]
    pub method: SummarizationMethod,
}

fn default_ratio() -> f64 {
    DEFAULT_RATIO
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            method: SummarizationMethod::default(),
        }
    }
}

impl SummarizerConfig {
    /// Create a config with the given ratio and method
    pub fn new(ratio: f64, method: SummarizationMethod) -> Self {
        Self { ratio, method }
    }

    /// Set the compression ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the scoring strategy
    pub fn with_method(mut self, method: SummarizationMethod) -> Self {
        self.method = method;
        self
    }

    /// Number of sentences a summary of `sentence_count` sentences keeps:
    /// `max(1, floor(sentence_count * ratio))`.
    ///
    /// Negative products give 1. A NaN product gives 0, so a NaN ratio
    /// selects nothing. The result may exceed `sentence_count` when
    /// `ratio > 1`; an infinite ratio saturates to `usize::MAX`.
    pub fn target_count(&self, sentence_count: usize) -> usize {
        let raw = (sentence_count as f64 * self.ratio).floor();
        if raw.is_nan() {
            return 0;
        }
        // `as` saturates: negatives become 0, +inf becomes usize::MAX
        (raw as usize).max(1)
    }
}

/// A sentence extracted from the normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence text, original casing, surrounding whitespace trimmed
    pub text: String,
    /// Position in the document; the sentence's identity when re-sorting
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// A sentence index paired with its strategy-dependent score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f64,
}

impl ScoredSentence {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}
