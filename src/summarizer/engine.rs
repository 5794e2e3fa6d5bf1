//! Summarizer: runs the summarization stages in order.
//!
//! Stages:
//! 1. Normalize whitespace
//! 2. Split sentences (short documents stop here and are returned whole)
//! 3. Tokenize, filter, and count the whole document once
//! 4. Score every sentence with the configured strategy
//! 5. Select the top sentences and restore document order
//!
//! Every intermediate value is local to the call, so one [`Summarizer`] can
//! be shared freely across threads.

use rayon::prelude::*;

use super::frequency::FrequencyTable;
use super::scorer::score_sentences;
use super::selector::{SentenceSelector, Summary};
use crate::nlp::normalizer::normalize;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{split_sentences, tokenize_words};
use crate::types::{SummarizationMethod, SummarizerConfig, SHORT_DOCUMENT_SENTENCES};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SPLIT: &str = "split";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Enter a tracing span for a summarization stage (when the `tracing`
/// feature is enabled). When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Extractive summarizer
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
}

impl Summarizer {
    /// Create a summarizer with the given configuration and the built-in
    /// English stopwords
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::english(),
        }
    }

    /// Shorthand for `Summarizer::new(SummarizerConfig::new(ratio, method))`
    pub fn with_method(ratio: f64, method: SummarizationMethod) -> Self {
        Self::new(SummarizerConfig::new(ratio, method))
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Summarize `text`, returning the selected sentences joined by single
    /// spaces in document order. Text without terminal punctuation has no
    /// sentences and yields an empty string.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).text()
    }

    /// Summarize `text`, returning the selected sentences with their indices
    /// and scores.
    pub fn summarize_detailed(&self, text: &str) -> Summary {
        let cfg = &self.config;

        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            normalize(text)
        };

        let sentences = {
            trace_stage!(STAGE_SPLIT);
            split_sentences(&normalized)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            method = cfg.method.as_str(),
            ratio = cfg.ratio,
            "split document"
        );

        if sentences.len() <= SHORT_DOCUMENT_SENTENCES {
            return SentenceSelector::keep_all(&sentences);
        }

        let table = {
            trace_stage!(STAGE_FREQUENCY);
            FrequencyTable::from_tokens(self.stopwords.filter(tokenize_words(&normalized)))
        };

        let scored = {
            trace_stage!(STAGE_SCORE);
            score_sentences(&sentences, &table, cfg)
        };

        trace_stage!(STAGE_SELECT);
        let target_count = cfg.target_count(sentences.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vocabulary = table.len(),
            tokens = table.total(),
            target_count,
            "selecting sentences"
        );

        SentenceSelector::new(target_count).select(&sentences, &scored)
    }

    /// Summarize many documents in parallel. Output order matches input order.
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}
