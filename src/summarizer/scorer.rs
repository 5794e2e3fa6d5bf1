//! Sentence scoring strategies
//!
//! Both strategies read the same document-level [`FrequencyTable`] and
//! re-tokenize each sentence without stopword filtering; terms that are not in
//! the table (stopwords, single characters) simply contribute nothing.

use rustc_hash::FxHashSet;

use super::frequency::FrequencyTable;
use crate::nlp::tokenizer::tokenize_words;
use crate::types::{ScoredSentence, Sentence, SummarizationMethod, SummarizerConfig};

/// Sentence-scoring stage.
///
/// # Contract
///
/// - **Input**: the document's sentences, its frequency table, and the call's
///   configuration.
/// - **Output**: one [`ScoredSentence`] per input sentence, in input order,
///   carrying the sentence's `index`.
/// - **Pure**: no state is carried between calls.
pub trait SentenceScorer {
    /// Score every sentence against the document's frequency table.
    fn score(
        &self,
        sentences: &[Sentence],
        table: &FrequencyTable,
        cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence>;
}

/// Sums the document-level count of every word in the sentence.
///
/// Longer sentences full of frequent content words score highest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveScorer;

impl SentenceScorer for ExtractiveScorer {
    fn score(
        &self,
        sentences: &[Sentence],
        table: &FrequencyTable,
        _cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence> {
        sentences
            .iter()
            .map(|sentence| {
                let score: usize = tokenize_words(&sentence.text)
                    .iter()
                    .map(|word| table.count(word))
                    .sum();
                ScoredSentence::new(sentence.index, score as f64)
            })
            .collect()
    }
}

/// Counts how many of the sentence's words fall in the top frequency band.
///
/// The band holds the `floor(table.len() * ratio)` most frequent terms, sized
/// by the same ratio that sizes the summary. Every occurrence of a band term
/// counts once, regardless of the term's frequency.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyBandScorer;

impl FrequencyBandScorer {
    /// Number of terms in the top band for a table of `vocabulary` terms.
    ///
    /// Behaves like taking the first `k = floor(vocabulary * ratio)` ranked
    /// terms with end-relative slicing: a negative `k` drops `|k|` terms from
    /// the end of the ranking, a NaN `k` gives an empty band, and `k` above
    /// the vocabulary size takes every term.
    pub fn band_size(vocabulary: usize, ratio: f64) -> usize {
        let raw = (vocabulary as f64 * ratio).floor();
        if raw.is_nan() {
            0
        } else if raw < 0.0 {
            // `as` saturates, so -inf drops everything
            vocabulary.saturating_sub(-raw as usize)
        } else {
            (raw as usize).min(vocabulary)
        }
    }

    /// The set of top-band terms for this table and ratio
    pub fn band<'t>(table: &'t FrequencyTable, ratio: f64) -> FxHashSet<&'t str> {
        table.top_n(Self::band_size(table.len(), ratio))
    }
}

impl SentenceScorer for FrequencyBandScorer {
    fn score(
        &self,
        sentences: &[Sentence],
        table: &FrequencyTable,
        cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence> {
        let band = Self::band(table, cfg.ratio);

        #[cfg(feature = "tracing")]
        tracing::debug!(band = band.len(), vocabulary = table.len(), "top frequency band");

        sentences
            .iter()
            .map(|sentence| {
                let hits = tokenize_words(&sentence.text)
                    .iter()
                    .filter(|word| band.contains(word.as_str()))
                    .count();
                ScoredSentence::new(sentence.index, hits as f64)
            })
            .collect()
    }
}

/// Score with the strategy selected by `cfg.method`.
pub fn score_sentences(
    sentences: &[Sentence],
    table: &FrequencyTable,
    cfg: &SummarizerConfig,
) -> Vec<ScoredSentence> {
    match cfg.method {
        SummarizationMethod::Extractive => ExtractiveScorer.score(sentences, table, cfg),
        SummarizationMethod::Frequency => FrequencyBandScorer.score(sentences, table, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::split_sentences;

    const TEXT: &str = "Rust compiles fast code. Rust checks memory safety at compile time. \
                        Cats sleep. Compile errors in Rust explain memory problems.";

    fn table_for(text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(StopwordFilter::english().filter(tokenize_words(text)))
    }

    fn scores(scored: &[ScoredSentence]) -> Vec<f64> {
        scored.iter().map(|s| s.score).collect()
    }

    #[test]
    fn test_extractive_sums_term_frequencies() {
        let sentences = split_sentences(TEXT);
        let table = table_for(TEXT);
        let cfg = SummarizerConfig::default();

        let scored = ExtractiveScorer.score(&sentences, &table, &cfg);

        // rust=3, compile=2, memory=2, compiles/fast/code/... = 1
        // "Rust compiles fast code." = 3 + 1 + 1 + 1
        // "Rust checks memory safety at compile time." = 3 + 1 + 2 + 1 + 0 + 2 + 1
        // "Cats sleep." = 1 + 1
        // "Compile errors in Rust explain memory problems." = 2 + 1 + 0 + 3 + 1 + 2 + 1
        assert_eq!(scores(&scored), vec![6.0, 10.0, 2.0, 10.0]);
        let indices: Vec<_> = scored.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_extractive_ignores_stopwords_through_table() {
        let sentences = split_sentences("The the the. Of of.");
        let table = table_for("The the the. Of of.");
        let scored = ExtractiveScorer.score(&sentences, &table, &SummarizerConfig::default());
        assert_eq!(scores(&scored), vec![0.0, 0.0]);
    }

    #[test]
    fn test_band_size() {
        assert_eq!(FrequencyBandScorer::band_size(10, 0.3), 3);
        assert_eq!(FrequencyBandScorer::band_size(10, 0.25), 2);
        assert_eq!(FrequencyBandScorer::band_size(3, 0.3), 0);
        assert_eq!(FrequencyBandScorer::band_size(10, 1.5), 10);
        assert_eq!(FrequencyBandScorer::band_size(10, f64::INFINITY), 10);
        assert_eq!(FrequencyBandScorer::band_size(0, 0.5), 0);
    }

    #[test]
    fn test_band_size_negative_ratio_drops_from_end() {
        // floor(10 * -0.25) = -3: all but the last three terms
        assert_eq!(FrequencyBandScorer::band_size(10, -0.25), 7);
        // floor(9 * -0.5) = -5
        assert_eq!(FrequencyBandScorer::band_size(9, -0.5), 4);
        assert_eq!(FrequencyBandScorer::band_size(3, -2.0), 0);
        assert_eq!(FrequencyBandScorer::band_size(10, f64::NEG_INFINITY), 0);
        assert_eq!(FrequencyBandScorer::band_size(10, f64::NAN), 0);
    }

    #[test]
    fn test_frequency_counts_band_hits() {
        let sentences = split_sentences(TEXT);
        let table = table_for(TEXT);
        // 14 distinct terms * 0.25 = 3 band terms: rust, memory, compile
        assert_eq!(table.len(), 14);
        let cfg = SummarizerConfig::new(0.25, SummarizationMethod::Frequency);

        let band = FrequencyBandScorer::band(&table, cfg.ratio);
        assert_eq!(band.len(), 3);
        assert!(band.contains("rust") && band.contains("compile") && band.contains("memory"));

        let scored = FrequencyBandScorer.score(&sentences, &table, &cfg);
        assert_eq!(scores(&scored), vec![1.0, 3.0, 0.0, 3.0]);
    }

    #[test]
    fn test_frequency_counts_duplicates() {
        let text = "Data data data. Cats chase mice. Dogs chase balls. Data again.";
        let sentences = split_sentences(text);
        let table = table_for(text);
        let cfg = SummarizerConfig::new(0.2, SummarizationMethod::Frequency);

        // 6 terms * 0.2 = 1 band term: data
        let scored = FrequencyBandScorer.score(&sentences, &table, &cfg);
        assert_eq!(scores(&scored), vec![3.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_dispatch_by_method() {
        let sentences = split_sentences(TEXT);
        let table = table_for(TEXT);

        let cfg = SummarizerConfig::new(0.25, SummarizationMethod::Extractive);
        assert_eq!(
            score_sentences(&sentences, &table, &cfg),
            ExtractiveScorer.score(&sentences, &table, &cfg)
        );

        let cfg = cfg.with_method(SummarizationMethod::Frequency);
        assert_eq!(
            score_sentences(&sentences, &table, &cfg),
            FrequencyBandScorer.score(&sentences, &table, &cfg)
        );
    }

    #[test]
    fn test_scorer_as_trait_object() {
        let scorer: Box<dyn SentenceScorer> = Box::new(ExtractiveScorer);
        let scored = scorer.score(&[], &FrequencyTable::new(), &SummarizerConfig::default());
        assert!(scored.is_empty());
    }
}
