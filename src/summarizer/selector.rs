//! Top-score sentence selection for summarization
//!
//! Picks the highest-scoring sentences up to a target count, then restores
//! document order before the summary is assembled.

use crate::types::{ScoredSentence, Sentence};

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences in the source document
    pub total_sentences: usize,
}

impl Summary {
    /// Join the selected sentences with single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Original indices of the selected sentences, ascending
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.sentence.index).collect()
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// Strategy score when selected; `None` if the sentence was kept unscored
    pub score: Option<f64>,
}

/// Top-N sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl SentenceSelector {
    /// Create a selector that keeps at most `num_sentences` sentences
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Select the top-scoring sentences.
    ///
    /// Scores are ranked high to low with a stable sort, so equal scores keep
    /// their original relative order. The winners are returned in document
    /// order. Scored indices with no matching sentence are ignored.
    pub fn select(&self, sentences: &[Sentence], scored: &[ScoredSentence]) -> Summary {
        let mut ranked = scored.to_vec();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.num_sentences);

        // Restore document order
        ranked.sort_by_key(|s| s.index);

        let selected = ranked
            .iter()
            .filter_map(|s| {
                sentences.get(s.index).map(|sentence| SelectedSentence {
                    sentence: sentence.clone(),
                    score: Some(s.score),
                })
            })
            .collect();

        Summary {
            sentences: selected,
            total_sentences: sentences.len(),
        }
    }

    /// Keep every sentence, unscored, in document order
    pub fn keep_all(sentences: &[Sentence]) -> Summary {
        Summary {
            sentences: sentences
                .iter()
                .map(|sentence| SelectedSentence {
                    sentence: sentence.clone(),
                    score: None,
                })
                .collect(),
            total_sentences: sentences.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect()
    }

    fn make_scores(scores: &[f64]) -> Vec<ScoredSentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ScoredSentence::new(i, s))
            .collect()
    }

    #[test]
    fn test_top_n_selection() {
        let sentences = make_sentences(&["A one.", "B two.", "C three.", "D four."]);
        let scored = make_scores(&[1.0, 5.0, 2.0, 4.0]);

        let summary = SentenceSelector::new(2).select(&sentences, &scored);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.indices(), vec![1, 3]);
        assert_eq!(summary.text(), "B two. D four.");
        assert_eq!(summary.total_sentences, 4);
    }

    #[test]
    fn test_document_order() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D.", "E."]);
        let scored = make_scores(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        let summary = SentenceSelector::new(3).select(&sentences, &scored);

        // Sentences should be in document order
        assert_eq!(summary.indices(), vec![2, 3, 4]);
        for pair in summary.sentences.windows(2) {
            assert!(pair[1].sentence.index > pair[0].sentence.index);
        }
    }

    #[test]
    fn test_ties_keep_earlier_sentences() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D.", "E."]);
        let scored = make_scores(&[2.0, 3.0, 2.0, 2.0, 2.0]);

        let summary = SentenceSelector::new(3).select(&sentences, &scored);

        assert_eq!(summary.indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_target_larger_than_input() {
        let sentences = make_sentences(&["A.", "B."]);
        let scored = make_scores(&[0.0, 1.0]);

        let summary = SentenceSelector::new(10).select(&sentences, &scored);

        assert_eq!(summary.indices(), vec![0, 1]);
    }

    #[test]
    fn test_empty_input() {
        let summary = SentenceSelector::new(3).select(&[], &[]);

        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }

    #[test]
    fn test_keep_all_is_unscored() {
        let sentences = make_sentences(&["A.", "B.", "C."]);
        let summary = SentenceSelector::keep_all(&sentences);

        assert_eq!(summary.text(), "A. B. C.");
        assert!(summary.sentences.iter().all(|s| s.score.is_none()));
    }

    #[test]
    fn test_scores_are_reported() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D."]);
        let scored = make_scores(&[1.0, 7.0, 2.0, 3.0]);

        let summary = SentenceSelector::new(1).with_num_sentences(2).select(&sentences, &scored);

        let scores: Vec<_> = summary.sentences.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![Some(7.0), Some(3.0)]);
    }
}
