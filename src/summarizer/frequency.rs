//! Document-level term frequency table
//!
//! Counts filtered content words over the whole document. Entries remember
//! the order in which each term first appeared so that ranking by count is
//! deterministic when counts tie.

use rustc_hash::{FxHashMap, FxHashSet};

/// Term -> occurrence count over a filtered token sequence
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Maps term -> slot in `entries`
    term_to_slot: FxHashMap<String, usize>,
    /// (term, count) in first-occurrence order
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a filtered token sequence
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    /// Record one occurrence of `term`
    pub fn add(&mut self, term: &str) {
        if let Some(&slot) = self.term_to_slot.get(term) {
            self.entries[slot].1 += 1;
        } else {
            self.term_to_slot.insert(term.to_string(), self.entries.len());
            self.entries.push((term.to_string(), 1));
        }
    }

    /// Occurrence count of `term`, or 0 if it was never seen
    pub fn count(&self, term: &str) -> usize {
        self.term_to_slot
            .get(term)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Returns `true` if `term` has an entry
    pub fn contains(&self, term: &str) -> bool {
        self.term_to_slot.contains_key(term)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted occurrences
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Iterate over (term, count) in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Entries sorted by count descending; ties keep first-occurrence order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-count terms as a set
    pub fn top_n(&self, n: usize) -> FxHashSet<&str> {
        self.ranked().into_iter().take(n).map(|(t, _)| t).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::tokenize_words;

    #[test]
    fn test_counts_over_filtered_document() {
        let filter = StopwordFilter::english();
        let tokens = filter.filter(tokenize_words("The cat sat. The cat ran."));
        let table = FrequencyTable::from_tokens(&tokens);

        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("sat"), 1);
        assert_eq!(table.count("ran"), 1);
        assert_eq!(table.count("the"), 0);
        assert!(!table.contains("the"));
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_case_folds_into_one_entry() {
        let filter = StopwordFilter::english();
        let tokens = filter.filter(tokenize_words("Dog dog DOG"));
        let table = FrequencyTable::from_tokens(tokens);

        assert_eq!(table.count("dog"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let table = FrequencyTable::from_tokens(["beta", "alpha", "gamma", "alpha", "delta"]);
        let ranked = table.ranked();

        assert_eq!(
            ranked,
            vec![("alpha", 2), ("beta", 1), ("gamma", 1), ("delta", 1)]
        );
    }

    #[test]
    fn test_top_n() {
        let table = FrequencyTable::from_tokens(["a1", "b2", "b2", "c3", "c3", "c3"]);

        let top = table.top_n(2);
        assert!(top.contains("c3"));
        assert!(top.contains("b2"));
        assert!(!top.contains("a1"));

        assert!(table.top_n(0).is_empty());
        assert_eq!(table.top_n(10).len(), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_tokens(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.count("anything"), 0);
        assert!(table.ranked().is_empty());
    }
}
