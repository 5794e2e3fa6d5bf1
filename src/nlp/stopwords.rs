//! Stopword filtering
//!
//! The default filter uses a fixed English closed-class word list, built once
//! per process and shared read-only by every filter that uses it. Other
//! languages are loaded from the `stop-words` crate.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Built-in English stopwords.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now",
];

static ENGLISH_STOPWORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());

/// A filter for removing stopwords and single-character tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Owned, lower-cased list; `None` means the shared built-in English list
    custom: Option<FxHashSet<String>>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The built-in English filter
    pub fn english() -> Self {
        Self { custom: None }
    }

    /// Load a stopword list for the given language from the `stop-words` crate
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar.
    /// Unknown languages fall back to the built-in English list.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return Self::english(),
        };

        Self {
            custom: Some(get(lang).iter().map(|s| s.to_lowercase()).collect()),
        }
    }

    /// Create an empty stopword filter; only single-character tokens are removed
    pub fn empty() -> Self {
        Self {
            custom: Some(FxHashSet::default()),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            custom: Some(words.iter().map(|w| w.to_lowercase()).collect()),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        let set = self.make_custom();
        for word in words {
            set.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        let set = self.make_custom();
        for word in words {
            set.remove(&word.to_lowercase());
        }
    }

    fn make_custom(&mut self) -> &mut FxHashSet<String> {
        self.custom
            .get_or_insert_with(|| ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect())
    }

    /// Check if a lower-cased token is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        match &self.custom {
            None => ENGLISH_STOPWORDS.contains(word),
            Some(set) => set.contains(word),
        }
    }

    /// Check if a token survives filtering: not a stopword and longer than
    /// one character
    pub fn keeps(&self, word: &str) -> bool {
        word.chars().nth(1).is_some() && !self.is_stopword(word)
    }

    /// Remove stopwords and single-character tokens, preserving order
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| self.keeps(t)).collect()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        match &self.custom {
            None => ENGLISH_STOPWORDS.len(),
            Some(set) => set.len(),
        }
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
