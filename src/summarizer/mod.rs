//! Summarization components
//!
//! Provides frequency-based extractive summarization: a document-level term
//! frequency table, two sentence-scoring strategies, and top-N selection
//! that keeps sentences in document order.

pub mod engine;
pub mod frequency;
pub mod scorer;
pub mod selector;
