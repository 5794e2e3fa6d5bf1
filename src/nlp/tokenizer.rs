//! Sentence splitting and word tokenization
//!
//! Sentences are runs of non-terminal characters closed by one or more of
//! `.`, `!`, `?`. Words are maximal runs of alphanumeric characters or `_`,
//! lower-cased.

use crate::types::Sentence;

/// Returns `true` for sentence-terminating punctuation.
#[inline]
pub fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split normalized text into sentences, left to right.
///
/// Each sentence is one or more non-terminal characters followed by the full
/// run of terminal punctuation after them. Terminal punctuation with no text
/// before it is skipped, and trailing text that never reaches a terminator is
/// dropped, so text without any terminal punctuation yields no sentences.
/// Sentence text is trimmed.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut body_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            if body_start.is_none() {
                body_start = Some(i);
            }
            continue;
        }

        let Some(start) = body_start.take() else {
            continue;
        };

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }

        sentences.push(Sentence::new(text[start..end].trim(), sentences.len()));
    }

    sentences
}

/// Extract lower-cased word tokens from `text`, in order, duplicates kept.
///
/// Word characters are Unicode alphanumerics and `_`, not only ASCII, so
/// "café" and "naïve" are single tokens and CJK or Cyrillic runs are counted
/// as words.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(text[s..i].to_lowercase());
        }
    }
    // Handle last token (no trailing separator)
    if let Some(s) = start {
        tokens.push(text[s..].to_lowercase());
    }

    tokens
}
