//! Whitespace normalization

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
