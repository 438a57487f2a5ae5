// ABOUTME: Small text helpers for directory length limits.
// ABOUTME: Truncation counts characters so multi-byte text never splits mid-codepoint.

/// Returns at most `max` characters of `text`, with no ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
