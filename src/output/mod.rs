// Terminal display of analysis results.

pub mod terminal;

/// Shorten a report field (the analyzed URL, a rule pattern) to `max_chars`
/// characters so it fits its column, marking the cut with "...".
///
/// Cuts on a character boundary, so URLs with non-ASCII paths are safe.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
