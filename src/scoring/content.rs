// Content-keyword scorer — scam vocabulary vs. ordinary post vocabulary in
// the path and query string.

use tracing::debug;

use crate::link::ParsedUrl;

use super::result::PartialResult;
use super::rules::{
    apply_all, CONTENT_KEYWORDS, EXCESSIVE_SPECIAL_CHARS, EXCESSIVE_SPECIAL_CHARS_DELTA,
    HIGH_SPECIAL_CHARS, HIGH_SPECIAL_CHARS_DELTA, HIGH_SPECIAL_CHARS_LABEL, SPECIAL_CHARACTER,
    SPECIAL_CHARACTERS_LABEL,
};

/// Score the lowercased path and query string for keyword signals.
///
/// Every keyword is checked independently by substring, so "winner" also
/// trips "win". A heavy count of special characters adds a further penalty.
pub fn score_content(url: &ParsedUrl) -> PartialResult {
    let mut partial = PartialResult::new();
    let content = url.path_and_search().to_lowercase();

    apply_all(&CONTENT_KEYWORDS, &content, &mut partial);

    let special_count = SPECIAL_CHARACTER.find_iter(&content).count();
    if special_count > EXCESSIVE_SPECIAL_CHARS {
        partial.record(EXCESSIVE_SPECIAL_CHARS_DELTA, SPECIAL_CHARACTERS_LABEL);
    } else if special_count > HIGH_SPECIAL_CHARS {
        partial.record(HIGH_SPECIAL_CHARS_DELTA, HIGH_SPECIAL_CHARS_LABEL);
    }

    debug!(
        special_count,
        points = partial.points,
        red = partial.red_flags.len(),
        green = partial.green_flags.len(),
        "Scored content keywords"
    );

    let value = if special_count > EXCESSIVE_SPECIAL_CHARS {
        "Suspicious content"
    } else {
        "Normal content"
    };
    partial.summarize("Content Analysis", value);
    partial
}
