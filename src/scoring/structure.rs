// URL-structure scorer — overall length, known post shapes, and noisy paths.

use tracing::debug;

use crate::link::ParsedUrl;

use super::result::PartialResult;
use super::rules::{
    apply_all, apply_first, EXCESSIVE_URL_DELTA, EXCESSIVE_URL_LENGTH, LONG_URL_DELTA,
    LONG_URL_LENGTH, REASONABLE_URL_DELTA, SHORT_URL_DELTA, SHORT_URL_LENGTH,
    STRUCTURE_LEGITIMATE, STRUCTURE_SUSPICIOUS,
};

/// Score the shape of a URL.
///
/// Length is measured on the full normalized URL and exactly one length
/// tier applies. The legitimate-pattern table stops at its first match;
/// the suspicious-pattern table is evaluated in full. Both run against the
/// path plus query string with case preserved.
pub fn score_structure(url: &ParsedUrl) -> PartialResult {
    let mut partial = PartialResult::new();
    let length = url.full.len();

    match length {
        n if n > EXCESSIVE_URL_LENGTH => partial.record(EXCESSIVE_URL_DELTA, "Excessively long URL"),
        n if n > LONG_URL_LENGTH => partial.record(LONG_URL_DELTA, "Unusually long URL"),
        n if n < SHORT_URL_LENGTH => partial.record(SHORT_URL_DELTA, "Suspiciously short URL"),
        _ => partial.record(REASONABLE_URL_DELTA, "Reasonable URL length"),
    }

    let path_and_search = url.path_and_search();
    apply_first(&STRUCTURE_LEGITIMATE, &path_and_search, &mut partial);
    apply_all(&STRUCTURE_SUSPICIOUS, &path_and_search, &mut partial);

    debug!(length, points = partial.points, "Scored URL structure");

    let value = if length > LONG_URL_LENGTH {
        "Suspiciously long"
    } else {
        "Normal length"
    };
    partial.summarize("URL Structure", value);
    partial
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(raw: &str) -> PartialResult {
        score_structure(&ParsedUrl::parse(raw).unwrap())
    }

    #[test]
    fn youtube_watch_link() {
        let partial = score("https://youtube.com/watch?v=dQw4w9WgXcQ");
        // reasonable length + watch pattern
        assert_eq!(partial.points, 10 + 15);
        assert!(partial.green_flags.contains("YouTube video pattern"));
    }

    #[test]
    fn short_url_penalty() {
        let partial = score("https://a.io/");
        assert_eq!(partial.points, -5);
        assert!(partial.red_flags.contains("Suspiciously short URL"));
    }

    #[test]
    fn length_boundaries() {
        // Exactly 30 characters is not "short".
        let base = "https://example.com/";
        let url = format!("{base}{}", "a".repeat(30 - base.len()));
        assert_eq!(url.len(), 30);
        assert_eq!(score(&url).points, 10);

        // 201 characters is long; 301 is excessive.
        let long = format!("{base}{}", "a1/".repeat(61));
        let long = &long[..201];
        assert!(score(long).red_flags.contains("Unusually long URL"));
        let excessive = format!("{base}{}", "a1/".repeat(100));
        let excessive = &excessive[..301];
        assert!(score(excessive).red_flags.contains("Excessively long URL"));
    }

    #[test]
    fn only_first_legitimate_pattern_counts() {
        // Matches "/p/" and "/video/"; only the Instagram post pattern applies.
        let partial = score("https://www.instagram.com/p/abc/video/123");
        assert!(partial.green_flags.contains("Instagram post pattern"));
        assert!(!partial.green_flags.contains("Video content pattern"));
        assert_eq!(partial.points, 10 + 15);
    }

    #[test]
    fn suspicious_patterns_all_apply() {
        let partial = score("https://example.com/123456789012/abcdefghijklmnopqrstuvwxyzabcdef");
        assert!(partial.red_flags.contains("Excessive numbers in URL"));
        assert!(partial.red_flags.contains("Unusually long alphabetic string"));
        assert_eq!(partial.points, 10 - 20 - 15);
    }

    #[test]
    fn percent_encoding_counts_as_special() {
        let partial = score("https://example.com/some%20path");
        assert!(partial.red_flags.contains("Excessive special characters"));
    }
}
