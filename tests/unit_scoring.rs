// Unit tests for the scoring engine.
//
// Tests the pure pieces in isolation: verdict tier boundaries on both
// tracks, confidence clamping and penalty, single-rule score deltas for
// every rule table, and flag deduplication.

use truthcheck::analyze_url;
use truthcheck::scoring::confidence::compute_confidence;
use truthcheck::scoring::content::score_content;
use truthcheck::scoring::domain::score_domain;
use truthcheck::scoring::rules::{
    apply_all, apply_first, CONTENT_KEYWORDS, DOMAIN_SUSPICIOUS, HIGH_RISK_KEYWORDS,
    LEGITIMATE_KEYWORDS, MEDIUM_RISK_KEYWORDS, STRUCTURE_LEGITIMATE, STRUCTURE_SUSPICIOUS,
};
use truthcheck::scoring::structure::score_structure;
use truthcheck::scoring::{aggregate, determine_verdict, DisplayClass, PartialResult, VerdictTier};
use truthcheck::link::ParsedUrl;

// ============================================================
// Verdict tiers: boundary conditions
// ============================================================

#[test]
fn clean_exact_boundaries() {
    assert_eq!(VerdictTier::from_score(50, false), VerdictTier::LikelyReal);
    assert_eq!(VerdictTier::from_score(20, false), VerdictTier::ProbablyReal);
    assert_eq!(VerdictTier::from_score(-20, false), VerdictTier::Uncertain);
    assert_eq!(VerdictTier::from_score(-50, false), VerdictTier::Suspicious);
}

#[test]
fn clean_just_below_boundaries() {
    assert_eq!(VerdictTier::from_score(49, false), VerdictTier::ProbablyReal);
    assert_eq!(VerdictTier::from_score(19, false), VerdictTier::Uncertain);
    assert_eq!(VerdictTier::from_score(-21, false), VerdictTier::Suspicious);
    assert_eq!(VerdictTier::from_score(-51, false), VerdictTier::LikelyFake);
}

#[test]
fn flagged_exact_boundaries() {
    assert_eq!(VerdictTier::from_score(50, true), VerdictTier::PossiblyReal);
    assert_eq!(VerdictTier::from_score(20, true), VerdictTier::Uncertain);
    assert_eq!(VerdictTier::from_score(-20, true), VerdictTier::Suspicious);
    assert_eq!(VerdictTier::from_score(-50, true), VerdictTier::LikelyFake);
}

#[test]
fn flagged_just_below_boundaries() {
    assert_eq!(VerdictTier::from_score(49, true), VerdictTier::Uncertain);
    assert_eq!(VerdictTier::from_score(19, true), VerdictTier::Suspicious);
    assert_eq!(VerdictTier::from_score(-21, true), VerdictTier::LikelyFake);
    assert_eq!(VerdictTier::from_score(-51, true), VerdictTier::DefinitelyFake);
}

#[test]
fn red_flags_never_improve_the_verdict() {
    // Tiers are declared best to worst, so the derived order works as a rank.
    let rank = |t: VerdictTier| t as u8;
    for score in -120..=120 {
        let clean = VerdictTier::from_score(score, false);
        let flagged = VerdictTier::from_score(score, true);
        assert!(
            rank(flagged) > rank(clean),
            "score {score}: flagged {flagged} should be worse than clean {clean}"
        );
    }
}

#[test]
fn verdict_is_deterministic() {
    for score in [-80, -50, -20, 0, 20, 50, 80] {
        for flags in [false, true] {
            assert_eq!(determine_verdict(score, flags), determine_verdict(score, flags));
        }
    }
}

#[test]
fn verdict_titles_and_classes() {
    let cases = [
        (VerdictTier::LikelyReal, "Likely Real", DisplayClass::Real),
        (VerdictTier::ProbablyReal, "Probably Real", DisplayClass::Real),
        (VerdictTier::PossiblyReal, "Possibly Real", DisplayClass::Uncertain),
        (VerdictTier::Uncertain, "Uncertain", DisplayClass::Uncertain),
        (VerdictTier::Suspicious, "Suspicious", DisplayClass::Fake),
        (VerdictTier::LikelyFake, "Likely Fake", DisplayClass::Fake),
        (VerdictTier::DefinitelyFake, "Definitely Fake", DisplayClass::Fake),
    ];
    for (tier, title, class) in cases {
        assert_eq!(tier.as_str(), title);
        assert_eq!(tier.display_class(), class);
        assert!(!tier.description().is_empty());
    }
}

// ============================================================
// Confidence
// ============================================================

#[test]
fn confidence_without_flags_spans_zero_to_hundred() {
    for score in -200..=200 {
        let c = compute_confidence(score, 0);
        assert!(c <= 100, "score {score} gave {c}");
    }
    assert_eq!(compute_confidence(0, 0), 0);
}

#[test]
fn confidence_with_flags_has_floor() {
    for score in -200..=200 {
        for flags in 1..12 {
            let c = compute_confidence(score, flags);
            assert!((10..=100).contains(&c), "score {score}, flags {flags} gave {c}");
        }
    }
}

#[test]
fn confidence_penalty_examples() {
    // |93| * 8 clamps to 100, no flags
    assert_eq!(compute_confidence(93, 0), 100);
    // 100 - min(8 * 8, 40)
    assert_eq!(compute_confidence(-155, 8), 60);
    // 6 * 8 = 48, minus 2 flags * 8
    assert_eq!(compute_confidence(6, 2), 32);
}

// ============================================================
// Single-rule deltas: content keyword table
// ============================================================

/// Sum of every keyword rule whose needle occurs in `text`.
fn expected_keyword_points(text: &str) -> i32 {
    CONTENT_KEYWORDS
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.delta)
        .sum()
}

#[test]
fn each_keyword_contributes_its_delta() {
    let all = HIGH_RISK_KEYWORDS
        .iter()
        .chain(MEDIUM_RISK_KEYWORDS)
        .chain(LEGITIMATE_KEYWORDS);
    for keyword in all {
        let url = ParsedUrl::parse(&format!("https://example.com/{keyword}")).unwrap();
        let partial = score_content(&url);
        assert_eq!(
            partial.points,
            expected_keyword_points(&format!("/{keyword}")),
            "keyword {keyword}"
        );
        assert!(partial.points != 0, "keyword {keyword} should score");
    }
}

#[test]
fn standalone_keywords_score_exactly_their_delta_end_to_end() {
    // Baseline: unknown domain (-30) + reasonable length (+10).
    let baseline = analyze_url("https://example.com/zzzzzzzzzz").unwrap();
    assert_eq!(baseline.score, -20);

    let cases = [
        ("earn", -20),
        ("lottery", -20),
        ("bitcoin", -20),
        ("discount", -10),
        ("bonus", -10),
        ("channel", 8),
        ("upload", 8),
    ];
    for (keyword, delta) in cases {
        let result = analyze_url(&format!("https://example.com/zzzzzzzzzz{keyword}")).unwrap();
        assert_eq!(
            result.score - baseline.score,
            delta,
            "keyword {keyword} should move the score by exactly {delta}"
        );
    }
}

#[test]
fn superstring_keyword_triggers_both_rules() {
    let baseline = analyze_url("https://example.com/zzzzzzzzzz").unwrap();
    let result = analyze_url("https://example.com/zzzzzzzzzzmake-money").unwrap();
    // "make-money" and "money"
    assert_eq!(result.score - baseline.score, -40);
}

// ============================================================
// Single-rule deltas: domain and URL-structure tables
// ============================================================

/// Flags recorded by `partial`, red then green.
fn labels(partial: &PartialResult) -> Vec<&str> {
    partial.red_flags.iter().chain(partial.green_flags.iter()).collect()
}

#[test]
fn each_suspicious_domain_rule_fires_alone() {
    let cases = [
        ("a123456.com", -25, "Excessive numbers in domain"),
        ("abcdefghijklmnopqrstuvwxyz.org", -20, "Unusually long domain string"),
        (
            "aaaaaaaaaaaaaaaaaaaa12345aaaaaaaaaaaaaaaaaaaa.com",
            -25,
            "Very long alphanumeric domain",
        ),
        ("bit.ly", -15, "URL shortener detected"),
        ("a1b2.com", -20, "Suspicious alternating pattern"),
        ("[::1]", -10, "Special characters in domain"),
        ("my_site.com", -10, "Special characters in domain"),
    ];
    for (host, delta, label) in cases {
        let mut partial = PartialResult::new();
        apply_all(&DOMAIN_SUSPICIOUS, host, &mut partial);
        assert_eq!(partial.points, delta, "host {host}");
        assert_eq!(labels(&partial), [label], "host {host}");

        // Through the scorer: the unknown-domain penalty plus this rule only.
        let scored = score_domain(host);
        assert_eq!(scored.points, -30 + delta, "host {host}");
        assert_eq!(
            labels(&scored),
            ["Unknown or suspicious domain", label],
            "host {host}"
        );
    }
}

#[test]
fn each_legitimate_structure_rule_fires_alone() {
    let cases = [
        ("/watch?v=abc123", 15, "YouTube video pattern"),
        ("/p/Cabc", 15, "Instagram post pattern"),
        ("/reel/1abc", 15, "Instagram reel pattern"),
        ("/@someone", 10, "Username pattern"),
        ("/jack/status/20", 15, "Twitter status pattern"),
        ("/video/123", 10, "Video content pattern"),
    ];
    for (path, delta, label) in cases {
        let mut partial = PartialResult::new();
        assert!(apply_first(&STRUCTURE_LEGITIMATE, path, &mut partial), "path {path}");
        assert_eq!(partial.points, delta, "path {path}");
        assert_eq!(labels(&partial), [label], "path {path}");
    }
}

#[test]
fn each_suspicious_structure_rule_fires_alone() {
    let cases = [
        ("/123456789012", -20, "Excessive numbers in URL"),
        (
            "/abc123abc123abc123abc123abc123abc123abc123abc123abc123abc123",
            -25,
            "Very long URL string",
        ),
        ("/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", -15, "Unusually long alphabetic string"),
        ("/a%20b", -10, "Excessive special characters"),
    ];
    for (path, delta, label) in cases {
        let mut partial = PartialResult::new();
        apply_all(&STRUCTURE_SUSPICIOUS, path, &mut partial);
        assert_eq!(partial.points, delta, "path {path}");
        assert_eq!(labels(&partial), [label], "path {path}");
    }
}

#[test]
fn structure_rules_through_the_scorer() {
    // "https://example.com" plus a path of 11+ characters lands in the
    // reasonable-length tier (+10); the rule under test adds its delta.
    let cases = [
        ("/reel/1abcdefg", 15, "Instagram reel pattern"),
        ("/jack/status/20", 15, "Twitter status pattern"),
        ("/zzzz/@someone", 10 - 10, "Username pattern"),
        (
            "/abc123abc123abc123abc123abc123abc123abc123abc123abc123abc123",
            -25,
            "Very long URL string",
        ),
    ];
    for (path, delta, label) in cases {
        let url = ParsedUrl::parse(&format!("https://example.com{path}")).unwrap();
        let partial = score_structure(&url);
        assert_eq!(partial.points, 10 + delta, "path {path}");
        assert!(labels(&partial).contains(&label), "path {path}");
    }
}

// ============================================================
// Aggregation and deduplication
// ============================================================

#[test]
fn duplicate_label_across_categories_appears_once() {
    // 26 special characters trip both the URL-structure special-character
    // rule and the content special-character rule, which share a label.
    let url = format!("https://example.com/{}", "%".repeat(26));
    let result = analyze_url(&url).unwrap();
    let count = result
        .red_flags
        .iter()
        .filter(|f| *f == "Excessive special characters")
        .count();
    assert_eq!(count, 1);
    // Both rules still score: -30 domain, +10 length, -10 structure, -15 content
    assert_eq!(result.score, -45);
    assert_eq!(result.red_flags.len(), 2);
}

#[test]
fn aggregate_preserves_category_order() {
    let mut a = PartialResult::new();
    a.record(5, "first");
    a.summarize("One", "a");
    let mut b = PartialResult::new();
    b.record(5, "first");
    b.record(-1, "second");
    b.summarize("Two", "b");

    let total = aggregate([a, b]);
    assert_eq!(total.points, 9);
    assert_eq!(total.green_flags.len(), 1);
    assert_eq!(total.details[0].title, "One");
    assert_eq!(total.details[1].title, "Two");
}
