// Rule tables — the static (pattern, delta, label) data the scorers run.
//
// Tables are built once on first use and never mutated. Red vs. green is
// decided purely by the sign of each rule's delta.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::platform::PlatformName;

use super::result::PartialResult;

/// How a rule recognizes its input.
#[derive(Debug)]
pub enum Pattern {
    Regex(Regex),
    Substring(&'static str),
}

impl Pattern {
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Pattern::Regex(re) => re.is_match(haystack),
            Pattern::Substring(needle) => haystack.contains(needle),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Regex(re) => re.as_str(),
            Pattern::Substring(needle) => needle,
        }
    }
}

#[derive(Debug)]
pub struct RuleEntry {
    pub pattern: Pattern,
    pub delta: i32,
    pub label: String,
}

impl RuleEntry {
    fn regex(pattern: &str, delta: i32, label: &str) -> Self {
        // Patterns are literals in this file; the table test compiles all of them.
        let re = Regex::new(pattern).expect("rule table regex must compile");
        Self {
            pattern: Pattern::Regex(re),
            delta,
            label: label.to_string(),
        }
    }

    fn substring(needle: &'static str, delta: i32, label: String) -> Self {
        Self {
            pattern: Pattern::Substring(needle),
            delta,
            label,
        }
    }

    /// Record this rule into `partial` if it matches. Returns whether it matched.
    pub fn apply(&self, haystack: &str, partial: &mut PartialResult) -> bool {
        if self.pattern.is_match(haystack) {
            partial.record(self.delta, self.label.clone());
            true
        } else {
            false
        }
    }
}

/// Evaluate every rule in `table`; nothing short-circuits.
pub fn apply_all(table: &[RuleEntry], haystack: &str, partial: &mut PartialResult) {
    for rule in table {
        rule.apply(haystack, partial);
    }
}

/// Evaluate `table` in order and stop after the first match.
pub fn apply_first(table: &[RuleEntry], haystack: &str, partial: &mut PartialResult) -> bool {
    table.iter().any(|rule| rule.apply(haystack, partial))
}

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// Host substrings of the platforms this tool knows to be genuine.
pub const LEGITIMATE_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "instagram.com",
    "tiktok.com",
    "facebook.com",
    "fb.com",
    "twitter.com",
    "x.com",
];

pub const LEGITIMATE_DOMAIN_DELTA: i32 = 40;
pub const LEGITIMATE_DOMAIN_LABEL: &str = "Legitimate social media platform detected";
pub const UNKNOWN_DOMAIN_DELTA: i32 = -30;
pub const UNKNOWN_DOMAIN_LABEL: &str = "Unknown or suspicious domain";

pub static DOMAIN_SUSPICIOUS: LazyLock<Vec<RuleEntry>> = LazyLock::new(|| {
    vec![
        RuleEntry::regex("[0-9]{6,}", -25, "Excessive numbers in domain"),
        RuleEntry::regex("[a-z]{25,}", -20, "Unusually long domain string"),
        RuleEntry::regex("[a-z0-9]{40,}", -25, "Very long alphanumeric domain"),
        RuleEntry::regex(r"bit\.ly|tinyurl|goo\.gl|t\.co", -15, "URL shortener detected"),
        RuleEntry::regex("[a-z]+[0-9]+[a-z]+[0-9]+", -20, "Suspicious alternating pattern"),
        RuleEntry::regex("[^a-z0-9.-]", -10, "Special characters in domain"),
    ]
});

// ---------------------------------------------------------------------------
// URL structure
// ---------------------------------------------------------------------------

/// Length tiers over the full normalized URL. Exactly one applies.
pub const EXCESSIVE_URL_LENGTH: usize = 300;
pub const LONG_URL_LENGTH: usize = 200;
pub const SHORT_URL_LENGTH: usize = 30;
pub const EXCESSIVE_URL_DELTA: i32 = -20;
pub const LONG_URL_DELTA: i32 = -10;
pub const SHORT_URL_DELTA: i32 = -5;
pub const REASONABLE_URL_DELTA: i32 = 10;

/// Shapes of genuine post/video URLs. Only the first match counts.
pub static STRUCTURE_LEGITIMATE: LazyLock<Vec<RuleEntry>> = LazyLock::new(|| {
    vec![
        RuleEntry::regex(r"/watch\?v=", 15, "YouTube video pattern"),
        RuleEntry::regex("/p/", 15, "Instagram post pattern"),
        RuleEntry::regex("/reel/", 15, "Instagram reel pattern"),
        RuleEntry::regex("/@[a-zA-Z0-9_]+", 10, "Username pattern"),
        RuleEntry::regex("/status/", 15, "Twitter status pattern"),
        RuleEntry::regex("/video/", 10, "Video content pattern"),
    ]
});

pub const SPECIAL_CHARACTERS_LABEL: &str = "Excessive special characters";

pub static STRUCTURE_SUSPICIOUS: LazyLock<Vec<RuleEntry>> = LazyLock::new(|| {
    vec![
        RuleEntry::regex("[0-9]{12,}", -20, "Excessive numbers in URL"),
        RuleEntry::regex("[a-z0-9]{60,}", -25, "Very long URL string"),
        RuleEntry::regex("[a-z]{30,}", -15, "Unusually long alphabetic string"),
        RuleEntry::regex("[^a-zA-Z0-9/?=&.-]", -10, SPECIAL_CHARACTERS_LABEL),
    ]
});

// ---------------------------------------------------------------------------
// Content keywords
// ---------------------------------------------------------------------------

pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "earn",
    "money",
    "free",
    "win",
    "prize",
    "lottery",
    "crypto",
    "bitcoin",
    "investment",
    "get-rich",
    "make-money",
    "urgent",
    "limited",
    "exclusive",
    "secret",
    "hidden",
    "click",
    "claim",
    "verify",
    "confirm",
    "update",
];
pub const HIGH_RISK_DELTA: i32 = -20;

pub const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "discount",
    "offer",
    "deal",
    "sale",
    "bonus",
    "reward",
    "gift",
    "opportunity",
    "chance",
    "lucky",
    "winner",
    "selected",
];
pub const MEDIUM_RISK_DELTA: i32 = -10;

pub const LEGITIMATE_KEYWORDS: &[&str] = &[
    "watch", "video", "post", "reel", "story", "status", "user", "profile", "channel", "page",
    "photo", "image", "upload", "share",
];
pub const LEGITIMATE_KEYWORD_DELTA: i32 = 8;

pub static CONTENT_KEYWORDS: LazyLock<Vec<RuleEntry>> = LazyLock::new(|| {
    let high = HIGH_RISK_KEYWORDS.iter().map(|&w| {
        RuleEntry::substring(w, HIGH_RISK_DELTA, format!("High-risk keyword detected: \"{w}\""))
    });
    let medium = MEDIUM_RISK_KEYWORDS.iter().map(|&w| {
        RuleEntry::substring(
            w,
            MEDIUM_RISK_DELTA,
            format!("Medium-risk keyword detected: \"{w}\""),
        )
    });
    let legit = LEGITIMATE_KEYWORDS.iter().map(|&w| {
        RuleEntry::substring(
            w,
            LEGITIMATE_KEYWORD_DELTA,
            format!("Legitimate content keyword: \"{w}\""),
        )
    });
    high.chain(medium).chain(legit).collect()
});

/// Characters outside this class count as "special".
pub static SPECIAL_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zA-Z0-9/?=&.-]").expect("special character regex"));

pub const EXCESSIVE_SPECIAL_CHARS: usize = 25;
pub const EXCESSIVE_SPECIAL_CHARS_DELTA: i32 = -15;
pub const HIGH_SPECIAL_CHARS: usize = 15;
pub const HIGH_SPECIAL_CHARS_DELTA: i32 = -8;
pub const HIGH_SPECIAL_CHARS_LABEL: &str = "High number of special characters";

// ---------------------------------------------------------------------------
// Platform-specific
// ---------------------------------------------------------------------------

/// A rule that only applies to links on one platform.
pub struct PlatformRule {
    pub platform: PlatformName,
    /// Predicate over `(path, search)`.
    pub check: fn(&str, &str) -> bool,
    pub delta: i32,
    pub label: &'static str,
    /// Exclusive rules for the same platform are alternatives: once one
    /// matches, later exclusive rules for that platform are skipped.
    pub exclusive: bool,
}

impl std::fmt::Debug for PlatformRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformRule")
            .field("platform", &self.platform)
            .field("delta", &self.delta)
            .field("label", &self.label)
            .field("exclusive", &self.exclusive)
            .finish()
    }
}

fn youtube_video(path: &str, search: &str) -> bool {
    path.contains("/watch") && search.contains("v=")
}

fn youtube_channel(path: &str, _search: &str) -> bool {
    ["/channel/", "/user/", "/c/", "/@"]
        .iter()
        .any(|needle| path.contains(needle))
}

fn youtube_bare_playlist(_path: &str, search: &str) -> bool {
    search.contains("list=") && !search.contains("v=")
}

fn instagram_post(path: &str, _search: &str) -> bool {
    path.contains("/p/") || path.contains("/reel/")
}

fn tiktok_content(path: &str, _search: &str) -> bool {
    path.contains("/@") || path.contains("/video/")
}

fn twitter_status(path: &str, _search: &str) -> bool {
    path.contains("/status/")
}

pub static PLATFORM_RULES: &[PlatformRule] = &[
    PlatformRule {
        platform: PlatformName::YouTube,
        check: youtube_video,
        delta: 20,
        label: "Valid YouTube video URL",
        exclusive: true,
    },
    PlatformRule {
        platform: PlatformName::YouTube,
        check: youtube_channel,
        delta: 15,
        label: "Valid YouTube channel URL",
        exclusive: true,
    },
    PlatformRule {
        platform: PlatformName::YouTube,
        check: youtube_bare_playlist,
        delta: -10,
        label: "YouTube playlist without video ID",
        exclusive: false,
    },
    PlatformRule {
        platform: PlatformName::Instagram,
        check: instagram_post,
        delta: 20,
        label: "Valid Instagram post/reel URL",
        exclusive: true,
    },
    PlatformRule {
        platform: PlatformName::TikTok,
        check: tiktok_content,
        delta: 20,
        label: "Valid TikTok URL",
        exclusive: true,
    },
    PlatformRule {
        platform: PlatformName::Twitter,
        check: twitter_status,
        delta: 20,
        label: "Valid Twitter status URL",
        exclusive: true,
    },
];

// ---------------------------------------------------------------------------
// Scraped text (page content and video titles)
// ---------------------------------------------------------------------------

pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "click here",
    "limited time",
    "act now",
    "free money",
    "get rich",
    "guaranteed",
    "you won",
    "you have won",
    "congratulations",
    "claim your",
    "verify your account",
    "100% free",
    "miracle",
    "shocking",
    "you won't believe",
    "giveaway",
    "double your",
    "send bitcoin",
    "wire transfer",
    "risk free",
];
pub const SUSPICIOUS_PHRASE_DELTA: i32 = -15;

pub const TRUST_PHRASES: &[&str] = &[
    "official",
    "verified",
    "subscribe",
    "privacy policy",
    "terms of service",
    "copyright",
];
pub const TRUST_PHRASE_DELTA: i32 = 5;

pub static SUSPICIOUS_TEXT: LazyLock<Vec<RuleEntry>> = LazyLock::new(|| {
    SUSPICIOUS_PHRASES
        .iter()
        .map(|&p| {
            RuleEntry::substring(p, SUSPICIOUS_PHRASE_DELTA, format!("Suspicious phrase: \"{p}\""))
        })
        .collect()
});

pub static TRUST_TEXT: LazyLock<Vec<RuleEntry>> = LazyLock::new(|| {
    TRUST_PHRASES
        .iter()
        .map(|&p| RuleEntry::substring(p, TRUST_PHRASE_DELTA, format!("Trust signal: \"{p}\"")))
        .collect()
});

/// A flattened view of one rule, for listing the loaded tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub category: &'static str,
    pub pattern: String,
    pub delta: i32,
    pub label: String,
}

/// Every table rule that can be listed as data, in evaluation order.
///
/// Threshold rules (URL length tiers, special-character counts, content
/// length) live in the scorers and are not included.
pub fn all_rules() -> Vec<RuleSummary> {
    let mut out = Vec::new();

    for needle in LEGITIMATE_DOMAINS {
        out.push(RuleSummary {
            category: "domain",
            pattern: (*needle).to_string(),
            delta: LEGITIMATE_DOMAIN_DELTA,
            label: LEGITIMATE_DOMAIN_LABEL.to_string(),
        });
    }

    let tables: [(&'static str, &[RuleEntry]); 6] = [
        ("domain", &DOMAIN_SUSPICIOUS[..]),
        ("structure", &STRUCTURE_LEGITIMATE[..]),
        ("structure", &STRUCTURE_SUSPICIOUS[..]),
        ("content", &CONTENT_KEYWORDS[..]),
        ("page", &SUSPICIOUS_TEXT[..]),
        ("page", &TRUST_TEXT[..]),
    ];
    for (category, table) in tables {
        out.extend(table.iter().map(|rule| RuleSummary {
            category,
            pattern: rule.pattern.as_str().to_string(),
            delta: rule.delta,
            label: rule.label.clone(),
        }));
    }

    out.extend(PLATFORM_RULES.iter().map(|rule| RuleSummary {
        category: "platform",
        pattern: rule.platform.as_str().to_string(),
        delta: rule.delta,
        label: rule.label.to_string(),
    }));

    out
}
