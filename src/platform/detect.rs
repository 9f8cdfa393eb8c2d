// Maps a hostname to a known platform.

use serde::Serialize;

/// The social platforms the engine has rules for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlatformName {
    YouTube,
    Instagram,
    TikTok,
    Facebook,
    Twitter,
    Unknown,
}

impl PlatformName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformName::YouTube => "YouTube",
            PlatformName::Instagram => "Instagram",
            PlatformName::TikTok => "TikTok",
            PlatformName::Facebook => "Facebook",
            PlatformName::Twitter => "Twitter",
            PlatformName::Unknown => "Unknown Platform",
        }
    }
}

impl std::fmt::Display for PlatformName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What kind of content a platform primarily hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Video,
    Social,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlatformIdentity {
    pub name: PlatformName,
    pub category: ContentCategory,
}

impl PlatformIdentity {
    pub const UNKNOWN: PlatformIdentity = PlatformIdentity {
        name: PlatformName::Unknown,
        category: ContentCategory::Unknown,
    };

    const fn new(name: PlatformName, category: ContentCategory) -> Self {
        Self { name, category }
    }

    pub fn is_known(&self) -> bool {
        self.name != PlatformName::Unknown
    }
}

/// Host substrings in priority order. The first one contained in the host wins.
const PLATFORM_HOSTS: &[(&str, PlatformIdentity)] = &[
    (
        "youtube.com",
        PlatformIdentity::new(PlatformName::YouTube, ContentCategory::Video),
    ),
    (
        "youtu.be",
        PlatformIdentity::new(PlatformName::YouTube, ContentCategory::Video),
    ),
    (
        "instagram.com",
        PlatformIdentity::new(PlatformName::Instagram, ContentCategory::Social),
    ),
    (
        "tiktok.com",
        PlatformIdentity::new(PlatformName::TikTok, ContentCategory::Video),
    ),
    (
        "facebook.com",
        PlatformIdentity::new(PlatformName::Facebook, ContentCategory::Social),
    ),
    (
        "fb.com",
        PlatformIdentity::new(PlatformName::Facebook, ContentCategory::Social),
    ),
    (
        "twitter.com",
        PlatformIdentity::new(PlatformName::Twitter, ContentCategory::Social),
    ),
    (
        "x.com",
        PlatformIdentity::new(PlatformName::Twitter, ContentCategory::Social),
    ),
];

/// Identify the platform for a hostname.
///
/// Matching is by substring on the lowercased host, so subdomains such as
/// `m.youtube.com` resolve to their parent platform. Never fails: hosts that
/// match nothing are `Unknown`.
pub fn detect_platform(host: &str) -> PlatformIdentity {
    let host = host.to_lowercase();
    PLATFORM_HOSTS
        .iter()
        .find(|(needle, _)| host.contains(needle))
        .map(|(_, identity)| *identity)
        .unwrap_or(PlatformIdentity::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_platform() {
        let cases = [
            ("youtube.com", PlatformName::YouTube),
            ("youtu.be", PlatformName::YouTube),
            ("www.instagram.com", PlatformName::Instagram),
            ("vm.tiktok.com", PlatformName::TikTok),
            ("m.facebook.com", PlatformName::Facebook),
            ("fb.com", PlatformName::Facebook),
            ("twitter.com", PlatformName::Twitter),
            ("x.com", PlatformName::Twitter),
        ];
        for (host, expected) in cases {
            assert_eq!(detect_platform(host).name, expected, "host {host}");
        }
    }

    #[test]
    fn host_match_is_case_insensitive() {
        let identity = detect_platform("WWW.YouTube.COM");
        assert_eq!(identity.name, PlatformName::YouTube);
        assert_eq!(identity.category, ContentCategory::Video);
    }

    #[test]
    fn unknown_host() {
        assert_eq!(detect_platform("example.org"), PlatformIdentity::UNKNOWN);
        assert!(!detect_platform("192.168.1.1").is_known());
    }

    #[test]
    fn priority_order_decides_ambiguous_hosts() {
        // Contains both "youtube.com" and "x.com"; the earlier entry wins.
        assert_eq!(
            detect_platform("youtube.com.x.com").name,
            PlatformName::YouTube
        );
    }
}
