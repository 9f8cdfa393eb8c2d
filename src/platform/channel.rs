// Best-effort channel/account extraction. Informational only.
//
// Reads the account or channel a link points at out of the URL path. The
// result is shown to the user but never feeds into the score.

use crate::link::ParsedUrl;

use super::detect::{PlatformIdentity, PlatformName};

/// Facebook routes that look like a page name in the first segment but aren't.
const FACEBOOK_RESERVED: &[&str] = &[
    "watch",
    "share",
    "groups",
    "events",
    "photo.php",
    "story.php",
    "profile.php",
    "reel",
    "permalink.php",
];

/// Extract a human-readable account or channel description, if the path has one.
pub fn extract_channel(url: &ParsedUrl, platform: &PlatformIdentity) -> Option<String> {
    let segments: Vec<&str> = url.segments().collect();

    match platform.name {
        PlatformName::YouTube => youtube_channel(url, &segments),
        PlatformName::Instagram => {
            let pos = segments.iter().position(|s| *s == "p" || *s == "reel")?;
            if pos == 0 {
                return None;
            }
            Some(format!("Instagram Account: @{}", segments[0]))
        }
        PlatformName::TikTok => segments
            .iter()
            .find_map(|s| s.strip_prefix('@'))
            .filter(|name| !name.is_empty())
            .map(|name| format!("TikTok Account: @{name}")),
        PlatformName::Twitter => {
            let pos = segments.iter().position(|s| *s == "status")?;
            let handle = segments[0];
            if pos == 0 || handle == "i" {
                return None;
            }
            Some(format!("Twitter Account: @{handle}"))
        }
        PlatformName::Facebook => segments
            .first()
            .filter(|s| !FACEBOOK_RESERVED.contains(s))
            .map(|s| format!("Facebook Page: {s}")),
        PlatformName::Unknown => None,
    }
}

fn youtube_channel(url: &ParsedUrl, segments: &[&str]) -> Option<String> {
    let after = |marker: &str| -> Option<&str> {
        let pos = segments.iter().position(|s| *s == marker)?;
        segments.get(pos + 1).copied()
    };

    if let Some(id) = after("channel") {
        return Some(format!("YouTube Channel ID: {id}"));
    }
    if let Some(user) = after("user") {
        return Some(format!("YouTube User: {user}"));
    }
    if let Some(name) = after("c") {
        return Some(format!("YouTube Channel: {name}"));
    }
    if let Some(name) = segments
        .iter()
        .find_map(|s| s.strip_prefix('@'))
        .filter(|n| !n.is_empty())
    {
        return Some(format!("YouTube Channel: {name}"));
    }
    if url.search.contains("v=") {
        return Some("YouTube Video (Channel info not available in URL)".to_string());
    }
    None
}
