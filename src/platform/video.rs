// Video identifier extraction for platforms with a statistics adapter.

use crate::link::ParsedUrl;

use super::detect::{PlatformIdentity, PlatformName};

/// Path prefixes that carry a YouTube video id as the next segment.
const YOUTUBE_ID_ROUTES: &[&str] = &["shorts", "embed", "live", "v"];

/// Extract the platform video id the statistics adapter can look up.
///
/// Only YouTube is supported; every other platform returns `None`.
pub fn extract_video_id(url: &ParsedUrl, platform: &PlatformIdentity) -> Option<String> {
    if platform.name != PlatformName::YouTube {
        return None;
    }

    let segments: Vec<&str> = url.segments().collect();

    let id = if url.host.contains("youtu.be") {
        segments.first().copied()
    } else if segments.first() == Some(&"watch") {
        url.query_value("v")
    } else {
        segments
            .iter()
            .position(|s| YOUTUBE_ID_ROUTES.contains(s))
            .and_then(|pos| segments.get(pos + 1).copied())
    };

    id.filter(|id| is_plausible_id(id)).map(str::to_string)
}

/// YouTube ids are URL-safe base64: letters, digits, `-` and `_`.
fn is_plausible_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
