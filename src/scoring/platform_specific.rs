// Platform-specific scorer — does the link have the shape a real post on
// the detected platform would have?

use tracing::debug;

use crate::link::ParsedUrl;
use crate::platform::PlatformIdentity;

use super::result::PartialResult;
use super::rules::PLATFORM_RULES;

pub fn score_platform_specific(url: &ParsedUrl, platform: &PlatformIdentity) -> PartialResult {
    let mut partial = PartialResult::new();
    let mut exclusive_matched = false;
    let mut recognized = false;

    for rule in PLATFORM_RULES.iter().filter(|r| r.platform == platform.name) {
        if rule.exclusive && exclusive_matched {
            continue;
        }
        if (rule.check)(&url.path, &url.search) {
            partial.record(rule.delta, rule.label);
            if rule.exclusive {
                exclusive_matched = true;
            }
            if rule.delta > 0 {
                recognized = true;
            }
        }
    }

    debug!(
        platform = platform.name.as_str(),
        points = partial.points,
        "Scored platform-specific rules"
    );

    let value = if !platform.is_known() {
        "Unknown platform".to_string()
    } else if recognized {
        format!("Valid {} URL", platform.name)
    } else {
        format!("Unrecognized {} URL shape", platform.name)
    };
    partial.summarize("Platform-Specific Analysis", value);
    partial
}
