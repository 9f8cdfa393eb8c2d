// Scoring engine — rule tables, category scorers, aggregation, verdict and
// confidence.
//
// Every function in here is pure: the same URL always produces the same
// partial results, and the verdict and confidence depend only on the
// aggregate score and red-flag set.

pub mod aggregate;
pub mod confidence;
pub mod content;
pub mod domain;
pub mod platform_specific;
pub mod result;
pub mod rules;
pub mod structure;
pub mod verdict;

use crate::link::ParsedUrl;
use crate::platform::PlatformIdentity;

pub use aggregate::aggregate;
pub use confidence::compute_confidence;
pub use result::{DetailEntry, FlagSet, PartialResult, Tone};
pub use verdict::{determine_verdict, DisplayClass, Verdict, VerdictTier};

/// Run the four URL-text categories in their fixed evaluation order:
/// domain, URL structure, content keywords, platform-specific.
pub fn score_url_categories(url: &ParsedUrl, platform: &PlatformIdentity) -> Vec<PartialResult> {
    vec![
        domain::score_domain(&url.host),
        structure::score_structure(url),
        content::score_content(url),
        platform_specific::score_platform_specific(url, platform),
    ]
}
