// Is the host a known platform, and does it look machine-made?

use tracing::debug;

use super::result::PartialResult;
use super::rules::{
    apply_all, DOMAIN_SUSPICIOUS, LEGITIMATE_DOMAINS, LEGITIMATE_DOMAIN_DELTA,
    LEGITIMATE_DOMAIN_LABEL, UNKNOWN_DOMAIN_DELTA, UNKNOWN_DOMAIN_LABEL,
};

/// Score a lowercased host name.
///
/// A legitimate-platform match is worth a flat bonus; anything else takes a
/// flat penalty. The suspicious-pattern table is then evaluated in full on
/// top of either outcome.
pub fn score_domain(host: &str) -> PartialResult {
    let mut partial = PartialResult::new();

    let legitimate = LEGITIMATE_DOMAINS.iter().any(|d| host.contains(d));
    if legitimate {
        partial.record(LEGITIMATE_DOMAIN_DELTA, LEGITIMATE_DOMAIN_LABEL);
    } else {
        partial.record(UNKNOWN_DOMAIN_DELTA, UNKNOWN_DOMAIN_LABEL);
    }

    apply_all(&DOMAIN_SUSPICIOUS, host, &mut partial);

    debug!(host, points = partial.points, legitimate, "Scored domain");

    let value = if legitimate {
        "Legitimate platform"
    } else {
        "Suspicious domain"
    };
    partial.summarize("Domain Analysis", value);
    partial
}
