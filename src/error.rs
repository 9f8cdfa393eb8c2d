// Error taxonomy for the analysis engine.
//
// Only InvalidUrl ever reaches the caller of `analyze`. EnrichmentUnavailable
// is built by the enrichment adapters so failures are logged with a uniform
// shape, then folded into the result as a degraded or omitted category.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input could not be parsed as an absolute URL.
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    /// An external lookup failed, timed out, or is not configured.
    #[error("{service} enrichment unavailable: {reason}")]
    EnrichmentUnavailable {
        service: &'static str,
        reason: String,
    },
}

impl AnalysisError {
    pub fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn enrichment(service: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::EnrichmentUnavailable {
            service,
            reason: reason.into(),
        }
    }
}
