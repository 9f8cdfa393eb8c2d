// Page-content adapter — scrape the linked page and score what it says.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::scoring::rules::{apply_all, SUSPICIOUS_TEXT, TRUST_TEXT};
use crate::scoring::PartialResult;

use super::traits::{ContentFetcher, PageContent};

const DETAIL_TITLE: &str = "Page Content";

const THIN_CONTENT_CHARS: usize = 100;
const THIN_CONTENT_DELTA: i32 = -15;
const RICH_CONTENT_CHARS: usize = 1000;
const RICH_CONTENT_DELTA: i32 = 10;
const SHORT_TITLE_CHARS: usize = 10;
const SHORT_TITLE_DELTA: i32 = -10;
const TITLE_DELTA: i32 = 5;

/// Applied when the page could not be fetched at all.
pub const UNVERIFIED_DELTA: i32 = -5;
pub const UNVERIFIED_LABEL: &str = "Could not verify page content";

/// Score successfully scraped page content.
///
/// Phrase rules run over the lowercased `title description content`. Then
/// one content-length rule (thin or rich, or neither) and one title rule.
/// The detail entry summarizes phrase count and content length.
pub fn score_page_content(page: &PageContent) -> PartialResult {
    let mut partial = PartialResult::new();

    let text = format!("{} {} {}", page.title, page.description, page.content).to_lowercase();
    apply_all(&SUSPICIOUS_TEXT, &text, &mut partial);
    let suspicious = partial.red_flags.len();
    apply_all(&TRUST_TEXT, &text, &mut partial);

    let content_chars = page.content.chars().count();
    if content_chars < THIN_CONTENT_CHARS {
        partial.record(THIN_CONTENT_DELTA, "Very little page content");
    } else if content_chars > RICH_CONTENT_CHARS {
        partial.record(RICH_CONTENT_DELTA, "Substantial page content");
    }

    if page.title.trim().chars().count() < SHORT_TITLE_CHARS {
        partial.record(SHORT_TITLE_DELTA, "Missing or very short page title");
    } else {
        partial.record(TITLE_DELTA, "Descriptive page title");
    }

    let summary = format!(
        "{} suspicious phrase{}, {} characters of content",
        suspicious,
        if suspicious == 1 { "" } else { "s" },
        content_chars
    );
    partial.summarize(DETAIL_TITLE, summary);
    partial
}

/// The degraded result used whenever the page cannot be scraped.
pub fn unverified() -> PartialResult {
    let mut partial = PartialResult::new();
    partial.record(UNVERIFIED_DELTA, UNVERIFIED_LABEL);
    partial.summarize(DETAIL_TITLE, "Verification unavailable");
    partial
}

/// Fetch and score the page behind `url`. Never fails.
///
/// Network errors, bad status codes, malformed payloads and timeouts all
/// fold into [`unverified`].
pub async fn assess_content(
    fetcher: &dyn ContentFetcher,
    url: &str,
    timeout: Duration,
) -> PartialResult {
    let outcome = match tokio::time::timeout(timeout, fetcher.fetch_page(url)).await {
        Ok(Ok(page)) => Ok(page),
        Ok(Err(e)) => Err(AnalysisError::enrichment(fetcher.name(), format!("{e:#}"))),
        Err(_) => Err(AnalysisError::enrichment(
            fetcher.name(),
            format!("timed out after {}s", timeout.as_secs_f64()),
        )),
    };

    match outcome {
        Ok(page) => {
            let partial = score_page_content(&page);
            info!(
                service = fetcher.name(),
                points = partial.points,
                "Scored page content"
            );
            partial
        }
        Err(e) => {
            warn!(error = %e, "Page content unavailable, continuing without it");
            unverified()
        }
    }
}
