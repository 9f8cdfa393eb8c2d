// Analyzer — the single entry point the presentation layer calls.
//
// Given a raw URL string, this module:
// 1. Parses it (the only step that can fail)
// 2. Detects the platform and extracts channel info
// 3. Runs the four URL-text category scorers
// 4. Runs the enrichment adapters concurrently, if configured
// 5. Aggregates everything and derives verdict and confidence

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Config, DEFAULT_TIMEOUT_SECS};
use crate::enrichment::firecrawl::FirecrawlClient;
use crate::enrichment::youtube::YouTubeClient;
use crate::enrichment::{assess_content, assess_video, ContentFetcher, VideoStatsFetcher};
use crate::error::AnalysisError;
use crate::link::ParsedUrl;
use crate::platform::{detect_platform, extract_channel, extract_video_id, PlatformIdentity};
use crate::scoring::{
    aggregate, compute_confidence, determine_verdict, score_url_categories, DetailEntry, FlagSet,
    PartialResult, Tone, Verdict,
};

/// The complete outcome of one analysis. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Normalized form of the analyzed URL.
    pub url: String,
    pub verdict: Verdict,
    /// 0–100; at least 10 whenever red flags are present.
    pub confidence: u8,
    pub score: i32,
    pub red_flags: FlagSet,
    pub green_flags: FlagSet,
    pub details: Vec<DetailEntry>,
    pub platform: PlatformIdentity,
    pub channel_info: Option<String>,
}

/// Runs analyses, optionally enriched by external fetchers.
pub struct Analyzer {
    content: Option<Box<dyn ContentFetcher>>,
    video: Option<Box<dyn VideoStatsFetcher>>,
    timeout: Duration,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::offline()
    }
}

impl Analyzer {
    /// An analyzer that only looks at the URL text.
    pub fn offline() -> Self {
        Self {
            content: None,
            video: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build an analyzer with every enrichment the config has keys for.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut analyzer = Self::offline().with_timeout(config.timeout);

        if let Some(key) = &config.firecrawl_api_key {
            analyzer.content = Some(Box::new(FirecrawlClient::new(
                &config.firecrawl_api_url,
                key,
            )?));
        }
        if let Some(key) = &config.youtube_api_key {
            analyzer.video = Some(Box::new(YouTubeClient::new(&config.youtube_api_url, key)?));
        }

        info!(
            content = analyzer.content.is_some(),
            video = analyzer.video.is_some(),
            timeout_secs = config.timeout.as_secs(),
            "Analyzer configured"
        );
        Ok(analyzer)
    }

    pub fn with_content_fetcher(mut self, fetcher: impl ContentFetcher + 'static) -> Self {
        self.content = Some(Box::new(fetcher));
        self
    }

    pub fn with_video_fetcher(mut self, fetcher: impl VideoStatsFetcher + 'static) -> Self {
        self.video = Some(Box::new(fetcher));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_content_enrichment(&self) -> bool {
        self.content.is_some()
    }

    pub fn has_video_enrichment(&self) -> bool {
        self.video.is_some()
    }

    /// Analyze a raw URL string.
    ///
    /// Fails only with [`AnalysisError::InvalidUrl`]. Enrichment problems
    /// are absorbed: a failed page scrape becomes a small penalty, failed
    /// video statistics are left out.
    pub async fn analyze(&self, raw: &str) -> Result<AnalysisResult, AnalysisError> {
        let UrlScan {
            url,
            platform,
            channel,
            mut partials,
        } = score_url_text(raw)?;
        let video_id = extract_video_id(&url, &platform);

        let content = async {
            match &self.content {
                Some(fetcher) => Some(assess_content(fetcher.as_ref(), &url.full, self.timeout).await),
                None => {
                    debug!("Page content enrichment not configured");
                    None
                }
            }
        };

        let video = async {
            match (&self.video, &video_id) {
                (Some(fetcher), Some(id)) => assess_video(fetcher.as_ref(), id, self.timeout).await,
                (Some(_), None) => {
                    debug!(platform = %platform.name, "No video id to look up");
                    None
                }
                (None, _) => None,
            }
        };

        // Independent lookups; neither depends on the other.
        let (content, video) = tokio::join!(content, video);

        if let Some(partial) = content {
            partials.push(partial);
        }
        if let Some(partial) = video {
            partials.push(partial);
        }

        Ok(finish(url, platform, channel, partials))
    }
}

/// Analyze a raw URL string using only the URL text.
pub fn analyze_url(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let scan = score_url_text(raw)?;
    Ok(finish(scan.url, scan.platform, scan.channel, scan.partials))
}

/// Everything derived from the URL text alone.
struct UrlScan {
    url: ParsedUrl,
    platform: PlatformIdentity,
    channel: Option<String>,
    partials: Vec<PartialResult>,
}

/// Parse, detect, and run the four URL-text categories. The first partial
/// carries the platform and channel detail entries and no points.
fn score_url_text(raw: &str) -> Result<UrlScan, AnalysisError> {
    let url = ParsedUrl::parse(raw)?;
    let platform = detect_platform(&url.host);

    let mut header = PartialResult::new();
    header.details.push(DetailEntry::new(
        "Platform Detected",
        platform.name.as_str(),
        Tone::Neutral,
    ));
    let channel = extract_channel(&url, &platform);
    if let Some(channel) = &channel {
        header.details.push(DetailEntry::new(
            "Channel/Account",
            channel.as_str(),
            Tone::Neutral,
        ));
    }

    let mut partials = vec![header];
    partials.extend(score_url_categories(&url, &platform));
    Ok(UrlScan {
        url,
        platform,
        channel,
        partials,
    })
}

fn finish(
    url: ParsedUrl,
    platform: PlatformIdentity,
    channel_info: Option<String>,
    partials: Vec<PartialResult>,
) -> AnalysisResult {
    let total = aggregate(partials);
    let verdict = determine_verdict(total.points, total.has_red_flags());
    let confidence = compute_confidence(total.points, total.red_flags.len());

    info!(
        url = %url.full,
        platform = %platform.name,
        score = total.points,
        red_flags = total.red_flags.len(),
        verdict = verdict.title.as_str(),
        confidence,
        "Analysis complete"
    );

    AnalysisResult {
        url: url.full,
        verdict,
        confidence,
        score: total.points,
        red_flags: total.red_flags,
        green_flags: total.green_flags,
        details: total.details,
        platform,
        channel_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_details_come_first() {
        let result = analyze_url("https://twitter.com/jack/status/20").unwrap();
        assert_eq!(result.details[0].title, "Platform Detected");
        assert_eq!(result.details[0].value, "Twitter");
        assert_eq!(result.details[1].title, "Channel/Account");
        assert_eq!(result.details[1].value, "Twitter Account: @jack");
        assert_eq!(result.details[2].title, "Domain Analysis");
        assert_eq!(result.channel_info.as_deref(), Some("Twitter Account: @jack"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(matches!(
            analyze_url("not a url"),
            Err(AnalysisError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn offline_analyzer_matches_sync_path() {
        let raw = "https://www.instagram.com/natgeo/p/Cxyz123/";
        let sync = analyze_url(raw).unwrap();
        let async_result = Analyzer::offline().analyze(raw).await.unwrap();
        assert_eq!(sync, async_result);
    }
}
