// YouTube Data API v3 implementation of VideoStatsFetcher.
//
// A single `videos.list` call with `part=snippet,statistics` gives the
// title and the public counters. Counters arrive as numeric strings and may
// be missing entirely when the uploader hides them.
//
// API docs: https://developers.google.com/youtube/v3/docs/videos/list

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::traits::{VideoStats, VideoStatsFetcher};

/// Default Google APIs endpoint.
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com";

pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("truthcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl VideoStatsFetcher for YouTubeClient {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn fetch_stats(&self, video_id: &str) -> Result<Option<VideoStats>> {
        let url = format!("{}/youtube/v3/videos", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet,statistics"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to call YouTube Data API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube Data API returned {}: {}", status, body);
        }

        let result: VideoListResponse = response
            .json()
            .await
            .context("Failed to parse YouTube Data API response")?;

        let stats = result.into_stats()?;
        debug!(video_id, found = stats.is_some(), "Fetched video statistics");
        Ok(stats)
    }
}

// --- YouTube Data API response types ---

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

impl VideoListResponse {
    /// Convert the first item into stats. An empty `items` list means the
    /// video does not exist (or is private) and yields `None`.
    pub fn into_stats(self) -> Result<Option<VideoStats>> {
        let Some(item) = self.items.into_iter().next() else {
            return Ok(None);
        };

        let statistics = item.statistics.unwrap_or_default();
        Ok(Some(VideoStats {
            title: item.snippet.map(|s| s.title).unwrap_or_default(),
            views: parse_count(statistics.view_count.as_deref(), "viewCount")?,
            likes: parse_count(statistics.like_count.as_deref(), "likeCount")?,
            comments: parse_count(statistics.comment_count.as_deref(), "commentCount")?,
        }))
    }
}

/// Parse a counter string; a missing counter reads as zero.
fn parse_count(value: Option<&str>, field: &str) -> Result<u64> {
    match value {
        None => Ok(0),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {field} in YouTube response: {s:?}")),
    }
}
