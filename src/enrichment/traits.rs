// Swap-ready seams for external lookups.

use anyhow::Result;
use async_trait::async_trait;

/// Scraped page content for a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub description: String,
    /// Main body text (markdown when the provider offers it).
    pub content: String,
}

/// Public engagement counters for one video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStats {
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Fetches scraped page content for a URL.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Short service name for logs.
    fn name(&self) -> &'static str;

    async fn fetch_page(&self, url: &str) -> Result<PageContent>;
}

/// Fetches view/like/comment counts for a platform video id.
///
/// `Ok(None)` means the service answered but knows no such video.
#[async_trait]
pub trait VideoStatsFetcher: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_stats(&self, video_id: &str) -> Result<Option<VideoStats>>;
}
