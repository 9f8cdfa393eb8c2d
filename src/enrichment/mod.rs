// External enrichment — optional signals from outside the URL text.
//
// The fetchers sit behind traits so the analyzer never depends on a
// particular scraping service or video API. Firecrawl and the YouTube Data
// API are the shipped implementations; tests plug in fakes.
//
// Both adapters swallow their own failures: page-content problems turn into
// a small penalty, video-statistics problems make the category disappear.

pub mod content;
pub mod firecrawl;
pub mod traits;
pub mod video;
pub mod youtube;

pub use content::{assess_content, score_page_content};
pub use traits::{ContentFetcher, PageContent, VideoStats, VideoStatsFetcher};
pub use video::{assess_video, score_video_stats};
