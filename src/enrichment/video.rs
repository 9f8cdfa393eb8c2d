// Engagement ratios as a fake-content signal.
//
// Bought engagement tends to show up as counters that don't fit together:
// likes on a video nobody watched, or a huge view count nobody reacted to.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::scoring::rules::{apply_all, SUSPICIOUS_TEXT};
use crate::scoring::PartialResult;

use super::traits::{VideoStats, VideoStatsFetcher};

const IMPOSSIBLE_ENGAGEMENT_DELTA: i32 = -40;
const LIKES_WITHOUT_VIEWS_LIKES: u64 = 1000;
const LIKES_WITHOUT_VIEWS_VIEWS: u64 = 100;
const LIKES_WITHOUT_VIEWS_DELTA: i32 = -25;
const VIEWS_WITHOUT_LIKES_VIEWS: u64 = 10_000;
const VIEWS_WITHOUT_LIKES_LIKES: u64 = 10;
const VIEWS_WITHOUT_LIKES_DELTA: i32 = -20;

/// Healthy like/view ratio band, inclusive.
const HEALTHY_LIKE_RATIO: (f64, f64) = (0.005, 0.20);
const HEALTHY_LIKE_DELTA: i32 = 15;
/// Healthy comment/view ratio band, inclusive.
const HEALTHY_COMMENT_RATIO: (f64, f64) = (0.0001, 0.05);
const HEALTHY_COMMENT_DELTA: i32 = 10;

pub fn score_video_stats(stats: &VideoStats) -> PartialResult {
    let mut partial = PartialResult::new();

    if stats.likes > 0 && stats.views == 0 {
        partial.record(
            IMPOSSIBLE_ENGAGEMENT_DELTA,
            "Impossible engagement: likes without views",
        );
    } else if stats.likes >= LIKES_WITHOUT_VIEWS_LIKES && stats.views < LIKES_WITHOUT_VIEWS_VIEWS {
        partial.record(
            LIKES_WITHOUT_VIEWS_DELTA,
            "Suspicious: high likes with almost no views",
        );
    }

    if stats.views >= VIEWS_WITHOUT_LIKES_VIEWS && stats.likes < VIEWS_WITHOUT_LIKES_LIKES {
        partial.record(
            VIEWS_WITHOUT_LIKES_DELTA,
            "Suspicious: high views with almost no likes",
        );
    }

    if stats.views > 0 {
        let views = stats.views as f64;
        let like_ratio = stats.likes as f64 / views;
        if (HEALTHY_LIKE_RATIO.0..=HEALTHY_LIKE_RATIO.1).contains(&like_ratio) {
            partial.record(HEALTHY_LIKE_DELTA, "Healthy like-to-view ratio");
        }
        let comment_ratio = stats.comments as f64 / views;
        if (HEALTHY_COMMENT_RATIO.0..=HEALTHY_COMMENT_RATIO.1).contains(&comment_ratio) {
            partial.record(HEALTHY_COMMENT_DELTA, "Healthy comment activity");
        }
    }

    apply_all(&SUSPICIOUS_TEXT, &stats.title.to_lowercase(), &mut partial);

    partial.summarize(
        "Video Statistics",
        format!(
            "{} views, {} likes, {} comments",
            stats.views, stats.likes, stats.comments
        ),
    );
    partial
}

/// Fetch and score statistics for `video_id`.
///
/// Returns `None` on any failure, timeout, or unknown video, so the
/// category is simply left out of the aggregate.
pub async fn assess_video(
    fetcher: &dyn VideoStatsFetcher,
    video_id: &str,
    timeout: Duration,
) -> Option<PartialResult> {
    let outcome = match tokio::time::timeout(timeout, fetcher.fetch_stats(video_id)).await {
        Ok(Ok(Some(stats))) => Ok(stats),
        Ok(Ok(None)) => Err(AnalysisError::enrichment(
            fetcher.name(),
            format!("no video found for id {video_id}"),
        )),
        Ok(Err(e)) => Err(AnalysisError::enrichment(fetcher.name(), format!("{e:#}"))),
        Err(_) => Err(AnalysisError::enrichment(
            fetcher.name(),
            format!("timed out after {}s", timeout.as_secs_f64()),
        )),
    };

    match outcome {
        Ok(stats) => {
            let partial = score_video_stats(&stats);
            info!(
                service = fetcher.name(),
                video_id,
                views = stats.views,
                likes = stats.likes,
                points = partial.points,
                "Scored video statistics"
            );
            Some(partial)
        }
        Err(e) => {
            debug!(error = %e, "Video statistics omitted");
            None
        }
    }
}
