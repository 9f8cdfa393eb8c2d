// truthcheck: heuristic real-vs-fake verdicts for social media links.
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline; `analyzer` ties them together behind `analyze()`.

pub mod analyzer;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod link;
pub mod output;
pub mod platform;
pub mod scoring;

pub use analyzer::{analyze_url, AnalysisResult, Analyzer};
pub use error::AnalysisError;
