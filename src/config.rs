use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::enrichment::firecrawl::DEFAULT_FIRECRAWL_API_URL;
use crate::enrichment::youtube::DEFAULT_YOUTUBE_API_URL;

/// Default bound on each external lookup.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy. Both API keys are
/// optional: without one, the matching enrichment is skipped.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firecrawl key for page-content enrichment (FIRECRAWL_API_KEY)
    pub firecrawl_api_key: Option<String>,
    pub firecrawl_api_url: String,
    /// YouTube Data API key for video statistics (YOUTUBE_API_KEY)
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: String,
    /// Per-lookup timeout (TRUTHCHECK_TIMEOUT_SECS)
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            firecrawl_api_key: None,
            firecrawl_api_url: DEFAULT_FIRECRAWL_API_URL.to_string(),
            youtube_api_key: None,
            youtube_api_url: DEFAULT_YOUTUBE_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = match lookup("TRUTHCHECK_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("TRUTHCHECK_TIMEOUT_SECS is not a number: {raw:?}"))?;
                if secs == 0 {
                    anyhow::bail!("TRUTHCHECK_TIMEOUT_SECS must be at least 1");
                }
                Duration::from_secs(secs)
            }
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            firecrawl_api_key: credential(lookup("FIRECRAWL_API_KEY")),
            firecrawl_api_url: lookup("FIRECRAWL_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FIRECRAWL_API_URL.to_string()),
            youtube_api_key: credential(lookup("YOUTUBE_API_KEY")),
            youtube_api_url: lookup("YOUTUBE_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string()),
            timeout,
        })
    }

    /// Check that the Firecrawl key is configured.
    pub fn require_firecrawl(&self) -> Result<&str> {
        self.firecrawl_api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "FIRECRAWL_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            )
        })
    }

    /// Check that the YouTube Data API key is configured.
    pub fn require_youtube(&self) -> Result<&str> {
        self.youtube_api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            )
        })
    }
}

/// Treat empty values and the sample-file placeholders as unset.
fn credential(value: Option<String>) -> Option<String> {
    let value = value?.trim().to_string();
    if value.is_empty() || is_placeholder(&value) {
        None
    } else {
        Some(value)
    }
}

/// Placeholders from `.env.example` start with `your_`.
pub fn is_placeholder(value: &str) -> bool {
    value.to_ascii_lowercase().starts_with("your_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = config(&[]).unwrap();
        assert!(cfg.firecrawl_api_key.is_none());
        assert!(cfg.youtube_api_key.is_none());
        assert_eq!(cfg.firecrawl_api_url, DEFAULT_FIRECRAWL_API_URL);
        assert_eq!(cfg.youtube_api_url, DEFAULT_YOUTUBE_API_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn placeholders_count_as_unset() {
        let cfg = config(&[
            ("FIRECRAWL_API_KEY", "your_firecrawl_api_key_here"),
            ("YOUTUBE_API_KEY", "  "),
        ])
        .unwrap();
        assert!(cfg.firecrawl_api_key.is_none());
        assert!(cfg.youtube_api_key.is_none());
        assert!(cfg.require_firecrawl().is_err());
        assert!(cfg.require_youtube().is_err());
    }

    #[test]
    fn real_keys_are_kept() {
        let cfg = config(&[
            ("FIRECRAWL_API_KEY", "fc-abc123"),
            ("YOUTUBE_API_KEY", "AIzaSyExample"),
            ("TRUTHCHECK_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(cfg.require_firecrawl().unwrap(), "fc-abc123");
        assert_eq!(cfg.require_youtube().unwrap(), "AIzaSyExample");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn only_your_prefix_marks_a_placeholder() {
        assert!(is_placeholder("your_youtube_api_key_here"));
        assert!(is_placeholder("YOUR_KEY"));
        assert!(!is_placeholder("fc-key_here"));

        let cfg = config(&[("FIRECRAWL_API_KEY", "fc-key_here")]).unwrap();
        assert_eq!(cfg.firecrawl_api_key.as_deref(), Some("fc-key_here"));
    }

    #[test]
    fn bad_timeout_is_an_error() {
        assert!(config(&[("TRUTHCHECK_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config(&[("TRUTHCHECK_TIMEOUT_SECS", "0")]).is_err());
    }
}
