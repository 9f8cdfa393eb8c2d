// Parsed URL — the immutable input every scorer reads from.

use serde::Serialize;
use url::Url;

use crate::error::AnalysisError;

/// A URL broken into the components the scorers look at.
///
/// `search` is the query string with its leading `?` (empty when there is
/// no query), which is the form the URL-structure and content rules match
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Lowercased host name (or IP literal); empty for `mailto:` and the like.
    pub host: String,
    pub path: String,
    pub search: String,
    pub query: Vec<(String, String)>,
    /// Normalized serialization of the whole URL.
    pub full: String,
}

impl ParsedUrl {
    /// Parse a raw string into its components.
    ///
    /// Surrounding whitespace is ignored. Only input `Url::parse` refuses
    /// (relative paths, bare words) is rejected. Absolute URLs without a
    /// host, such as `mailto:` or `data:`, parse with an empty host.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::invalid_url(raw, "empty input"));
        }

        let url = Url::parse(trimmed).map_err(|e| AnalysisError::invalid_url(raw, e.to_string()))?;

        let host = url.host_str().unwrap_or_default().to_lowercase();

        let search = match url.query() {
            Some(q) if !q.is_empty() => format!("?{q}"),
            _ => String::new(),
        };

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
            search,
            query,
            full: url.as_str().to_string(),
        })
    }

    /// Path and search joined, case preserved.
    pub fn path_and_search(&self) -> String {
        format!("{}{}", self.path, self.search)
    }

    /// First value of a query parameter, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Non-empty path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}
