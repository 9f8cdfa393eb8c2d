// Firecrawl scrape API implementation of ContentFetcher.
//
// One POST per analysis. The response carries the page's main content as
// markdown and/or HTML plus title and description metadata; older
// responses put title/description at the top of `data`, newer ones under
// `data.metadata`, so both are read.
//
// API docs: https://docs.firecrawl.dev/

use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex_lite::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{ContentFetcher, PageContent};

/// Default Firecrawl API endpoint.
pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";

const SCRAPE_PATH: &str = "/v0/scrape";

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("html tag regex"));

/// Firecrawl-backed page scraper.
pub struct FirecrawlClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FirecrawlClient {
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
impl ContentFetcher for FirecrawlClient {
    fn name(&self) -> &'static str {
        "firecrawl"
    }

    async fn fetch_page(&self, url: &str) -> Result<PageContent> {
        let endpoint = format!("{}{}", self.base_url, SCRAPE_PATH);

        let request = ScrapeRequest {
            url: url.to_string(),
            options: ScrapeOptions {
                main_content_only: true,
                include_html: true,
                include_markdown: true,
            },
        };

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call Firecrawl API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Firecrawl API returned {}: {}", status, body);
        }

        let result: ScrapeResponse = response
            .json()
            .await
            .context("Failed to parse Firecrawl API response")?;

        let page = result.into_page_content()?;
        debug!(
            title = %page.title,
            content_chars = page.content.chars().count(),
            "Scraped page"
        );
        Ok(page)
    }
}

// --- Firecrawl request/response types ---

#[derive(Serialize)]
struct ScrapeRequest {
    url: String,
    options: ScrapeOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeOptions {
    main_content_only: bool,
    include_html: bool,
    include_markdown: bool,
}

/// Body of a scrape response.
#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Option<ScrapeData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub html: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<ScrapeMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ScrapeResponse {
    /// Flatten the response into page content.
    ///
    /// Fails when the service reports `success: false` or there is no
    /// `data` object; a payload with data but no text is valid and yields
    /// empty content.
    pub fn into_page_content(self) -> Result<PageContent> {
        if self.success == Some(false) {
            anyhow::bail!(
                "Firecrawl scrape failed: {}",
                self.error.unwrap_or_else(|| "no error message".to_string())
            );
        }
        let data = self
            .data
            .ok_or_else(|| anyhow::anyhow!("Firecrawl response has no data"))?;

        let metadata = data.metadata.unwrap_or_default();
        let title = data.title.or(metadata.title).unwrap_or_default();
        let description = data.description.or(metadata.description).unwrap_or_default();

        let content = match (data.markdown, data.html) {
            (Some(md), _) if !md.trim().is_empty() => md,
            (_, Some(html)) => strip_tags(&html),
            _ => String::new(),
        };

        Ok(PageContent {
            title,
            description,
            content,
        })
    }
}

/// Drop HTML tags and collapse whitespace, leaving readable text.
pub fn strip_tags(html: &str) -> String {
    HTML_TAG
        .replace_all(html, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
