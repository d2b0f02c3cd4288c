//! Fetches the live menu page for the extractor CLI.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Plain HTTP fetcher with browser-like headers.
pub struct MenuPageFetcher {
    client: reqwest::Client,
}

impl MenuPageFetcher {
    pub fn new() -> Result<Self> {
        // Some campus CMSes reject non-browser user agents
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch raw HTML from `url` (scheme defaults to https).
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = normalize_url(url);
        debug!(url = %url, "Fetching menu page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;
        info!(url = %url, bytes = html.len(), "Fetched menu page");
        Ok(html)
    }
}

/// Add https:// if no scheme is present
fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
