// HTTP scraper: reqwest fetch plus HTML extraction.
//
// Sends a desktop browser user agent (many publisher sites serve a stub page
// to unknown clients), follows redirects, and only accepts HTML responses.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use super::extract::extract_page;
use super::traits::{ScrapedPage, Scraper};
use crate::corpus::columns::is_http_url;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpScraper {
    client: reqwest::Client,
}

impl HttpScraper {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Scraper for HttpScraper {
    async fn scrape(&self, url: &str) -> Result<ScrapedPage> {
        if !is_http_url(url) {
            anyhow::bail!("Invalid URL: {url}");
        }

        debug!(url, "Fetching article");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Fetch {} for {url}", status.as_u16());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();
        if !is_html_content_type(&content_type) {
            anyhow::bail!("Not an HTML page: {url} ({content_type})");
        }

        let html = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?;

        let page = extract_page(&html);
        debug!(url, chars = page.text.len(), "Extracted article text");
        Ok(page)
    }
}

fn is_html_content_type(content_type: &str) -> bool {
    content_type.contains("text/html") || content_type.contains("application/xhtml+xml")
}
