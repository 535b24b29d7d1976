// Scraper trait: fetch a URL and return its title and main text.
//
// The HTTP implementation lives in `http.rs`. Tests and offline runs can plug
// in anything else that implements the trait.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Title and main text pulled out of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedPage {
    pub title: String,
    pub text: String,
}

/// Trait for fetching article text. Async because real implementations do
/// network I/O.
#[async_trait]
pub trait Scraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<ScrapedPage>;
}
