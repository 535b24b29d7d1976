// Corpus data types: rows from the input CSV and the articles built from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One CSV row, keyed by column header, in header order.
pub type Row = IndexMap<String, String>;

/// A scraped (or fallback) article, the document unit for TF/DF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique within a session (`a0`, `a1`, ... when assembled from rows)
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Title plus scraped body, or just the title when scraping failed
    pub text: String,
    /// The source row, kept for display
    #[serde(default)]
    pub row: Row,
}

impl Article {
    /// Build an article with no source row. Handy for tests and ad-hoc corpora.
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
            text: text.into(),
            row: Row::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Display label: the title, or the id when the title is blank.
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// A row selected for scraping, with its title and URL already pulled out.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeTarget {
    /// Position of the row in the original CSV (zero-based)
    pub index: usize,
    pub title: String,
    pub url: String,
    pub row: Row,
}
