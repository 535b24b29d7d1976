use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::chat::gemini::{DEFAULT_API_URL, DEFAULT_MODEL};
use crate::keywords::tfidf::{TfIdfRanker, DEFAULT_MAX_TERMS};
use crate::keywords::tokenize::Tokenizer;
use crate::scrape::pool::DEFAULT_CONCURRENCY;

/// Which stopword list the tokenizer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordChoice {
    /// Curated general + domain list (default)
    Curated,
    /// Curated list plus the ISO English list from `stop-words`
    Extended,
}

impl StopwordChoice {
    pub fn tokenizer(self) -> Tokenizer {
        match self {
            StopwordChoice::Curated => Tokenizer::curated(),
            StopwordChoice::Extended => Tokenizer::extended(),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment only (never hardcoded). A .env
/// file is loaded automatically at startup via dotenvy.
pub struct Config {
    pub google_api_key: String,
    /// Gemini API base URL (defaults to the public Google endpoint)
    pub gemini_api_url: String,
    pub model: String,
    pub session_path: PathBuf,
    pub max_terms: usize,
    pub scrape_concurrency: usize,
    pub stopwords: StopwordChoice,
}

impl Config {
    /// Load configuration from environment variables. Everything except the
    /// API key has a default.
    pub fn load() -> Result<Self> {
        let stopwords = match env::var("KEYWEAVE_STOPWORDS").as_deref() {
            Ok("extended") => StopwordChoice::Extended,
            // "curated" or unset both use the curated list
            _ => StopwordChoice::Curated,
        };

        Ok(Self {
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("KEYWEAVE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            session_path: env::var("KEYWEAVE_SESSION_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./keyweave-session.json")),
            max_terms: parse_usize("KEYWEAVE_MAX_TERMS", DEFAULT_MAX_TERMS)?,
            scrape_concurrency: parse_usize("KEYWEAVE_SCRAPE_CONCURRENCY", DEFAULT_CONCURRENCY)?,
            stopwords,
        })
    }

    /// Ranker for the configured stopwords, capped at `max_terms`.
    pub fn ranker(&self, max_terms: Option<usize>) -> TfIdfRanker {
        TfIdfRanker {
            max_terms: max_terms.unwrap_or(self.max_terms),
            tokenizer: self.stopwords.tokenizer(),
        }
    }

    /// Check that the Gemini API key is configured.
    /// Call this before any chat or summary command.
    pub fn require_gemini(&self) -> Result<()> {
        if self.google_api_key.is_empty() {
            anyhow::bail!(
                "GOOGLE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}

fn parse_usize(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{var} must be a non-negative integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopword_choice_tokenizers() {
        let text = "the microgravity";
        assert_eq!(StopwordChoice::Curated.tokenizer().tokenize(text), vec!["microgravity"]);
        assert!(StopwordChoice::Extended
            .tokenizer()
            .stopwords()
            .contains("the"));
    }

    #[test]
    fn test_parse_usize_default_when_unset() {
        assert_eq!(parse_usize("KEYWEAVE_TEST_UNSET_VAR", 7).unwrap(), 7);
    }

    #[test]
    fn test_require_gemini() {
        let config = Config {
            google_api_key: String::new(),
            gemini_api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            session_path: PathBuf::from("s.json"),
            max_terms: 200,
            scrape_concurrency: 5,
            stopwords: StopwordChoice::Curated,
        };
        assert!(config.require_gemini().is_err());
        assert_eq!(config.ranker(Some(50)).max_terms, 50);
        assert_eq!(config.ranker(None).max_terms, 200);
    }
}
