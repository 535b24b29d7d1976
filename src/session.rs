// Session file: everything one analysis needs between CLI runs.
//
// A plain serde_json dump of the rows, the assembled articles, the chosen
// columns, the keyword selection and the chat history. Each command loads
// it, does its work, and saves it back.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::traits::ChatMsg;
use crate::corpus::models::{Article, Row};
use crate::keywords::selection::SelectedKeywords;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub title_column: String,
    #[serde(default)]
    pub url_column: String,
    #[serde(default)]
    pub selected: SelectedKeywords,
    #[serde(default)]
    pub chat: Vec<ChatMsg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Load a session file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        let session: Session = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse session file {}", path.display()))?;
        debug!(
            path = %path.display(),
            articles = session.articles.len(),
            "Loaded session"
        );
        Ok(session)
    }

    /// Load a session file, or start empty if it doesn't exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the session, stamping `saved_at`.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.saved_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(self).context("Failed to serialize session")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write session file {}", path.display()))?;
        debug!(path = %path.display(), "Saved session");
        Ok(())
    }

    /// Replace the corpus. The selection and chat refer to the old corpus,
    /// so they are cleared too.
    pub fn replace_corpus(&mut self, rows: Vec<Row>, articles: Vec<Article>, title_column: String, url_column: String) {
        self.rows = rows;
        self.articles = articles;
        self.title_column = title_column;
        self.url_column = url_column;
        self.selected.reset();
        self.chat.clear();
    }

    /// Require at least one article before analysis commands.
    pub fn require_articles(&self) -> Result<()> {
        if self.articles.is_empty() {
            anyhow::bail!(
                "No articles in the session yet.\n\
                 Run `keyweave scrape <file.csv>` first."
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session {
            articles: vec![Article::new("a0", "Bone loss", "Mice lost bone")],
            selected: ["bone"].into_iter().collect(),
            chat: vec![ChatMsg::user("Why?")],
            ..Session::default()
        };
        session.save(&path).unwrap();
        assert!(session.saved_at.is_some());

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load_or_default(&dir.path().join("nope.json")).unwrap();
        assert!(session.articles.is_empty());
        assert!(session.require_articles().is_err());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Session::load(&path).is_err());
    }

    #[test]
    fn test_replace_corpus_clears_selection_and_chat() {
        let mut session = Session {
            selected: ["bone"].into_iter().collect(),
            chat: vec![ChatMsg::user("Why?")],
            ..Session::default()
        };
        session.replace_corpus(vec![], vec![Article::new("a0", "T", "x")], "t".into(), "u".into());
        assert!(session.selected.is_empty());
        assert!(session.chat.is_empty());
        assert_eq!(session.articles.len(), 1);
    }
}
