// Summarizer trait: the LLM seam.
//
// Gemini is the default backend. Anything that can turn a request into text
// can stand in for it (tests use a canned implementation).

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat turn, as kept in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMsg {
    pub role: Role,
    pub content: String,
    /// How many articles were sent as context with the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_articles: Option<usize>,
}

impl ChatMsg {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            used_articles: None,
        }
    }

    pub fn assistant(content: impl Into<String>, used_articles: Option<usize>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            used_articles,
        }
    }
}

/// An article excerpt sent as context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarizeRequest {
    pub items: Vec<ContextItem>,
    pub keywords: Vec<String>,
    pub prompt: String,
    pub history: Vec<ChatMsg>,
}

/// Trait for answering a prompt over article context.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<String>;
}
