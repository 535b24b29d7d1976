// Chat turns over the articles matching the current keyword selection.
//
// The question is recorded in the history before the call. The answer (or
// the error, rendered the way the chat view shows it) is recorded after, so
// the transcript always reflects what the user saw.

use anyhow::Result;
use tracing::info;

use super::prompt::{context_items, summary_prompt, CHAT_ITEM_CHARS, SUMMARY_ITEM_CHARS};
use super::traits::{ChatMsg, SummarizeRequest, Summarizer};
use crate::corpus::models::Article;

/// Ask a question, appending both turns to `history`.
///
/// `context` is the set of articles to quote from (empty to ask without
/// context). The history sent to the model is the history before this
/// question.
pub async fn ask(
    summarizer: &dyn Summarizer,
    history: &mut Vec<ChatMsg>,
    context: &[&Article],
    keywords: &[String],
    question: &str,
) -> Result<String> {
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("Empty question");
    }

    let request = SummarizeRequest {
        items: context_items(context.iter().copied(), CHAT_ITEM_CHARS),
        keywords: keywords.to_vec(),
        prompt: question.to_string(),
        history: history.clone(),
    };
    let used = request.items.len();

    history.push(ChatMsg::user(question));

    match summarizer.summarize(&request).await {
        Ok(answer) => {
            let answer = if answer.trim().is_empty() {
                "(No response)".to_string()
            } else {
                answer
            };
            info!(used_articles = used, chars = answer.len(), "Chat answer received");
            history.push(ChatMsg::assistant(answer.clone(), Some(used)));
            Ok(answer)
        }
        Err(e) => {
            history.push(ChatMsg::assistant(format!("**Error:** {e}"), None));
            Err(e)
        }
    }
}

/// One-shot summary of the given articles, outside the chat history.
pub async fn summarize(
    summarizer: &dyn Summarizer,
    articles: &[&Article],
    keywords: &[String],
) -> Result<String> {
    let request = SummarizeRequest {
        items: context_items(articles.iter().copied(), SUMMARY_ITEM_CHARS),
        keywords: keywords.to_vec(),
        prompt: summary_prompt(keywords),
        history: Vec::new(),
    };
    let summary = summarizer.summarize(&request).await?;
    if summary.trim().is_empty() {
        return Ok("(No summary returned)".to_string());
    }
    Ok(summary)
}
