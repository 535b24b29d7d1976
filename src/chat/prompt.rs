// Prompt building for the research assistant.
//
// The user's question goes last and stays central. Selected keywords and a
// compact list of article excerpts follow it, clipped so a large selection
// doesn't drown the question.

use super::traits::{ContextItem, SummarizeRequest};
use crate::corpus::models::Article;
use crate::output::truncate_chars;

/// At most this many articles go into the context block.
pub const MAX_CONTEXT_ITEMS: usize = 25;
const MAX_TITLE_CHARS: usize = 160;
const MAX_URL_CHARS: usize = 300;
const MAX_EXCERPT_CHARS: usize = 1400;

/// Article text clipping for chat questions and for summaries.
pub const CHAT_ITEM_CHARS: usize = 2000;
pub const SUMMARY_ITEM_CHARS: usize = 1200;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert research assistant. \
Answer the USER'S QUESTION directly and concisely first. \
Then give brief evidence-based details referencing the provided article context where relevant. \
If the answer is uncertain, say so and suggest what would clarify it. Use Markdown.";

const ANSWER_INSTRUCTIONS: &str = "Please answer the question above. \
Start with a direct answer in 1-3 sentences. \
Then add representative citations with links to the provided article context (if used).";

/// Turn articles into context items, keeping the first `max_chars` of each text.
pub fn context_items<'a, I>(articles: I, max_chars: usize) -> Vec<ContextItem>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .map(|a| ContextItem {
            title: a.title.clone(),
            url: a.url.clone(),
            text: a.text.chars().take(max_chars).collect(),
        })
        .collect()
}

/// The default summary prompt for a keyword selection.
pub fn summary_prompt(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "Summarize the most salient topics in the current dataset.".to_string()
    } else {
        format!(
            "Summarize current evidence across abstracts related to: {}.",
            keywords.join(", ")
        )
    }
}

/// Numbered excerpt list, one entry per item (first 25 only).
pub fn context_block(items: &[ContextItem]) -> String {
    let entries: Vec<String> = items
        .iter()
        .take(MAX_CONTEXT_ITEMS)
        .enumerate()
        .map(|(i, item)| {
            let title: String = item.title.chars().take(MAX_TITLE_CHARS).collect();
            let url: String = item
                .url
                .as_deref()
                .unwrap_or("")
                .chars()
                .take(MAX_URL_CHARS)
                .collect();
            let collapsed = item.text.split_whitespace().collect::<Vec<_>>().join(" ");
            let excerpt: String = collapsed.chars().take(MAX_EXCERPT_CHARS).collect();
            let link = if url.is_empty() {
                String::new()
            } else {
                format!(" ({url})")
            };
            format!("• {}. {title}{link}\n   Excerpt: {excerpt}", i + 1)
        })
        .collect();

    if entries.is_empty() {
        return String::new();
    }

    format!(
        "\n\nContext from {} selected articles:\n{}\n\nUse this context to answer the question.",
        entries.len(),
        entries.join("\n")
    )
}

/// The final user turn sent to the model.
pub fn final_user_message(request: &SummarizeRequest) -> String {
    let keywords = if request.keywords.is_empty() {
        String::new()
    } else {
        format!("\n\nSelected keywords: {}.", request.keywords.join(", "))
    };

    format!(
        "QUESTION: {}\n{keywords}{}\n\n{ANSWER_INSTRUCTIONS}",
        request.prompt.trim(),
        context_block(&request.items)
    )
}

/// Short preview used in logs.
pub fn preview(prompt: &str) -> String {
    truncate_chars(prompt, 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, url: Option<&str>, text: &str) -> ContextItem {
        ContextItem {
            title: title.to_string(),
            url: url.map(str::to_string),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_context_block_format() {
        let block = context_block(&[
            item("Bone loss", Some("https://x.org/1"), "Mice   lost\nbone."),
            item("Roots", None, "Plants grew."),
        ]);
        assert!(block.contains("Context from 2 selected articles:"));
        assert!(block.contains("• 1. Bone loss (https://x.org/1)\n   Excerpt: Mice lost bone."));
        assert!(block.contains("• 2. Roots\n   Excerpt: Plants grew."));
    }

    #[test]
    fn test_context_block_caps_items_and_lengths() {
        let long = "x".repeat(5000);
        let items: Vec<ContextItem> = (0..30).map(|_| item(&long, None, &long)).collect();
        let block = context_block(&items);
        assert!(block.contains("Context from 25 selected articles:"));
        assert!(!block.contains(&"x".repeat(MAX_EXCERPT_CHARS + 1)));
    }

    #[test]
    fn test_empty_context_block() {
        assert_eq!(context_block(&[]), "");
    }

    #[test]
    fn test_final_user_message() {
        let request = SummarizeRequest {
            items: vec![],
            keywords: vec!["bone".to_string(), "gravity".to_string()],
            prompt: "  What happens to bones?  ".to_string(),
            history: vec![],
        };
        let msg = final_user_message(&request);
        assert!(msg.starts_with("QUESTION: What happens to bones?\n"));
        assert!(msg.contains("Selected keywords: bone, gravity."));
        assert!(msg.ends_with(ANSWER_INSTRUCTIONS));
    }

    #[test]
    fn test_summary_prompt() {
        assert_eq!(
            summary_prompt(&["bone".to_string(), "muscle".to_string()]),
            "Summarize current evidence across abstracts related to: bone, muscle."
        );
        assert!(summary_prompt(&[]).contains("most salient topics"));
    }

    #[test]
    fn test_context_items_clip_text() {
        let articles = vec![Article::new("a0", "T", "abcdef")];
        let items = context_items(&articles, 3);
        assert_eq!(items[0].text, "abc");
    }
}
