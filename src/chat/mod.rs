// LLM chat and summarization over the selected articles.
//
// The Summarizer trait defines the interface; GeminiClient implements it
// against Google's generateContent API.

pub mod conversation;
pub mod gemini;
pub mod prompt;
pub mod traits;
