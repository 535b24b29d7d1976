// Google Gemini implementation of the Summarizer trait.
//
// Uses the public generateContent REST endpoint with an API key. Prior chat
// turns are replayed as history (Gemini calls the assistant role "model"),
// and the question with its context always goes last since the model replies
// to the last user turn.
//
// API docs: https://ai.google.dev/api/generate-content

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{final_user_message, preview, SYSTEM_INSTRUCTION};
use super::traits::{ChatMsg, Role, SummarizeRequest, Summarizer};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const TEMPERATURE: f32 = 0.3;
const MAX_OUTPUT_TOKENS: u32 = 1200;

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<String> {
        if request.prompt.trim().is_empty() {
            anyhow::bail!("Missing prompt");
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = build_request(request);

        debug!(
            model = %self.model,
            items = request.items.len(),
            history = request.history.len(),
            prompt = %preview(&request.prompt),
            "Calling Gemini"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("Failed to call Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        Ok(response_text(&result))
    }
}

fn build_request(request: &SummarizeRequest) -> GenerateRequest {
    let mut contents: Vec<Content> = request
        .history
        .iter()
        .filter(|m| !m.content.is_empty())
        .map(history_turn)
        .collect();

    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part {
            text: final_user_message(request),
        }],
    });

    GenerateRequest {
        system_instruction: SystemInstruction {
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        contents,
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}

fn history_turn(msg: &ChatMsg) -> Content {
    let role = match msg.role {
        Role::Assistant => "model",
        Role::User => "user",
    };
    Content {
        role: role.to_string(),
        parts: vec![Part {
            text: msg.content.clone(),
        }],
    }
}

/// Joined text parts of the first candidate, or "" when there are none.
fn response_text(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

// --- Gemini API request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
