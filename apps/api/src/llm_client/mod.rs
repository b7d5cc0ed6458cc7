//! LLM Client: the single point of entry for all generation API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! Handlers depend on the `TextGenerator` trait; `GeminiClient` is the production backend.
//!
//! One inbound request maps to exactly one outbound call. No retries.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: &'static str,
}

impl SamplingConfig {
    /// Tag extraction: short, fairly focused output.
    pub const TAGS: SamplingConfig = SamplingConfig {
        temperature: 0.7,
        top_p: 0.95,
        top_k: 64,
        max_output_tokens: 2048,
        response_mime_type: "text/plain",
    };

    /// Match analysis: longer narrative, higher entropy.
    pub const MATCH: SamplingConfig = SamplingConfig {
        temperature: 1.0,
        top_p: 0.95,
        top_k: 64,
        max_output_tokens: 8192,
        response_mime_type: "text/plain",
    };
}

/// Opaque text-generation capability: a user-role prompt in, completion text out.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a SamplingConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client. Stateless between calls.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: sampling,
        };

        debug!(
            "Calling {} (temperature={}, max_output_tokens={})",
            self.model, sampling.temperature, sampling.max_output_tokens
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Generation succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }
        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            debug!("Finish reason: {reason}");
        }

        parsed.text().ok_or(LlmError::EmptyContent)
    }
}

/// Prefers the API's own `error.message`; falls back to the raw body.
fn api_error(status: u16, body: String) -> LlmError {
    let message = serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api { status, message }
}
