//! Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use quill_config::GenAiConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::GenAiError;
use crate::generator::{GenerationRequest, TextGenerator};
use crate::api_error::check_status;

/// Client for the Generative Language REST API.
///
/// Construct once per process and share it; the inner `reqwest::Client`
/// pools connections.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &GenAiConfig) -> Result<Self, GenAiError> {
        let http = reqwest::Client::builder()
            .user_agent("quill/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        })
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

// Gemini API request/response structures

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    response_mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GeminiResponse) -> Result<String, GenAiError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenAiError::EmptyResponse(format!("prompt blocked: {reason}")));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenAiError::EmptyResponse("no candidates in response".into()))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".to_string());
        return Err(GenAiError::EmptyResponse(format!(
            "candidate has no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model, prompt_chars = request.prompt.len()))]
    async fn generate_text(&self, request: GenerationRequest) -> Result<String, GenAiError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                temperature: self.temperature,
            },
        };

        let resp = self
            .http
            .post(self.build_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_status(resp).await?;

        let text = resp.text().await?;
        let parsed: GeminiResponse =
            serde_json::from_str(&text).map_err(|e| GenAiError::Parse(e.to_string()))?;
        let output = extract_text(parsed)?;
        debug!(response_chars = output.len(), "generation complete");
        Ok(output)
    }
}
