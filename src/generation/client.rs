//! Gemini-style generation endpoint client.
//!
//! The endpoint is a natural-language producer with no schema enforcement
//! beyond a MIME-type hint, so this client does defensive boundary
//! validation: every response structure is optional at the wire level and
//! absence of any layer is a defined failure path.

use async_trait::async_trait;
use bon::Builder;
use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, YatraError};
use crate::types::Payload;

use super::http::{shared_client, status_to_error};

/// How the generated content should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ResponseFormat {
    /// Request `application/json` output and parse the content as JSON.
    #[default]
    Json,
    /// Leave the content as plain text.
    PlainText,
}

/// A single structured-generation request. Immutable, one per call.
#[derive(Debug, Clone, Builder)]
pub struct GenerationRequest {
    /// Natural-language instruction. Should embed an explicit description
    /// of the required output shape (keys, types, cardinalities).
    #[builder(into)]
    pub instruction: String,
    #[builder(default)]
    pub format: ResponseFormat,
    pub max_output_tokens: Option<u32>,
}

/// A successful generation: the parsed payload plus the raw text it was
/// parsed from.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub payload: Payload,
    pub raw_text: String,
}

/// Seam for generation backends, so callers (and tests) are isolated
/// from the wire format.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}

/// Client for a Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: crate::config::DEFAULT_GEMINI_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from config, failing fast (no network call) when no
    /// credential is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or_else(|| YatraError::Unauthenticated("GEMINI_API_KEY is not set".into()))?;
        Ok(Self::new(config.gemini_model.clone(), api_key).with_base_url(config.gemini_base_url.clone()))
    }

    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.instruction}],
            }]
        });
        let obj = body.as_object_mut().unwrap();

        let mut gen_config = serde_json::Map::new();
        if request.format == ResponseFormat::Json {
            gen_config.insert("responseMimeType".into(), "application/json".into());
        }
        if let Some(max) = request.max_output_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if !gen_config.is_empty() {
            obj.insert(
                "generationConfig".into(),
                serde_json::Value::Object(gen_config),
            );
        }

        body
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        if request.instruction.trim().is_empty() {
            return Err(YatraError::InvalidArgument(
                "instruction text must not be empty".into(),
            ));
        }

        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, format = %request.format, "generate");

        // Exactly one call: transient failures are surfaced, never retried.
        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;

        let raw_text = extract_candidate_text(data).ok_or(YatraError::EmptyResponse)?;

        let payload = match request.format {
            ResponseFormat::Json => {
                let json_text = strip_code_fences(&raw_text);
                match serde_json::from_str(&json_text) {
                    Ok(value) => Payload::new(value),
                    Err(source) => {
                        return Err(YatraError::MalformedPayload {
                            raw: raw_text,
                            source,
                        })
                    }
                }
            }
            ResponseFormat::PlainText => Payload::from_text(raw_text.clone()),
        };

        Ok(GenerationResult { payload, raw_text })
    }
}

/// Pull `candidates[0].content.parts[*].text` out of the response,
/// returning `None` when any layer is absent or the text is blank.
fn extract_candidate_text(data: GeminiResponse) -> Option<String> {
    let candidate = data.candidates.into_iter().next()?;
    let parts = candidate.content?.parts;

    let mut text = String::new();
    for part in parts {
        if let Some(t) = part.text {
            text.push_str(&t);
        }
    }

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Strip markdown code fences the model sometimes wraps JSON in despite
/// instructions not to.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        let without_opening = if let Some(rest) = trimmed.strip_prefix("```json") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("```") {
            rest
        } else {
            trimmed
        };
        if let Some(stripped) = without_opening.strip_suffix("```") {
            return stripped.trim().to_string();
        }
        return without_opening.trim().to_string();
    }
    trimmed.to_string()
}

// Internal wire types. Every layer is optional so a partial response
// degrades to EmptyResponse instead of a deserialization error.

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
