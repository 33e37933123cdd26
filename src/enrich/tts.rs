//! Speech synthesis for plan narration.

use base64::Engine as _;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, YatraError};
use crate::generation::http::{shared_client, status_to_error};

const DEFAULT_LANGUAGE: &str = "en-IN";

/// Client for a `text:synthesize` speech endpoint.
pub struct SpeechSynthesizer {
    base_url: String,
    api_key: String,
    language_code: String,
}

impl SpeechSynthesizer {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            language_code: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    /// Build a synthesizer from config, failing fast when no credential
    /// is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .tts_api_key
            .clone()
            .ok_or_else(|| YatraError::Unauthenticated("TTS_API_KEY is not set".into()))?;
        Ok(Self::new(config.tts_base_url.clone(), api_key))
    }

    /// Synthesize MP3 audio for the given text.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/text:synthesize?key={}",
            self.base_url.trim_end_matches('/'),
            self.api_key
        );
        let body = serde_json::json!({
            "input": {"text": text},
            "voice": {"languageCode": self.language_code},
            "audioConfig": {"audioEncoding": "MP3"},
        });

        let resp = shared_client().post(&url).json(&body).send().await?;
        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: SynthesizeResponse = resp.json().await?;
        let encoded = data.audio_content.ok_or(YatraError::EmptyResponse)?;

        base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| YatraError::Api {
                status,
                message: format!("audio content is not valid base64: {e}"),
            })
    }

    /// Best-effort narration: audio if available, `None` otherwise.
    pub async fn narrate(&self, text: &str) -> Option<Vec<u8>> {
        match self.synthesize(text).await {
            Ok(audio) => Some(audio),
            Err(err) => {
                debug!(error = %err, "narration failed");
                None
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}
