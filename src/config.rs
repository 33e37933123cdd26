//! Process configuration, materialized once from the environment.
//!
//! Business logic never reads environment variables directly; it receives
//! an immutable [`Config`] built at startup. Every credential is optional
//! — a missing one degrades the corresponding feature instead of failing
//! the process.

use crate::dispatch::CredentialSet;

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Gemini model used for plan generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
/// Default hotel search API base URL.
pub const DEFAULT_HOTEL_BASE_URL: &str = "https://hotels-search.p.rapidapi.com";
/// Default speech synthesis API base URL.
pub const DEFAULT_TTS_BASE_URL: &str = "https://texttospeech.googleapis.com/v1";
/// Default encyclopedia REST base URL for place image lookups.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Immutable configuration shared (by reference) across all components.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Failover list for the hotel search service, tried in order.
    pub hotel_api_keys: CredentialSet,
    pub hotel_base_url: String,
    pub tts_api_key: Option<String>,
    pub tts_base_url: String,
    pub image_base_url: String,
    pub mongodb_uri: Option<String>,
    /// Base URL used to build shareable survey links.
    pub app_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            hotel_api_keys: CredentialSet::default(),
            hotel_base_url: DEFAULT_HOTEL_BASE_URL.to_string(),
            tts_api_key: None,
            tts_base_url: DEFAULT_TTS_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            mongodb_uri: None,
            app_base_url: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if
    /// present).
    ///
    /// Hotel credentials come from `HOTEL_API_KEYS` (comma-separated,
    /// order defines trial priority) with `HOTEL_API_KEY_1..=5` accepted
    /// as a fallback naming scheme.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let mut config = Self {
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            hotel_api_keys: hotel_keys_from_env(),
            tts_api_key: non_empty_var("TTS_API_KEY"),
            mongodb_uri: non_empty_var("MONGODB_URI"),
            app_base_url: non_empty_var("APP_BASE_URL"),
            ..Self::default()
        };

        if let Some(model) = non_empty_var("GEMINI_MODEL") {
            config.gemini_model = model;
        }
        if let Some(url) = non_empty_var("GEMINI_BASE_URL") {
            config.gemini_base_url = url;
        }
        if let Some(url) = non_empty_var("HOTEL_API_BASE_URL") {
            config.hotel_base_url = url;
        }
        if let Some(url) = non_empty_var("TTS_BASE_URL") {
            config.tts_base_url = url;
        }
        if let Some(url) = non_empty_var("IMAGE_API_BASE_URL") {
            config.image_base_url = url;
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn hotel_keys_from_env() -> CredentialSet {
    if let Some(raw) = non_empty_var("HOTEL_API_KEYS") {
        return CredentialSet::from_delimited(&raw);
    }
    let keys: Vec<String> = (1..=5)
        .filter_map(|i| non_empty_var(&format!("HOTEL_API_KEY_{i}")))
        .collect();
    CredentialSet::new(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = Config::default();
        assert!(config.gemini_api_key.is_none());
        assert!(config.hotel_api_keys.is_empty());
        assert!(config.tts_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn default_base_urls_are_set() {
        let config = Config::default();
        assert!(config.gemini_base_url.starts_with("https://"));
        assert!(config.image_base_url.starts_with("https://"));
    }
}
