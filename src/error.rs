//! Error types for yatra.

use strum::Display;
use thiserror::Error;

/// Primary error type for all yatra operations.
#[derive(Error, Debug)]
pub enum YatraError {
    /// A required credential is not configured. Raised before any network
    /// call is attempted.
    #[error("No credential configured: {0}")]
    Unauthenticated(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered but produced no usable candidate content
    /// (safety filtering, empty generation).
    #[error("Generation endpoint returned no usable content")]
    EmptyResponse,

    /// Content came back but did not parse under the requested format.
    /// The raw text is preserved verbatim so a prompt/schema mismatch can
    /// be diagnosed.
    #[error("Response is not valid structured data: {source}")]
    MalformedPayload {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// Every credential in a failover set was tried and failed (or none
    /// were configured). `detail` holds per-credential diagnostics.
    #[error("All lookup credentials exhausted after {attempted} attempt(s)")]
    AllCredentialsExhausted {
        attempted: usize,
        detail: Vec<String>,
    },

    #[error("External service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse classification used when converting errors into user notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorCategory {
    Authentication,
    Transport,
    EmptyResponse,
    MalformedPayload,
    CredentialsExhausted,
    Service,
    Configuration,
    InvalidInput,
}

impl YatraError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthenticated(_) => ErrorCategory::Authentication,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                _ => ErrorCategory::Transport,
            },
            Self::Network(_) => ErrorCategory::Transport,
            Self::EmptyResponse => ErrorCategory::EmptyResponse,
            Self::MalformedPayload { .. } => ErrorCategory::MalformedPayload,
            Self::AllCredentialsExhausted { .. } => ErrorCategory::CredentialsExhausted,
            Self::ServiceUnavailable(_) => ErrorCategory::Service,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) => ErrorCategory::InvalidInput,
        }
    }

    /// Short, non-fatal notice suitable for direct display. Raw
    /// diagnostics (response bodies, per-credential errors) stay inside
    /// the variant and are not included here.
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Authentication => {
                "A required API credential is missing or was rejected.".to_string()
            }
            ErrorCategory::Transport => {
                "Could not reach the service. Check your network connection and try again."
                    .to_string()
            }
            ErrorCategory::EmptyResponse => {
                "The generator returned no content. Please try again.".to_string()
            }
            ErrorCategory::MalformedPayload => {
                "The generated response was not in the expected format.".to_string()
            }
            ErrorCategory::CredentialsExhausted => {
                "Lookup is temporarily unavailable (all credentials failed).".to_string()
            }
            ErrorCategory::Service => "A backing service is unavailable.".to_string(),
            ErrorCategory::Configuration | ErrorCategory::InvalidInput => self.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, YatraError>;
