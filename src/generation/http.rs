//! Shared HTTP client and status mapping.

use std::sync::OnceLock;

use crate::error::YatraError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the process-wide reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-2xx HTTP status into an error.
pub fn status_to_error(status: u16, body: &str) -> YatraError {
    match status {
        401 | 403 => YatraError::Unauthenticated(body.to_string()),
        _ => YatraError::Api {
            status,
            message: body.to_string(),
        },
    }
}
