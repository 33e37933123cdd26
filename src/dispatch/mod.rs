//! Credential failover for lookup services.
//!
//! A lookup service may be configured with several interchangeable
//! credentials. [`dispatch`] tries them strictly in order and
//! short-circuits on the first success; a failure of credential `i` is
//! never visible to the caller unless credentials `i+1..N` also fail.
//! This is a failover list, not a pool: no randomization, no caching of
//! the last working credential across calls.

pub mod hotels;

use std::future::Future;

use tracing::debug;

use crate::error::{Result, YatraError};

/// An ordered set of opaque credentials for one downstream service.
///
/// Order defines trial priority. Duplicates are harmless; blank entries
/// are skipped at iteration time since they cannot authenticate.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    keys: Vec<String>,
}

impl CredentialSet {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    /// Parse a comma-separated credential list, trimming whitespace.
    pub fn from_delimited(raw: &str) -> Self {
        Self {
            keys: raw
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Usable (non-blank) credentials, in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|k| !k.trim().is_empty())
    }

    /// Number of usable credentials.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<String> for CredentialSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Try each credential in order until one attempt succeeds.
///
/// Per-credential failures are logged and retained as diagnostics inside
/// the aggregate error; they are otherwise invisible to the caller. An
/// empty (or all-blank) set exhausts immediately with zero attempts.
pub async fn dispatch<T, F, Fut>(credentials: &CredentialSet, mut attempt: F) -> Result<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut failures = Vec::new();
    let mut attempted = 0usize;

    for key in credentials.iter() {
        attempted += 1;
        match attempt(key.to_string()).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(attempt = attempted, error = %err, "lookup credential failed, trying next");
                failures.push(format!("attempt {attempted}: {err}"));
            }
        }
    }

    Err(YatraError::AllCredentialsExhausted {
        attempted,
        detail: failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_parsing_trims_and_drops_blanks() {
        let set = CredentialSet::from_delimited(" alpha , ,beta,, gamma ");
        let keys: Vec<&str> = set.iter().collect();
        assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn blank_entries_do_not_count() {
        let set = CredentialSet::new(vec!["".into(), "  ".into()]);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let set = CredentialSet::from_delimited("k1,k1,k2");
        let keys: Vec<&str> = set.iter().collect();
        assert_eq!(keys, vec!["k1", "k1", "k2"]);
    }
}
