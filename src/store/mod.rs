//! Document-store collaborator: surveys, responses, and users.
//!
//! Treated purely as a key-value/append-only store; the only guarantee
//! relied upon is "insert succeeds or errors". The underlying client is
//! built once per process and reused (no explicit teardown — process
//! lifetime bounds its lifetime).

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::warn;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Result, YatraError};

const DATABASE_NAME: &str = "yatra";

static SHARED_STORE: OnceCell<DocumentStore> = OnceCell::const_new();

/// A survey/question document, keyed by a generated identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyDocument {
    pub survey_id: String,
    pub question: String,
    pub options: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// An answer referencing a survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponseDocument {
    pub survey_id: String,
    pub answer: String,
    pub submitted_at: DateTime<Utc>,
}

/// A user credential record. Passwords are stored bcrypt-hashed only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Handle to the document store.
#[derive(Clone)]
pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    /// Connect to the store at the given URI.
    pub async fn connect(uri: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await.map_err(store_error)?;
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(10));
        options.max_pool_size = Some(10);

        let client = Client::with_options(options).map_err(store_error)?;
        Ok(Self {
            db: client.database(DATABASE_NAME),
        })
    }

    /// Process-wide shared handle, connected lazily on first use.
    pub async fn shared(config: &Config) -> Result<&'static DocumentStore> {
        let uri = config
            .mongodb_uri
            .as_deref()
            .ok_or_else(|| YatraError::Unauthenticated("MONGODB_URI is not set".into()))?;
        SHARED_STORE.get_or_try_init(|| Self::connect(uri)).await
    }

    fn surveys(&self) -> Collection<SurveyDocument> {
        self.db.collection("surveys")
    }

    fn responses(&self) -> Collection<SurveyResponseDocument> {
        self.db.collection("survey_responses")
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection("users")
    }

    /// Create a survey and return its generated identifier.
    pub async fn create_survey(&self, question: &str, options: Vec<String>) -> Result<String> {
        let survey_id = Uuid::new_v4().to_string();
        let document = SurveyDocument {
            survey_id: survey_id.clone(),
            question: question.to_string(),
            options,
            created_at: Utc::now(),
        };
        self.surveys()
            .insert_one(document)
            .await
            .map_err(store_error)?;
        Ok(survey_id)
    }

    /// Append an answer to a survey.
    pub async fn submit_response(&self, survey_id: &str, answer: &str) -> Result<()> {
        let document = SurveyResponseDocument {
            survey_id: survey_id.to_string(),
            answer: answer.to_string(),
            submitted_at: Utc::now(),
        };
        self.responses()
            .insert_one(document)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    /// All answers submitted for a survey.
    pub async fn responses_for(&self, survey_id: &str) -> Result<Vec<SurveyResponseDocument>> {
        let cursor = self
            .responses()
            .find(doc! { "survey_id": survey_id })
            .await
            .map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    /// Register a user with a bcrypt-hashed password.
    pub async fn register_user(&self, username: &str, password: &str) -> Result<()> {
        let existing = self
            .users()
            .find_one(doc! { "username": username })
            .await
            .map_err(store_error)?;
        if existing.is_some() {
            return Err(YatraError::InvalidArgument(format!(
                "username '{username}' is already taken"
            )));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| YatraError::ServiceUnavailable(format!("password hashing failed: {e}")))?;

        let document = UserDocument {
            username: username.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        self.users()
            .insert_one(document)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    /// Verify a username/password pair. Unknown users verify as false.
    pub async fn verify_user(&self, username: &str, password: &str) -> Result<bool> {
        let user = match self
            .users()
            .find_one(doc! { "username": username })
            .await
            .map_err(store_error)?
        {
            Some(user) => user,
            None => return Ok(false),
        };

        match bcrypt::verify(password, &user.password_hash) {
            Ok(ok) => Ok(ok),
            Err(e) => {
                warn!(username, error = %e, "stored password hash could not be verified");
                Ok(false)
            }
        }
    }
}

fn store_error(e: mongodb::error::Error) -> YatraError {
    YatraError::ServiceUnavailable(e.to_string())
}

/// Build a shareable survey link from the configured application base
/// URL. `None` when no base URL is configured.
pub fn share_link(config: &Config, survey_id: &str) -> Option<String> {
    config
        .app_base_url
        .as_deref()
        .map(|base| format!("{}/survey/{survey_id}", base.trim_end_matches('/')))
}
