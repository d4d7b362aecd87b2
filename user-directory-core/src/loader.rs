//! User collection loader
//!
//! One outbound `GET` per call, no retries. The caller decides when (and
//! how often) to call; the front end calls exactly once at startup.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::LoadError;
use crate::types::UserRecord;
use crate::utils::body_preview::body_preview;

/// Endpoint the directory is read from unless configured otherwise
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const LOG_TAG: &str = "users";

/// Source of the user collection
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the whole collection, in the order the source supplies it
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, LoadError>;
}

/// `UserSource` backed by a JSON HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: Client,
    endpoint: String,
}

impl HttpUserSource {
    /// Create a source reading from `endpoint` with a default client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Create a source reusing an existing client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute(&self) -> Result<String, LoadError> {
        log::debug!("[{LOG_TAG}] GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LoadError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("[{LOG_TAG}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| LoadError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[{LOG_TAG}] Response Body: {}", body_preview(&body));

        Ok(body)
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, LoadError> {
        let body = self.execute().await?;
        parse_users(&body)
    }
}

/// Parse a JSON array of users
///
/// The outcome itself is reported by the caller; only the raw body is
/// logged here since it is gone once the error is returned.
fn parse_users(body: &str) -> Result<Vec<UserRecord>, LoadError> {
    serde_json::from_str(body).map_err(|e| {
        log::debug!("[{LOG_TAG}] Unparseable body: {}", body_preview(body));
        LoadError::Parse {
            detail: e.to_string(),
        }
    })
}
