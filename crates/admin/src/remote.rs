//! Write-capable client for the remote bucket.
//!
//! Reads the person directory and overwrites it wholesale. The write is
//! authenticated with a static bearer credential embedded in the deployed
//! client; it is kept in a `SecretString` and out of logs, but it remains
//! a shared long-lived secret - an acknowledged weakness of this design.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;
use url::Url;

use panda_pantry_core::PersonRecord;

use crate::config::AdminConfig;

/// Document name of the remote person directory.
pub const PERSONS_DOCUMENT: &str = "personas.json";

/// Errors fetching or writing a remote document.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The request failed (connection, protocol, or body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the remote bucket's person-directory endpoints.
#[derive(Clone)]
pub struct AdminRemoteClient {
    inner: Arc<AdminRemoteClientInner>,
}

struct AdminRemoteClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl AdminRemoteClient {
    /// Create a new client against the configured bucket.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            inner: Arc::new(AdminRemoteClientInner {
                client: reqwest::Client::new(),
                base_url: config.bucket_url.clone(),
                token: config.bucket_token.clone(),
            }),
        }
    }

    /// Fetch the full person directory.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails, the server answers
    /// with a non-success status, or the body is not a valid person list.
    #[instrument(skip(self))]
    pub async fn fetch_persons(&self) -> Result<Vec<PersonRecord>, RemoteError> {
        let url = self.document_url();
        tracing::debug!(%url, "fetching remote person directory");

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Overwrite the whole remote person document with `persons`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails or the server answers
    /// with a non-success status.
    #[instrument(skip(self, persons), fields(count = persons.len()))]
    pub async fn overwrite_persons(&self, persons: &[PersonRecord]) -> Result<(), RemoteError> {
        let url = self.document_url();
        tracing::info!(%url, count = persons.len(), "overwriting remote person directory");

        let response = self
            .inner
            .client
            .post(url)
            .bearer_auth(self.inner.token.expose_secret())
            .json(&persons)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }
        Ok(())
    }

    fn document_url(&self) -> Url {
        // The base URL is validated at config load; joining a plain file
        // name onto it cannot fail.
        self.inner
            .base_url
            .join(PERSONS_DOCUMENT)
            .unwrap_or_else(|_| self.inner.base_url.clone())
    }
}
