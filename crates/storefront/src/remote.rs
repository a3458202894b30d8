//! Read-side client for the remote bucket.
//!
//! The bucket holds two JSON documents: the full order collection
//! (`carrito.json`) and the person directory (`personas.json`). This crate
//! only reads; the write endpoint (and its bearer credential) lives in the
//! admin crate.
//!
//! Requests have no timeout and are not cancellable once issued; two
//! concurrent fetches race and the last response to arrive wins.

use std::sync::Arc;

use tracing::instrument;
use url::Url;

use panda_pantry_core::PurchaseRecord;

use crate::config::StorefrontConfig;

/// Document name of the remote order collection.
pub const ORDERS_DOCUMENT: &str = "carrito.json";

/// Errors fetching a remote document.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The request failed (connection, protocol, or body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the remote bucket's read endpoints.
///
/// Cheaply cloneable; all clones share one HTTP connection pool.
#[derive(Clone)]
pub struct RemoteClient {
    inner: Arc<RemoteClientInner>,
}

struct RemoteClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteClient {
    /// Create a new client against the configured bucket.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(RemoteClientInner {
                client: reqwest::Client::new(),
                base_url: config.bucket_url.clone(),
            }),
        }
    }

    /// Fetch the full order collection.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails, the server answers
    /// with a non-success status, or the body is not a valid order list.
    #[instrument(skip(self))]
    pub async fn fetch_orders(&self) -> Result<Vec<PurchaseRecord>, RemoteError> {
        let url = self.document_url(ORDERS_DOCUMENT);
        tracing::debug!(%url, "fetching remote orders");

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        Ok(response.json().await?)
    }

    fn document_url(&self, document: &str) -> Url {
        // The base URL is validated at config load; joining a plain file
        // name onto it cannot fail.
        self.inner
            .base_url
            .join(document)
            .unwrap_or_else(|_| self.inner.base_url.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::AdminCredentialConfig;

    use super::*;

    fn config_for(server: &MockServer) -> StorefrontConfig {
        StorefrontConfig {
            bucket_url: Url::parse(&server.uri()).unwrap(),
            bucket_token: SecretString::from("test-token"),
            store_file: "unused.json".into(),
            admin: AdminCredentialConfig {
                username: "admin".to_owned(),
                email_alias: "admin@gmail.com".to_owned(),
                password: SecretString::from("admin"),
            },
        }
    }

    #[tokio::test]
    async fn test_fetch_orders_decodes_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/carrito.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"trackingNumber": "PP-1042", "status": "preparing"},
                {"trackingNumber": "PP-1043", "status": "shipped"}
            ])))
            .mount(&server)
            .await;

        let client = RemoteClient::new(&config_for(&server));
        let orders = client.fetch_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders.first().unwrap().tracking_number.as_str(), "PP-1042");
    }

    #[tokio::test]
    async fn test_fetch_orders_surfaces_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/carrito.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = RemoteClient::new(&config_for(&server));
        let err = client.fetch_orders().await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(_)));
    }
}
