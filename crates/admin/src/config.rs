//! Admin panel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `PANDA_BUCKET_URL` - Base URL of the remote bucket (default: the
//!   deployed bucket)
//! - `PANDA_BUCKET_TOKEN` - Bearer credential for the person-list write
//!   endpoint. Defaults to the static credential embedded in the deployed
//!   client - a shared, long-lived secret and a known weakness of this
//!   design.
//! - `PANDA_STORE_FILE` - Path of the JSON file backing the local store
//!   (default: `panda-store.json`; used by the CLI)
//! - `PANDA_ADMIN_USER` - Admin username (default: `admin`)
//! - `PANDA_ADMIN_PASSWORD` - Admin password (default: `admin`)

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use panda_pantry_core::auth::{CredentialCheck, StaticAdminCredentials};

const DEFAULT_BUCKET_URL: &str = "https://bucketmascotas.s3.us-east-1.amazonaws.com";
const DEFAULT_BUCKET_TOKEN: &str = "2d4b8422-c7f4-4b1d-8b73-439bba7af688";
const DEFAULT_STORE_FILE: &str = "panda-store.json";
const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum AdminConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin panel configuration.
#[derive(Clone)]
pub struct AdminConfig {
    /// Base URL of the remote bucket.
    pub bucket_url: Url,
    /// Bearer credential for the bucket's write endpoint.
    pub bucket_token: SecretString,
    /// Path of the JSON file backing the local store.
    pub store_file: PathBuf,
    /// Admin username.
    pub admin_username: String,
    /// Admin password.
    pub admin_password: SecretString,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("bucket_url", &self.bucket_url.as_str())
            .field("bucket_token", &"[REDACTED]")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"[REDACTED]")
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from the environment, falling back to the
    /// deployed defaults.
    ///
    /// # Errors
    ///
    /// Returns `AdminConfigError::InvalidEnvVar` if `PANDA_BUCKET_URL` is
    /// not a valid URL.
    pub fn from_env() -> Result<Self, AdminConfigError> {
        let bucket_url = env_or("PANDA_BUCKET_URL", DEFAULT_BUCKET_URL);
        let bucket_url = Url::parse(&bucket_url).map_err(|e| {
            AdminConfigError::InvalidEnvVar("PANDA_BUCKET_URL".to_owned(), e.to_string())
        })?;

        Ok(Self {
            bucket_url,
            bucket_token: SecretString::from(env_or("PANDA_BUCKET_TOKEN", DEFAULT_BUCKET_TOKEN)),
            store_file: PathBuf::from(env_or("PANDA_STORE_FILE", DEFAULT_STORE_FILE)),
            admin_username: env_or("PANDA_ADMIN_USER", DEFAULT_ADMIN_USER),
            admin_password: SecretString::from(env_or(
                "PANDA_ADMIN_PASSWORD",
                DEFAULT_ADMIN_PASSWORD,
            )),
        })
    }

    /// Build the injected credential check from this configuration.
    ///
    /// The admin panel accepts only the username (no email alias).
    #[must_use]
    pub fn credential_check(&self) -> Arc<dyn CredentialCheck> {
        Arc::new(StaticAdminCredentials::new(
            self.admin_username.as_str(),
            self.admin_username.as_str(),
            self.admin_password.expose_secret(),
        ))
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}
