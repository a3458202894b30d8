//! Storefront configuration loaded from environment variables.
//!
//! Every variable has a default matching the deployed storefront, so a bare
//! environment works out of the box.
//!
//! # Environment Variables
//!
//! - `PANDA_BUCKET_URL` - Base URL of the remote bucket holding the order
//!   and person documents (default: the deployed bucket)
//! - `PANDA_BUCKET_TOKEN` - Bearer credential for the bucket's write
//!   endpoint. The default is the credential embedded in the deployed
//!   client - a static, shared secret, which is a known weakness of this
//!   design rather than something this crate hides.
//! - `PANDA_STORE_FILE` - Path of the JSON file backing the local store
//!   (default: `panda-store.json`; used by the CLI)
//! - `PANDA_ADMIN_USER` - Admin shortcut username (default: `admin`)
//! - `PANDA_ADMIN_EMAIL` - Admin shortcut email alias accepted by the home
//!   login form (default: `admin@gmail.com`)
//! - `PANDA_ADMIN_PASSWORD` - Admin shortcut password (default: `admin`)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_BUCKET_URL: &str = "https://bucketmascotas.s3.us-east-1.amazonaws.com";
const DEFAULT_BUCKET_TOKEN: &str = "2d4b8422-c7f4-4b1d-8b73-439bba7af688";
const DEFAULT_STORE_FILE: &str = "panda-store.json";
const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_EMAIL: &str = "admin@gmail.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the remote bucket.
    pub bucket_url: Url,
    /// Bearer credential for the bucket's write endpoint.
    pub bucket_token: SecretString,
    /// Path of the JSON file backing the local store.
    pub store_file: PathBuf,
    /// Admin shortcut credentials.
    pub admin: AdminCredentialConfig,
}

/// The hardcoded administrative shortcut of the deployed storefront,
/// lifted into configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentialConfig {
    /// Username accepted by the admin panel login.
    pub username: String,
    /// Email alias accepted by the home login form.
    pub email_alias: String,
    /// Shared password.
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentialConfig")
            .field("username", &self.username)
            .field("email_alias", &self.email_alias)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment, falling back to the
    /// deployed defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `PANDA_BUCKET_URL` is not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket_url = env_or("PANDA_BUCKET_URL", DEFAULT_BUCKET_URL);
        let bucket_url = Url::parse(&bucket_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PANDA_BUCKET_URL".to_owned(), e.to_string()))?;

        Ok(Self {
            bucket_url,
            bucket_token: SecretString::from(env_or("PANDA_BUCKET_TOKEN", DEFAULT_BUCKET_TOKEN)),
            store_file: PathBuf::from(env_or("PANDA_STORE_FILE", DEFAULT_STORE_FILE)),
            admin: AdminCredentialConfig {
                username: env_or("PANDA_ADMIN_USER", DEFAULT_ADMIN_USER),
                email_alias: env_or("PANDA_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
                password: SecretString::from(env_or(
                    "PANDA_ADMIN_PASSWORD",
                    DEFAULT_ADMIN_PASSWORD,
                )),
            },
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}
