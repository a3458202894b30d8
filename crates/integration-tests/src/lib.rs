//! Integration tests for Panda Pantry.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p panda-pantry-integration-tests
//! ```
//!
//! Nothing external needs to be running: the store is in-memory (or a
//! temp file) and the remote bucket is a wiremock server.
//!
//! # Test Categories
//!
//! - `session_sync` - cross-tab session properties and the end-to-end
//!   register/login/logout scenario
//! - `cart` - merge-on-add and the running-count drift
//! - `order_tracking` - remote lookups (found / not found / fetch failed)
//! - `admin_panel` - status updates, directory registration, session
//!   independence

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use secrecy::SecretString;
use url::Url;

use panda_pantry_core::forms::RegistrationInput;
use panda_pantry_core::{Email, Role, UserRecord};
use panda_pantry_store::{SharedStore, codec, keys};
use panda_pantry_storefront::config::AdminCredentialConfig;
use panda_pantry_storefront::{AppState, StorefrontConfig};

/// Shared setup for integration tests.
pub struct TestContext {
    pub app: AppState,
}

impl TestContext {
    /// Context with an in-memory store and the default (unreachable in
    /// tests) bucket URL.
    #[must_use]
    pub fn new() -> Self {
        Self::against("https://bucket.invalid")
    }

    /// Context whose remote bucket is `base_url` (a wiremock server).
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not a valid URL.
    #[must_use]
    pub fn against(base_url: &str) -> Self {
        let config = StorefrontConfig {
            bucket_url: Url::parse(base_url).expect("test bucket url"),
            bucket_token: SecretString::from("test-token"),
            store_file: "unused.json".into(),
            admin: AdminCredentialConfig {
                username: "admin".to_owned(),
                email_alias: "admin@gmail.com".to_owned(),
                password: SecretString::from("admin"),
            },
        };
        Self {
            app: AppState::new(config, SharedStore::in_memory()),
        }
    }

    /// A known-good registration submit for [`TestContext::sample_user`].
    #[must_use]
    pub fn registration_input() -> RegistrationInput {
        RegistrationInput {
            full_name: "Ana Reyes".to_owned(),
            username: "anar".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
            birth_date: "2006-08-07".to_owned(),
            address: String::new(),
            role: Role::Customer,
        }
    }

    /// The record [`TestContext::registration_input`] produces.
    ///
    /// # Panics
    ///
    /// Panics if the fixture literals are invalid (they are not).
    #[must_use]
    pub fn sample_user() -> UserRecord {
        UserRecord {
            full_name: "Ana Reyes".to_owned(),
            username: "anar".to_owned(),
            email: Email::parse("ana@example.com").expect("fixture email"),
            password: "secret1".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(2006, 8, 7).expect("fixture date"),
            role: Role::Customer,
            address: None,
        }
    }

    /// Persist the sample user record directly, bypassing the forms.
    pub fn seed_user(&self) {
        self.app
            .open_tab()
            .set(keys::USER_DATA, codec::encode(&Self::sample_user()));
    }

    /// A fixed "today" for age validation in tests.
    ///
    /// # Panics
    ///
    /// Never; the literal is valid.
    #[must_use]
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("fixture date")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
