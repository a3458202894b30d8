//! Application state shared across view controllers.

use std::sync::Arc;

use secrecy::ExposeSecret;

use panda_pantry_core::auth::{CredentialCheck, StaticAdminCredentials};
use panda_pantry_store::{SharedStore, StoreHandle};

use crate::config::StorefrontConfig;
use crate::remote::RemoteClient;

/// Application state shared across all view controllers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// shared store, the remote bucket client, and the injected credential
/// check.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: SharedStore,
    remote: RemoteClient,
    admin_check: Arc<dyn CredentialCheck>,
}

impl AppState {
    /// Create application state over `store`.
    ///
    /// The admin credential check is built from the configuration; swap it
    /// with [`AppState::with_credential_check`] to replace the static
    /// shortcut.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: SharedStore) -> Self {
        let admin_check = Arc::new(StaticAdminCredentials::new(
            config.admin.username.as_str(),
            config.admin.email_alias.as_str(),
            config.admin.password.expose_secret(),
        ));
        Self::with_credential_check(config, store, admin_check)
    }

    /// Create application state with an injected credential check.
    #[must_use]
    pub fn with_credential_check(
        config: StorefrontConfig,
        store: SharedStore,
        admin_check: Arc<dyn CredentialCheck>,
    ) -> Self {
        let remote = RemoteClient::new(&config);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                remote,
                admin_check,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared store.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.inner.store
    }

    /// Get a reference to the remote bucket client.
    #[must_use]
    pub fn remote(&self) -> &RemoteClient {
        &self.inner.remote
    }

    /// Get the injected credential check.
    #[must_use]
    pub fn credential_check(&self) -> Arc<dyn CredentialCheck> {
        Arc::clone(&self.inner.admin_check)
    }

    /// Open a fresh store handle - one per "tab".
    #[must_use]
    pub fn open_tab(&self) -> StoreHandle {
        self.inner.store.handle()
    }
}
