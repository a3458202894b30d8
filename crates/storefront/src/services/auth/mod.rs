//! Authentication service.
//!
//! Login, logout, and registration against the shared store. The
//! administrative shortcut is consulted through the injected
//! [`CredentialCheck`] capability so a real credential scheme can replace
//! the static one without touching call sites.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use panda_pantry_core::auth::CredentialCheck;
use panda_pantry_core::{Role, UserRecord};
use panda_pantry_store::{StoreHandle, codec, keys};

/// Display name recorded for admin sessions.
const ADMIN_DISPLAY_NAME: &str = "Admin";

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A regular user session was granted (`sesionActiva` set).
    UserSession {
        /// Display name from the stored record.
        username: String,
    },
    /// An admin session was granted (admin keys set; the regular session
    /// flag is left untouched).
    AdminSession {
        /// Admin display name.
        username: String,
    },
}

/// Authentication operations over one tab's store handle.
pub struct AuthService {
    tab: StoreHandle,
    admin: Arc<dyn CredentialCheck>,
}

impl AuthService {
    /// Create an authentication service for `tab`.
    #[must_use]
    pub fn new(tab: StoreHandle, admin: Arc<dyn CredentialCheck>) -> Self {
        Self { tab, admin }
    }

    /// The single stored user record, if a valid one is present.
    #[must_use]
    pub fn stored_user(&self) -> Option<UserRecord> {
        codec::decode_opt(self.tab.get(keys::USER_DATA).as_deref())
    }

    /// Persist `record` as the registered user, overwriting any previous
    /// record. Registration does not log the user in.
    pub fn register(&self, record: &UserRecord) {
        self.tab.set(keys::USER_DATA, codec::encode(record));
        tracing::info!(username = %record.username, "user registered");
    }

    /// Log in with the admin shortcut or the stored record.
    ///
    /// The admin check runs first and wins regardless of any stored
    /// record. A user session sets `sesionActiva` and publishes a
    /// synthetic announcement so this tab's own synchronizers reconcile
    /// too (other tabs are notified by the write itself).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoStoredUser`] when no record exists, or
    /// [`AuthError::CredentialMismatch`] when the pair does not match it.
    pub fn login(&self, identifier: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        if self.admin.authenticate(identifier, password) == Some(Role::Admin) {
            self.tab.set(keys::IS_ADMIN_LOGGED_IN, "true");
            self.tab.set(keys::LOGGED_IN_USER, ADMIN_DISPLAY_NAME);
            tracing::info!("admin session granted");
            return Ok(LoginOutcome::AdminSession {
                username: ADMIN_DISPLAY_NAME.to_owned(),
            });
        }
        self.login_stored(identifier, password)
            .map(|username| LoginOutcome::UserSession { username })
    }

    /// Log in against the stored record only (the profile view's flow has
    /// no admin shortcut). Returns the display name on success.
    ///
    /// # Errors
    ///
    /// Same as [`AuthService::login`].
    pub fn login_stored(&self, identifier: &str, password: &str) -> Result<String, AuthError> {
        let user = self.stored_user().ok_or(AuthError::NoStoredUser)?;
        if user.email.as_str() != identifier || user.password != password {
            return Err(AuthError::CredentialMismatch);
        }

        self.tab.set(keys::SESSION_ACTIVE, "true");
        self.tab.announce(keys::SESSION_ACTIVE);
        tracing::info!(username = %user.username, "user session granted");
        Ok(user.full_name)
    }

    /// Log out: set the session flag false (the user record stays), drop
    /// any admin session, and announce so every view reconciles.
    pub fn logout(&self) {
        self.tab.set(keys::SESSION_ACTIVE, "false");
        self.tab.remove(keys::IS_ADMIN_LOGGED_IN);
        self.tab.remove(keys::LOGGED_IN_USER);
        self.tab.announce(keys::SESSION_ACTIVE);
        tracing::info!("session closed");
    }
}
