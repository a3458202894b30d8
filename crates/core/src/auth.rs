//! Credential-check capability.
//!
//! The deployed storefront grants admin sessions through a hardcoded
//! credential. That check is modelled as an injected capability so a real
//! credential scheme can replace it without touching any call site.

use crate::types::Role;

/// Credential-check capability.
///
/// `Some(role)` grants a session of that role; `None` falls through to
/// whatever the calling flow checks next (for the storefront, the stored
/// user record).
pub trait CredentialCheck: Send + Sync {
    /// Check an identifier/secret pair.
    fn authenticate(&self, identifier: &str, secret: &str) -> Option<Role>;
}

/// The deployed storefront's static admin shortcut: one shared password,
/// accepted for the admin username or its email alias.
pub struct StaticAdminCredentials {
    username: String,
    email_alias: String,
    password: String,
}

impl StaticAdminCredentials {
    /// Build the shortcut. Pass the username as `email_alias` too when a
    /// flow has no separate alias.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email_alias: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email_alias: email_alias.into(),
            password: password.into(),
        }
    }
}

impl CredentialCheck for StaticAdminCredentials {
    fn authenticate(&self, identifier: &str, secret: &str) -> Option<Role> {
        let known = identifier == self.username || identifier == self.email_alias;
        (known && secret == self.password).then_some(Role::Admin)
    }
}
