//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// `NoStoredUser` and `CredentialMismatch` are distinguishable internally
/// (and in tests) but share one generic user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No user record has been registered yet.
    #[error("no registered user record")]
    NoStoredUser,

    /// A record exists but the identifier/password pair does not match it.
    #[error("credentials do not match the stored record")]
    CredentialMismatch,
}

impl AuthError {
    /// The generic message shown to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NoStoredUser | Self::CredentialMismatch => "Email or password incorrect.",
        }
    }
}
