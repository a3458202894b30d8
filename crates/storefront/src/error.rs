//! Unified error handling for the storefront views.
//!
//! Nothing in this design is fatal: validation errors are user-correctable,
//! stored-data decode failures degrade to defaults before they ever reach
//! an error path, and remote failures surface as a generic message. The
//! worst case on any failure is "no state change, user informed".

use thiserror::Error;

use panda_pantry_core::forms::ValidationErrors;

use crate::remote::RemoteError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront views.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Form validation failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The remote bucket could not be fetched.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// A view that requires a logged-in user was requested without one.
    #[error("not logged in")]
    NotLoggedIn,
}

impl AppError {
    /// The message shown to the user for this error.
    ///
    /// Internal distinctions (no stored record vs. credential mismatch,
    /// HTTP status vs. decode failure) are kept out of the user-facing
    /// text on purpose.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(err) => err.user_message().to_owned(),
            Self::Validation(errors) => errors.to_string(),
            Self::Remote(_) => "Could not load data from the server.".to_owned(),
            Self::NotLoggedIn => "Please log in first.".to_owned(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
