//! Admin panel error handling.

use thiserror::Error;

use panda_pantry_core::forms::ValidationErrors;

use crate::remote::RemoteError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The admin username/password pair was rejected.
    #[error("invalid admin credentials")]
    InvalidCredentials,

    /// Form validation failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The remote bucket could not be fetched or written.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),
}

impl AdminError {
    /// The message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Username or password incorrect.".to_owned(),
            Self::Validation(errors) => errors.to_string(),
            Self::Remote(_) => "Could not load data from the server.".to_owned(),
        }
    }
}
