//! Order tracking number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error parsing a [`TrackingNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum TrackingNumberError {
    /// The input string is empty (or whitespace only).
    #[error("tracking number cannot be empty")]
    Empty,
}

/// An externally assigned order tracking number.
///
/// Tracking numbers are opaque strings; the only local rule is that they are
/// non-empty. They are the sole lookup key for order tracking and admin
/// status updates, matched exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Parse a `TrackingNumber` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingNumberError::Empty`] if the input is empty or
    /// whitespace only.
    pub fn parse(s: &str) -> Result<Self, TrackingNumberError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TrackingNumberError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the tracking number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackingNumber {
    type Err = TrackingNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
