//! Registration and login form validation.
//!
//! Validation failures are user-correctable and never mutate the store;
//! controllers mark every field touched on failure so the presentation
//! layer can highlight them.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::types::{Email, Role, UserRecord};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Youngest accepted age, inclusive.
pub const MIN_AGE: i32 = 13;

/// Oldest accepted age, inclusive.
pub const MAX_AGE: i32 = 100;

/// Form fields across the storefront's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    BirthDate,
    Address,
    /// The order-tracking lookup field.
    TrackingNumber,
    /// The admin panel's order-status field.
    OrderStatus,
}

impl Field {
    /// Every field, for mark-all-touched. Each form holds its own
    /// [`Touched`], so marking fields a form does not render is harmless.
    pub const ALL: [Self; 9] = [
        Self::FullName,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::BirthDate,
        Self::Address,
        Self::TrackingNumber,
        Self::OrderStatus,
    ];

    /// Human-readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "password confirmation",
            Self::BirthDate => "birth date",
            Self::Address => "address",
            Self::TrackingNumber => "tracking number",
            Self::OrderStatus => "order status",
        }
    }
}

/// Which fields the user has interacted with, for UI highlighting.
///
/// A failed submit marks every field touched so all errors show at once.
#[derive(Debug, Clone, Default)]
pub struct Touched(HashSet<Field>);

impl Touched {
    /// Mark one field touched.
    pub fn mark(&mut self, field: Field) {
        self.0.insert(field);
    }

    /// Mark every field touched.
    pub fn mark_all(&mut self) {
        self.0.extend(Field::ALL);
    }

    /// Whether `field` has been touched.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("birth date is invalid")]
    InvalidBirthDate,
    #[error("age must be between {MIN_AGE} and {MAX_AGE}")]
    AgeOutOfRange,
}

/// Every failure of one submit, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw registration form values, as submitted.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// ISO date, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Optional; empty means no address.
    pub address: String,
    /// Role to register with; the customer flow always uses
    /// [`Role::Customer`], the admin panel's form offers a choice.
    pub role: Role,
}

/// Validate a registration submit and build the record to persist.
///
/// All failures are collected, not just the first, so the form can
/// highlight everything at once.
///
/// # Errors
///
/// Returns every [`FieldError`] found, in field order.
pub fn validate_registration(
    input: &RegistrationInput,
    today: NaiveDate,
) -> Result<UserRecord, ValidationErrors> {
    let mut errors = Vec::new();

    let full_name = required(&input.full_name, Field::FullName, &mut errors);
    let username = required(&input.username, Field::Username, &mut errors);

    let email = required(&input.email, Field::Email, &mut errors).and_then(|raw| {
        match Email::parse(raw) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(FieldError::InvalidEmail);
                None
            }
        }
    });

    if input.password.is_empty() {
        errors.push(FieldError::Required(Field::Password));
    } else if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::PasswordTooShort);
    }

    if input.confirm_password.is_empty() {
        errors.push(FieldError::Required(Field::ConfirmPassword));
    } else if input.confirm_password != input.password {
        errors.push(FieldError::PasswordMismatch);
    }

    let birth_date = required(&input.birth_date, Field::BirthDate, &mut errors).and_then(|raw| {
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::InvalidBirthDate);
                None
            }
        }
    });

    if let Some(birth) = birth_date {
        let age = age_on(birth, today);
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            errors.push(FieldError::AgeOutOfRange);
        }
    }

    match (full_name, username, email, birth_date) {
        (Some(full_name), Some(username), Some(email), Some(birth_date))
            if errors.is_empty() =>
        {
            let address = input.address.trim();
            Ok(UserRecord {
                full_name: full_name.to_owned(),
                username: username.to_owned(),
                email,
                password: input.password.clone(),
                birth_date,
                role: input.role,
                address: (!address.is_empty()).then(|| address.to_owned()),
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate a login submit: both fields are required.
///
/// # Errors
///
/// Returns a [`FieldError::Required`] per empty field.
pub fn validate_login(identifier: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    if identifier.trim().is_empty() {
        errors.push(FieldError::Required(Field::Username));
    }
    if password.is_empty() {
        errors.push(FieldError::Required(Field::Password));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Age in whole years at `today`: the calendar-year difference, minus one
/// when today's month/day precedes the birth month/day.
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

fn required<'a>(value: &'a str, field: Field, errors: &mut Vec<FieldError>) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::Required(field));
        None
    } else {
        Some(trimmed)
    }
}
