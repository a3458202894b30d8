//! Registered user record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Email, Role};

/// A registered user, as persisted under the `userData` store key.
///
/// The store retains at most one such record: registration overwrites any
/// previous one. The admin registration path keeps its own separate list
/// under `usuarios` (see the admin crate); the two are never reconciled.
///
/// The password is stored as submitted, in plaintext. That is the observed
/// persistence format and login compares against it directly; swapping in a
/// real credential scheme happens behind the storefront's `CredentialCheck`
/// capability, not by changing this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name, shown in the session banner when logged in.
    pub full_name: String,
    /// Login handle (distinct from the email; unused by the login check).
    pub username: String,
    /// Address used as the login identifier.
    pub email: Email,
    /// Plaintext password, compared as-is at login.
    pub password: String,
    /// Birth date; the registration form enforces an age of 13 to 100.
    pub birth_date: NaiveDate,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// Optional street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> UserRecord {
        UserRecord {
            full_name: "Ana Reyes".to_owned(),
            username: "anar".to_owned(),
            email: Email::parse("ana@example.com").unwrap(),
            password: "secret1".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            role: Role::Customer,
            address: None,
        }
    }

    #[test]
    fn test_camel_case_encoding() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fullName"], "Ana Reyes");
        assert_eq!(json["birthDate"], "1990-05-14");
        assert_eq!(json["role"], "customer");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_role_defaults_to_customer() {
        let json = r#"{
            "fullName": "Ana Reyes",
            "username": "anar",
            "email": "ana@example.com",
            "password": "secret1",
            "birthDate": "1990-05-14"
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role, Role::Customer);
    }
}
