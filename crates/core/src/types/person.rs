//! Person directory records.

use serde::{Deserialize, Serialize};

/// An entry of the remote person directory (`personas.json`).
///
/// The directory is unrelated to registered storefront users; the admin panel
/// reads the whole document and overwrites it wholesale. Unmodelled fields
/// are preserved in `extra` across that read-modify-write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Display name.
    pub name: String,
    /// Contact address, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any further fields of the source document, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
