//! Purchase/order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TrackingNumber;

/// An order record, as found in the remote order document and in the locally
/// persisted `purchases` collection.
///
/// The two collections share this shape but are distinct data sources:
/// tracking reads the remote document, admin status updates mutate only the
/// local one. Fields this crate does not model are preserved verbatim in
/// `extra` so a read-modify-write of the collection does not drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    /// Externally assigned unique lookup key.
    pub tracking_number: TrackingNumber,
    /// Free-form status, set by admin updates ("preparing", "shipped", ...).
    pub status: String,
    /// Customer display name, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Order total, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    /// Any further fields of the source document, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
