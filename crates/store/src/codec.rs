//! Encode/decode helpers for store values.
//!
//! Stored values are JSON text. Callers must tolerate absent or malformed
//! values: a decode failure is never surfaced as an error, it degrades to
//! the caller's default (empty collection, no record) with a warning.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Decode a stored value, substituting `T::default()` when the value is
/// absent or malformed.
pub fn decode_or_default<T>(raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    decode_opt(raw).unwrap_or_default()
}

/// Decode a stored value, yielding `None` when it is absent or malformed.
pub fn decode_opt<T>(raw: Option<&str>) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed store value");
            None
        }
    }
}

/// Encode a value for storage.
///
/// Encoding these types cannot realistically fail; if it ever does, the
/// failure is logged and an empty string is stored, which later decodes as
/// absent data.
pub fn encode<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "failed to encode store value");
            String::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use panda_pantry_core::CartItem;

    use super::*;

    #[test]
    fn test_absent_decodes_to_default() {
        let cart: Vec<CartItem> = decode_or_default(None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_malformed_decodes_to_default() {
        let cart: Vec<CartItem> = decode_or_default(Some("not json ["));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_wrong_shape_decodes_to_default() {
        let cart: Vec<CartItem> = decode_or_default(Some(r#"{"a": 1}"#));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decode_opt_absent_and_malformed() {
        assert_eq!(decode_opt::<Vec<u32>>(None), None);
        assert_eq!(decode_opt::<Vec<u32>>(Some("{{")), None);
        assert_eq!(decode_opt::<Vec<u32>>(Some("[1,2]")), Some(vec![1, 2]));
    }

    #[test]
    fn test_encode_roundtrip() {
        let encoded = encode(&vec![1u32, 2, 3]);
        let decoded: Vec<u32> = decode_or_default(Some(&encoded));
        assert_eq!(decoded, vec![1, 2, 3]);
    }
}
