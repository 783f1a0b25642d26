//! Tri-state deserialization for fields that may be explicitly cleared.
//!
//! A plain `Option<Option<T>>` collapses `null` into the outer `None`, which
//! makes "field omitted" and "field set to null" indistinguishable. Use
//! [`deserialize`] together with `#[serde(default)]`:
//!
//! ```
//! #[derive(serde::Deserialize)]
//! struct Patch {
//!     #[serde(default, deserialize_with = "playlist_core::nullable::deserialize")]
//!     album_id: Option<Option<i64>>,
//! }
//!
//! let omitted: Patch = serde_json::from_str("{}").unwrap();
//! assert_eq!(omitted.album_id, None);
//!
//! let cleared: Patch = serde_json::from_str(r#"{"album_id": null}"#).unwrap();
//! assert_eq!(cleared.album_id, Some(None));
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(value)`, mapping `null` to `Some(None)`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize")]
        value: Option<Option<i64>>,
    }

    #[test]
    fn omitted_field_is_none() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(p.value, None);
    }

    #[test]
    fn null_field_is_some_none() {
        let p: Patch = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, Some(None));
    }

    #[test]
    fn present_field_is_some_some() {
        let p: Patch = serde_json::from_str(r#"{"value": 3}"#).unwrap();
        assert_eq!(p.value, Some(Some(3)));
    }
}
