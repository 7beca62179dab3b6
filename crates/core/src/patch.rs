//! Tri-state field wrapper for partial updates.
//!
//! A JSON payload can omit a field, send it as `null`, or send a value. A
//! plain `Option<T>` collapses the first two, so update DTOs use [`Patch`]
//! together with `#[serde(default)]`:
//!
//! ```
//! use blog_core::patch::Patch;
//!
//! #[derive(serde::Deserialize)]
//! struct Payload {
//!     #[serde(default)]
//!     title: Patch<String>,
//! }
//!
//! let omitted: Payload = serde_json::from_str("{}").unwrap();
//! assert_eq!(omitted.title, Patch::Missing);
//!
//! let null: Payload = serde_json::from_str(r#"{"title": null}"#).unwrap();
//! assert_eq!(null.title, Patch::Null);
//! ```

use serde::{Deserialize, Deserializer};

/// A field that may be absent, explicitly null, or carry a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not present in the payload.
    #[default]
    Missing,
    /// The key was present with a JSON `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

// Only reached when the key is present; `#[serde(default)]` covers the
// missing case.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
