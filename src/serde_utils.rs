//! Serde helpers shared by request DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize `Option<Option<T>>` to distinguish between missing field and null value.
///
/// - Missing field → `None` (requires `#[serde(default)]`)
/// - Field is `null` → `Some(None)`
/// - Field has value → `Some(Some(value))`
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
