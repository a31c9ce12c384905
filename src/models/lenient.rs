//! Field deserializers that tolerate the shapes found in the article collections.
//!
//! The collections were imported from several CMS exports, so the same field may be
//! a string in one document, a number or `null` in another.

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer};

/// Render a scalar BSON value as text. Returns `None` for arrays, documents and nulls.
pub(crate) fn scalar_text(value: &Bson) -> Option<String> {
    match value {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::DateTime(dt) => Some(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        ),
        Bson::Symbol(s) => Some(s.clone()),
        _ => None,
    }
}

/// Text field; numbers and object ids are rendered, null and missing become empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Bson::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

/// Integer field; numeric strings are parsed, anything else becomes zero.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Bson::deserialize(deserializer)?;
    Ok(match value {
        Bson::Int32(n) => i64::from(n),
        Bson::Int64(n) => n,
        Bson::Double(n) if n.is_finite() => n as i64,
        Bson::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Any field whose stored value may be `null`; null maps to `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
