//! Lenient field deserializers
//!
//! The listing API omits fields, sends `null` for them, or switches between
//! string and number encodings. These helpers fold all of that into plain
//! default values so a sparse record still decodes.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Decode `null` as the type's default value
///
/// Pair with `#[serde(default)]` so missing fields default too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a JSON string or number and keep it as text
///
/// `null` becomes the empty string. Booleans, arrays and objects are
/// rejected.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}
