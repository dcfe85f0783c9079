//! Page envelope decoder
//!
//! Turns a response body into a [`PageEnvelope`]. Only the envelope shape is
//! checked here; individual records are validated later, one at a time.

use crate::error::{Error, Result};
use crate::model::PageEnvelope;
use serde_json::Value;

/// Decode a JSON response body into a page envelope
///
/// Fails when the body is not JSON, is not an object, or has envelope fields
/// of the wrong type (for example `"data": {}`).
pub fn decode_page(body: &str) -> Result<PageEnvelope> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })?;

    if !value.is_object() {
        return Err(Error::decode(format!(
            "Expected a JSON object, found {}",
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| Error::Decode {
        message: format!("Invalid page envelope: {e}"),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
