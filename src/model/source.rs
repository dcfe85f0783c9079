//! Source-side types: the listing API's page envelope and lodging records
//!
//! Every field tolerates being absent or `null`, decoding to its default.

use crate::decode::lenient::{null_as_default, string_or_number};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// One decoded page of the listing API
///
/// Records are kept as raw JSON so that a single malformed record can be
/// skipped without rejecting the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    /// Number of records the API reports for this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
    /// Whether the API claims more pages exist
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next_page: bool,
    /// Continuation token for the next page (empty = none issued)
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_page_token: String,
    /// Raw records in page order
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<JsonValue>,
}

impl PageEnvelope {
    /// Token to request the next page with, if pagination should continue
    ///
    /// Returns `None` when the API reports no further pages, and also when it
    /// claims more pages but issues no token.
    pub fn continuation(&self) -> Option<&str> {
        if self.has_next_page && !self.next_page_token.is_empty() {
            Some(self.next_page_token.as_str())
        } else {
            None
        }
    }

    /// Parse every raw record, in page order
    pub fn records(&self) -> impl Iterator<Item = Result<SourceRecord>> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(index, raw)| SourceRecord::from_value(raw, index))
    }
}

/// A lodging business as published by the listing API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: PostalAddress,
    #[serde(default, deserialize_with = "null_as_default")]
    pub geo: GeoCoordinates,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_rooms: Vec<RoomCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub star_rating: StarRating,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_beds: i64,
    /// Stable external id, becomes the target's primary key
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checkin_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checkin_time_to: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checkout_time_from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checkout_time: String,
}

impl SourceRecord {
    /// Deserialize one raw record
    ///
    /// `index` is the record's position in its page and only labels the
    /// error when the record carries no usable identifier.
    pub fn from_value(value: &JsonValue, index: usize) -> Result<Self> {
        Self::deserialize(value)
            .map_err(|e| Error::mapping(record_label(value, index), e.to_string()))
    }
}

/// Human-readable label for a raw record in diagnostics
fn record_label(value: &JsonValue, index: usize) -> String {
    match value.get("identifier").and_then(JsonValue::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("#{index}"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_locality: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub telephone: String,
}

/// Zero coordinates mean "unknown"; the two are not distinguished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// One `(propertyId, value)` room-count entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_id: String,
    /// Decimal text, e.g. `"12"`; numbers are accepted and kept as text
    #[serde(default, deserialize_with = "string_or_number")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_value: f64,
    /// Free-text category label such as "Hotel"
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
