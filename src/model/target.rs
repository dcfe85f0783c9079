//! Target-side types: the accommodation catalog's record shape
//!
//! Field names and order match what the catalog importer expects.

use serde::{Deserialize, Serialize};

/// Provenance tag written to `Source` and `_Meta.Source`
pub const SOURCE_TAG: &str = "discoverSwiss";

/// Type tag written to `_Meta.Type`
pub const META_TYPE: &str = "accommodation";

/// `Gpstype` of the single position entry
pub const GPS_TYPE_POSITION: &str = "position";

/// Unit of `Altitude`
pub const ALTITUDE_UNIT: &str = "m";

/// One accommodation in the catalog schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Accommodation {
    pub source: String,
    pub active: bool,
    pub shortname: String,
    #[serde(rename = "_Meta")]
    pub meta: Meta,
    pub acco_detail: AccoDetail,
    pub gps_info: Vec<GpsInfo>,
    pub acco_type: AccoType,
    pub acco_overview: AccoOverview,
}

/// Identity block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Source")]
    pub source: String,
}

/// Address details, scoped by language
///
/// The listing API only publishes one address, filed under German.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccoDetail {
    #[serde(rename = "de")]
    pub language: AccoDetailLanguage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccoDetailLanguage {
    pub name: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country_code: String,
    pub email: String,
    pub phone: String,
}

/// A geodetic position entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsInfo {
    #[serde(rename = "Gpstype")]
    pub gps_type: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Altitude")]
    pub altitude: f64,
    #[serde(rename = "AltitudeUnitofMeasure")]
    pub altitude_unit: String,
}

impl GpsInfo {
    /// A `position` entry at sea level
    pub fn position(latitude: f64, longitude: f64) -> Self {
        Self {
            gps_type: GPS_TYPE_POSITION.to_string(),
            latitude,
            longitude,
            altitude: 0.0,
            altitude_unit: ALTITUDE_UNIT.to_string(),
        }
    }
}

/// Category classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccoType {
    #[serde(rename = "Id")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccoOverview {
    pub total_rooms: i64,
    pub single_rooms: i64,
    pub double_rooms: i64,
    pub check_in_from: String,
    pub check_in_to: String,
    pub check_out_from: String,
    pub check_out_to: String,
    pub max_persons: i64,
}
