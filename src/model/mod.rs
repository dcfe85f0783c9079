//! Data model
//!
//! Source records as published by the listing API and the accommodation
//! records emitted for the catalog. Both are transient: built per page or
//! per record and dropped once emitted.

mod source;
mod target;

pub use source::{
    GeoCoordinates, PageEnvelope, PostalAddress, RoomCount, SourceRecord, StarRating,
};
pub use target::{
    AccoDetail, AccoDetailLanguage, AccoOverview, AccoType, Accommodation, GpsInfo, Meta,
    ALTITUDE_UNIT, GPS_TYPE_POSITION, META_TYPE, SOURCE_TAG,
};

#[cfg(test)]
mod tests;
