//! Record mapping module
//!
//! Projects listing API records onto the accommodation catalog schema.
//!
//! # Overview
//!
//! Mapping is a pure, total function: every [`SourceRecord`], however
//! sparse, yields exactly one [`Accommodation`]. Missing inputs become empty
//! strings or zeros. Nothing is validated or reconciled here; for example
//! `MaxPersons` is the source bed count even when it disagrees with the room
//! totals.

mod category;
mod rooms;

pub use category::{CategoryTable, HOTEL_PENSION};
pub use rooms::{parse_leading_int, RoomTotals, ROOMS_DOUBLE, ROOMS_SINGLE, ROOMS_TOTAL};

use crate::model::{
    AccoDetail, AccoDetailLanguage, AccoOverview, AccoType, Accommodation, GpsInfo, Meta,
    SourceRecord, META_TYPE, SOURCE_TAG,
};

/// Maps one source record to one target record
pub trait RecordMapper: Send + Sync {
    /// Project a source record; never fails
    fn map(&self, record: &SourceRecord) -> Accommodation;
}

/// The listing API → catalog projection
#[derive(Debug, Clone)]
pub struct AccommodationMapper {
    categories: CategoryTable,
}

impl AccommodationMapper {
    /// Create a mapper with the built-in category table
    pub fn new() -> Self {
        Self::with_categories(CategoryTable::standard())
    }

    /// Create a mapper with a custom category table
    pub fn with_categories(categories: CategoryTable) -> Self {
        Self { categories }
    }
}

impl Default for AccommodationMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordMapper for AccommodationMapper {
    fn map(&self, record: &SourceRecord) -> Accommodation {
        let address = &record.address;
        let rooms = RoomTotals::from_entries(&record.number_of_rooms);

        Accommodation {
            source: SOURCE_TAG.to_string(),
            active: true,
            shortname: record.name.clone(),
            meta: Meta {
                id: record.identifier.clone(),
                kind: META_TYPE.to_string(),
                source: SOURCE_TAG.to_string(),
            },
            acco_detail: AccoDetail {
                language: AccoDetailLanguage {
                    name: record.name.clone(),
                    street: address.street_address.clone(),
                    zip: address.postal_code.clone(),
                    city: address.address_locality.clone(),
                    country_code: address.address_country.clone(),
                    email: address.email.clone(),
                    phone: address.telephone.clone(),
                },
            },
            gps_info: vec![GpsInfo::position(
                record.geo.latitude,
                record.geo.longitude,
            )],
            acco_type: AccoType {
                id: self.categories.resolve(&record.star_rating.additional_type),
            },
            acco_overview: AccoOverview {
                total_rooms: rooms.total,
                single_rooms: rooms.single,
                double_rooms: rooms.double,
                check_in_from: record.checkin_time.clone(),
                check_in_to: record.checkin_time_to.clone(),
                check_out_from: record.checkout_time_from.clone(),
                check_out_to: record.checkout_time.clone(),
                max_persons: record.number_of_beds,
            },
        }
    }
}
