//! Tests for the data model

use super::*;
use serde_json::json;

// ============================================================================
// PageEnvelope Tests
// ============================================================================

fn envelope(has_next_page: bool, token: &str) -> PageEnvelope {
    PageEnvelope {
        has_next_page,
        next_page_token: token.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_continuation_requires_flag_and_token() {
    assert_eq!(envelope(true, "T2").continuation(), Some("T2"));
    assert_eq!(envelope(false, "T2").continuation(), None);
    assert_eq!(envelope(true, "").continuation(), None);
    assert_eq!(envelope(false, "").continuation(), None);
}

#[test]
fn test_envelope_records_keep_order() {
    let page = PageEnvelope {
        count: 3,
        data: vec![
            json!({"identifier": "a"}),
            json!({"identifier": "b"}),
            json!({"identifier": "c"}),
        ],
        ..Default::default()
    };

    let ids: Vec<_> = page
        .records()
        .map(|r| r.unwrap().identifier)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// ============================================================================
// SourceRecord Tests
// ============================================================================

#[test]
fn test_source_record_from_api_json() {
    let raw = json!({
        "name": "Gasthaus Rössli",
        "address": {
            "addressCountry": "CH",
            "addressLocality": "Luzern",
            "postalCode": "6004",
            "streetAddress": "Hertensteinstrasse 1",
            "email": "info@roessli.example",
            "telephone": "+41 41 000 00 00"
        },
        "geo": {"latitude": 47.05, "longitude": 8.30},
        "numberOfRooms": [{"propertyId": "total", "value": "14"}],
        "starRating": {"ratingValue": 3, "additionalType": "Hotel", "name": "3 stars"},
        "numberOfBeds": 28,
        "identifier": "lb-77",
        "checkinTime": "15:00",
        "checkinTimeTo": "21:00",
        "checkoutTimeFrom": "07:00",
        "checkoutTime": "11:00"
    });

    let record = SourceRecord::from_value(&raw, 0).unwrap();
    assert_eq!(record.name, "Gasthaus Rössli");
    assert_eq!(record.address.address_locality, "Luzern");
    assert!((record.geo.latitude - 47.05).abs() < f64::EPSILON);
    assert_eq!(
        record.number_of_rooms,
        vec![RoomCount {
            property_id: "total".to_string(),
            value: "14".to_string(),
        }]
    );
    assert!((record.star_rating.rating_value - 3.0).abs() < f64::EPSILON);
    assert_eq!(record.star_rating.additional_type, "Hotel");
    assert_eq!(record.number_of_beds, 28);
    assert_eq!(record.identifier, "lb-77");
    assert_eq!(record.checkout_time, "11:00");
}

#[test]
fn test_source_record_tolerates_nulls() {
    let raw = json!({
        "name": null,
        "address": null,
        "geo": {"latitude": null},
        "numberOfRooms": null,
        "starRating": {"additionalType": null},
        "numberOfBeds": null,
        "identifier": "lb-1"
    });

    let record = SourceRecord::from_value(&raw, 0).unwrap();
    assert_eq!(record.identifier, "lb-1");
    assert_eq!(record.name, "");
    assert_eq!(record.address, PostalAddress::default());
    assert_eq!(record.geo, GeoCoordinates::default());
    assert!(record.number_of_rooms.is_empty());
    assert_eq!(record.number_of_beds, 0);
}

#[test]
fn test_source_record_error_labels() {
    let err = SourceRecord::from_value(&json!({"identifier": "lb-9", "numberOfBeds": "x"}), 4)
        .unwrap_err();
    assert!(err.to_string().contains("'lb-9'"));

    let err = SourceRecord::from_value(&json!("not a record"), 4).unwrap_err();
    assert!(err.to_string().contains("'#4'"));
}

// ============================================================================
// Accommodation Tests
// ============================================================================

fn sample_accommodation() -> Accommodation {
    Accommodation {
        source: SOURCE_TAG.to_string(),
        active: true,
        shortname: "Rössli".to_string(),
        meta: Meta {
            id: "lb-77".to_string(),
            kind: META_TYPE.to_string(),
            source: SOURCE_TAG.to_string(),
        },
        acco_detail: AccoDetail {
            language: AccoDetailLanguage {
                name: "Rössli".to_string(),
                ..Default::default()
            },
        },
        gps_info: vec![GpsInfo::position(47.05, 8.3)],
        acco_type: AccoType {
            id: "HotelPension".to_string(),
        },
        acco_overview: AccoOverview {
            total_rooms: 14,
            max_persons: 28,
            ..Default::default()
        },
    }
}

#[test]
fn test_accommodation_field_names() {
    let value = serde_json::to_value(sample_accommodation()).unwrap();

    assert_eq!(value["Source"], "discoverSwiss");
    assert_eq!(value["Active"], true);
    assert_eq!(value["Shortname"], "Rössli");
    assert_eq!(value["_Meta"]["Id"], "lb-77");
    assert_eq!(value["_Meta"]["Type"], "accommodation");
    assert_eq!(value["_Meta"]["Source"], "discoverSwiss");
    assert_eq!(value["AccoDetail"]["de"]["Name"], "Rössli");
    assert_eq!(value["AccoDetail"]["de"]["CountryCode"], "");
    assert_eq!(value["GpsInfo"][0]["Gpstype"], "position");
    assert_eq!(value["GpsInfo"][0]["Altitude"], 0.0);
    assert_eq!(value["GpsInfo"][0]["AltitudeUnitofMeasure"], "m");
    assert_eq!(value["AccoType"]["Id"], "HotelPension");
    assert_eq!(value["AccoOverview"]["TotalRooms"], 14);
    assert_eq!(value["AccoOverview"]["CheckInFrom"], "");
    assert_eq!(value["AccoOverview"]["MaxPersons"], 28);
}

#[test]
fn test_accommodation_field_order() {
    let text = serde_json::to_string(&sample_accommodation()).unwrap();
    let keys = [
        "\"Source\"",
        "\"Active\"",
        "\"Shortname\"",
        "\"_Meta\"",
        "\"AccoDetail\"",
        "\"GpsInfo\"",
        "\"AccoType\"",
        "\"AccoOverview\"",
    ];

    let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_accommodation_roundtrip() {
    let acco = sample_accommodation();
    let text = serde_json::to_string(&acco).unwrap();
    let parsed: Accommodation = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, acco);
}
