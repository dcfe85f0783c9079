//! Room-count aggregation
//!
//! The listing API publishes room counts as an unordered list of
//! `(propertyId, value)` pairs with the value encoded as text.

use crate::model::RoomCount;

/// Property id of the total room count
pub const ROOMS_TOTAL: &str = "total";
/// Property id of the single room count
pub const ROOMS_SINGLE: &str = "single";
/// Property id of the double room count
pub const ROOMS_DOUBLE: &str = "double";

/// Room totals extracted from a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomTotals {
    pub total: i64,
    pub single: i64,
    pub double: i64,
}

impl RoomTotals {
    /// Aggregate room-count entries
    ///
    /// Unknown property ids are ignored. When a property id repeats, the
    /// later entry wins.
    pub fn from_entries(entries: &[RoomCount]) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            let value = parse_leading_int(&entry.value);
            match entry.property_id.as_str() {
                ROOMS_TOTAL => totals.total = value,
                ROOMS_SINGLE => totals.single = value,
                ROOMS_DOUBLE => totals.double = value,
                _ => {}
            }
        }
        totals
    }
}

/// Parse the leading base-10 integer of `text`, scanf style
///
/// Leading whitespace is skipped and a single `+` or `-` sign is accepted.
/// Parsing stops at the first non-digit, so `"12 rooms"` yields 12 and
/// `"3.5"` yields 3. No digits at all, or a value outside `i64`, yields 0.
pub fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}
