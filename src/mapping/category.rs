//! Category classification
//!
//! Translates the listing API's free-text category label into the catalog's
//! accommodation type id. Labels without an entry pass through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Catalog id for hotels and guest houses
pub const HOTEL_PENSION: &str = "HotelPension";

static DEFAULT_TABLE: Lazy<CategoryTable> =
    Lazy::new(|| CategoryTable::empty().with_entry("Hotel", HOTEL_PENSION));

/// Case-insensitive label → id lookup table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTable {
    /// Keys are stored lower-cased
    entries: HashMap<String, String>,
}

impl CategoryTable {
    /// A table with no entries; every label passes through
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table
    pub fn standard() -> Self {
        DEFAULT_TABLE.clone()
    }

    /// Add or replace an entry
    #[must_use]
    pub fn with_entry(mut self, label: impl AsRef<str>, id: impl Into<String>) -> Self {
        self.insert(label, id);
        self
    }

    /// Add or replace an entry in place
    pub fn insert(&mut self, label: impl AsRef<str>, id: impl Into<String>) {
        self.entries.insert(fold(label.as_ref()), id.into());
    }

    /// Resolve a label to a catalog id
    pub fn resolve(&self, label: &str) -> String {
        self.entries
            .get(&fold(label))
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }
}

fn fold(label: &str) -> String {
    label.to_lowercase()
}
