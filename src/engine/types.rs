//! Engine types
//!
//! Run statistics and the first-page probe result.

use serde::Serialize;
use std::fmt;

/// Statistics from a sync operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Pages fetched and decoded
    pub pages_fetched: usize,
    /// Records handed to the sink
    pub records_emitted: usize,
    /// Records that could not be projected
    pub records_skipped: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add an emitted record
    pub fn add_emitted(&mut self) {
        self.records_emitted += 1;
    }

    /// Add a skipped record
    pub fn add_skipped(&mut self) {
        self.records_skipped += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

impl fmt::Display for SyncStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records emitted, {} skipped, {} pages in {}ms",
            self.records_emitted, self.records_skipped, self.pages_fetched, self.duration_ms
        )
    }
}

/// First-page probe result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProbe {
    /// Record count reported by the API
    pub count: i64,
    /// Records actually present on the page
    pub records: usize,
    /// Whether another page would be requested
    pub has_more: bool,
}
