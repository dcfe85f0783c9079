//! Output module
//!
//! Emits mapped accommodations as JSON documents.
//!
//! # Overview
//!
//! This module provides:
//! - The [`RecordSink`] seam the sync engine writes through
//! - A [`JsonWriter`] producing pretty or compact documents, one per record

mod writer;

pub use writer::{JsonWriter, OutputFormat, RecordSink};
