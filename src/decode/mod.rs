//! Response decoder module
//!
//! # Overview
//!
//! Decodes listing API response bodies into page envelopes, and provides the
//! lenient field deserializers the source model relies on to tolerate sparse
//! records.

mod decoders;
pub(crate) mod lenient;

pub use decoders::decode_page;
