//! Pagination module
//!
//! Supports: continuation token
//!
//! # Overview
//!
//! A paginator decides, from each decoded page, whether another page should
//! be requested and with which continuation token. The engine owns the
//! [`PaginationState`]; paginators only read and update it.

mod strategies;
mod types;

pub use strategies::{ContinuationTokenPaginator, CONTINUATION_TOKEN_PARAM};
pub use types::{NextPage, PaginationState, Paginator};
