//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the sync engine.

use crate::model::PageEnvelope;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available, request the next one with this token
    Continue {
        /// Continuation token for the next request
        token: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::Continue {
            token: token.into(),
        }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Token for the next request (`None` before the first page)
    pub cursor: Option<String>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Token to send with the next request, if any
    fn request_token<'a>(&self, state: &'a PaginationState) -> Option<&'a str>;

    /// Process a page and determine if there's a next one
    fn process_response(&self, page: &PageEnvelope, state: &mut PaginationState) -> NextPage;
}
