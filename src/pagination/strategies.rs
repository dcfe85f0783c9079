//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};
use crate::model::PageEnvelope;

/// Query parameter carrying the continuation token
pub const CONTINUATION_TOKEN_PARAM: &str = "continuationToken";

// ============================================================================
// Continuation Token Pagination
// ============================================================================

/// Continuation-token pagination
///
/// The first request carries no token. Each page returns `hasNextPage` and
/// `nextPageToken`; the token is echoed back on the next request under the
/// `continuationToken` query parameter.
///
/// Pagination stops when the page reports no further pages, or when it
/// reports more pages without issuing a token. The second case is a normal
/// end of data, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuationTokenPaginator;

impl Paginator for ContinuationTokenPaginator {
    fn request_token<'a>(&self, state: &'a PaginationState) -> Option<&'a str> {
        state.cursor.as_deref()
    }

    fn process_response(&self, page: &PageEnvelope, state: &mut PaginationState) -> NextPage {
        match page.continuation() {
            Some(token) => {
                state.set_cursor(token.to_string());
                NextPage::with_token(token)
            }
            None => NextPage::Done,
        }
    }
}
