//! Execution engine module
//!
//! Main read loop: fetch a page, project and emit its records, follow the
//! continuation token.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SyncEngine` - Drives a page source to exhaustion into a record sink
//! - `SyncStats` - Counters reported at the end of a run
//! - `PageProbe` - First-page summary used by `check`
//!
//! Pages are strictly sequential. A fetch or write failure aborts the run;
//! anything already emitted stays emitted. A record that cannot be projected
//! is logged and skipped.

mod types;

pub use types::{PageProbe, SyncStats};

use crate::error::Result;
use crate::http::PageSource;
use crate::mapping::RecordMapper;
use crate::model::PageEnvelope;
use crate::output::RecordSink;
use crate::pagination::{NextPage, PaginationState, Paginator};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sync engine for orchestrating data extraction
#[derive(Debug, Default)]
pub struct SyncEngine {
    /// Statistics
    stats: SyncStats,
}

impl SyncEngine {
    /// Create a new sync engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Get statistics
    ///
    /// After an aborted run these cover everything emitted before the
    /// failure.
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Run the job until the source is exhausted
    pub async fn run(
        &mut self,
        source: &dyn PageSource,
        paginator: &dyn Paginator,
        mapper: &dyn RecordMapper,
        sink: &mut dyn RecordSink,
    ) -> Result<SyncStats> {
        let start = Instant::now();
        info!("Starting sync");

        let result = self.sync_pages(source, paginator, mapper, sink).await;

        #[allow(clippy::cast_possible_truncation)]
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        match result {
            Ok(()) => {
                info!("Completed sync: {}", self.stats);
                Ok(self.stats.clone())
            }
            Err(e) => {
                info!("Sync aborted: {}", self.stats);
                Err(e)
            }
        }
    }

    async fn sync_pages(
        &mut self,
        source: &dyn PageSource,
        paginator: &dyn Paginator,
        mapper: &dyn RecordMapper,
        sink: &mut dyn RecordSink,
    ) -> Result<()> {
        let mut pagination_state = PaginationState::new();

        loop {
            let page = source
                .fetch_page(paginator.request_token(&pagination_state))
                .await?;
            self.stats.add_page();

            info!(
                "Page {}: fetched {} records",
                self.stats.pages_fetched,
                page.data.len()
            );
            if page.count != page.data.len() as i64 {
                debug!(
                    "Page {} reports count {} but carries {} records",
                    self.stats.pages_fetched,
                    page.count,
                    page.data.len()
                );
            }

            self.emit_page(&page, mapper, sink)?;

            match paginator.process_response(&page, &mut pagination_state) {
                NextPage::Continue { token } => {
                    debug!("Continuing with token {}", token);
                }
                NextPage::Done => {
                    if page.has_next_page {
                        debug!("Page claims more data but issued no token, stopping");
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Project and emit every record of a page, in page order
    fn emit_page(
        &mut self,
        page: &PageEnvelope,
        mapper: &dyn RecordMapper,
        sink: &mut dyn RecordSink,
    ) -> Result<()> {
        for record in page.records() {
            let emitted = record.and_then(|record| sink.emit(&mapper.map(&record)));
            match emitted {
                Ok(()) => self.stats.add_emitted(),
                Err(e) if !e.is_fatal() => {
                    warn!("Skipping record: {}", e);
                    self.stats.add_skipped();
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Fetch the first page only and summarize it
    pub async fn probe(&mut self, source: &dyn PageSource) -> Result<PageProbe> {
        let page = source.fetch_page(None).await?;
        self.stats.add_page();

        Ok(PageProbe {
            count: page.count,
            records: page.data.len(),
            has_more: page.continuation().is_some(),
        })
    }
}
