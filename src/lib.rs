// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]

//! # acco-sync
//!
//! Pulls lodging businesses from a paginated listing API and re-emits each
//! one as an accommodation record in the catalog's schema.
//!
//! ## Features
//!
//! - **Continuation-token pagination**: follows `nextPageToken` until the
//!   API reports no more data
//! - **Per-record fault isolation**: a malformed record is logged and
//!   skipped, the run carries on
//! - **Environment configuration**: base URL, method, subscription key and
//!   arbitrary headers from env vars or a `.env` file
//! - **Streaming output**: one JSON document per record on stdout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acco_sync::config::JobConfig;
//! use acco_sync::output::{JsonWriter, OutputFormat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> acco_sync::Result<()> {
//!     let config = JobConfig::from_env(None)?;
//!     let mut writer = JsonWriter::new(std::io::stdout(), OutputFormat::Pretty);
//!     let stats = acco_sync::cli::sync(&config, &mut writer).await?;
//!     eprintln!("{stats}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   page N    ┌─────────────┐  record  ┌──────────┐  doc  ┌────────┐
//! │ PageSource │ ──────────▶ │ SyncEngine  │ ───────▶ │  Mapper  │ ────▶ │  Sink  │
//! │  (HTTP)    │ ◀────────── │ + Paginator │          └──────────┘       └────────┘
//! └────────────┘   token     └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Source and target record shapes
pub mod model;

/// Response decoding
pub mod decode;

/// Source → target projection
pub mod mapping;

/// Pagination strategies
pub mod pagination;

/// Single-attempt HTTP client and page fetcher
pub mod http;

/// Main execution engine
pub mod engine;

/// JSON document output
pub mod output;

/// Environment-driven job configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::JobConfig;
pub use engine::{SyncEngine, SyncStats};
pub use model::{Accommodation, PageEnvelope, SourceRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
