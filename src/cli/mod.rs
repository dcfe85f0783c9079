//! CLI module
//!
//! Command-line interface for running the sync job.
//!
//! # Commands
//!
//! - `sync` - Fetch all pages and emit accommodation documents (default)
//! - `check` - Fetch the first page and report what came back

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{check, sync, Runner};
