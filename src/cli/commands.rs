//! CLI commands and argument parsing

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sync lodging listings into accommodation catalog records
#[derive(Parser, Debug)]
#[command(name = "acco-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Environment file to load instead of ./.env
    #[arg(short, long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, `sync` when none was given
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Sync)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Fetch every page and emit one document per accommodation
    Sync,

    /// Fetch the first page only and report what the API returned
    Check,
}
