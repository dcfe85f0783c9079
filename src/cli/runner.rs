//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::JobConfig;
use crate::engine::{PageProbe, SyncEngine, SyncStats};
use crate::error::Result;
use crate::http::PageFetcher;
use crate::mapping::AccommodationMapper;
use crate::output::{JsonWriter, RecordSink};
use crate::pagination::ContinuationTokenPaginator;
use std::io::{self, Write};
use crate::types::Method;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = JobConfig::from_env(self.cli.env_file.as_deref())?;
        if config.method != Method::GET {
            warn!("HTTP_METHOD={} is ignored, pages are fetched with GET", config.method);
        }
        info!(
            "Source: GET {}://{}{}",
            config.base_url.scheme(),
            config.base_url.host_str().unwrap_or_default(),
            config.base_url.path()
        );

        match self.cli.command() {
            Commands::Sync => {
                let mut writer = JsonWriter::new(io::stdout(), self.cli.format);
                sync(&config, &mut writer).await?;
            }
            Commands::Check => {
                let probe = check(&config).await?;
                let mut stdout = io::stdout();
                serde_json::to_writer(&mut stdout, &probe)?;
                writeln!(stdout)?;
            }
        }
        Ok(())
    }
}

/// Run the full job against `config`, emitting into `sink`
pub async fn sync(config: &JobConfig, sink: &mut dyn RecordSink) -> Result<SyncStats> {
    let fetcher = PageFetcher::from_config(config)?;
    let mapper = AccommodationMapper::with_categories(config.categories.clone());

    SyncEngine::new()
        .run(&fetcher, &ContinuationTokenPaginator, &mapper, sink)
        .await
}

/// Fetch only the first page and summarize it
pub async fn check(config: &JobConfig) -> Result<PageProbe> {
    let fetcher = PageFetcher::from_config(config)?;
    let probe = SyncEngine::new().probe(&fetcher).await?;

    info!(
        "Check succeeded: count {}, {} records on first page, more pages: {}",
        probe.count, probe.records, probe.has_more
    );
    Ok(probe)
}
