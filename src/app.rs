//! Application wiring: configuration, logging, and one ingestion run.

use anyhow::Context;
use ingest_core::export::{CountingSink, JsonlSink};
use ingest_core::ingestor::open_input;
use ingest_core::{BatchTags, Config, IngestSummary, Ingestor, MalformedPolicy};

use crate::cli::Cli;

/// Load the layered configuration, honouring `--config`.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    Config::load(cli.config.as_deref()).context("failed to load configuration")
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `--debug`, which wins over `log.filter` from config.
pub fn init_tracing(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let fallback = if cli.debug { "debug" } else { config.log.filter.as_str() };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}

/// Run one ingestion batch as described by `cli`.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<IngestSummary> {
    let tags = BatchTags::from_flags(
        cli.class.as_deref(),
        cli.subject.as_deref(),
        cli.language.as_deref(),
    )?;

    let mut ingest_config = config.ingest.clone();
    if cli.skip_malformed {
        ingest_config.on_malformed = MalformedPolicy::Skip;
    }
    let ingestor = Ingestor::new(&ingest_config, tags);

    tracing::info!(
        input = %cli.input.display(),
        policy = ?ingestor.policy(),
        "starting ingestion pipeline"
    );

    // Open the input before creating any output so a missing file leaves
    // nothing behind.
    let reader = open_input(&cli.input)?;
    let summary = match &cli.output {
        Some(path) => {
            let mut sink = JsonlSink::create(path)?;
            tracing::info!(output = %sink.target().display(), "writing normalized records");
            ingestor.ingest_reader(reader, &mut sink)
        }
        None => {
            let mut sink = CountingSink::default();
            ingestor.ingest_reader(reader, &mut sink)
        }
    }
    .with_context(|| format!("failed to ingest {}", cli.input.display()))?;

    Ok(summary)
}
