//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ingest_pipeline",
    version,
    about = "Normalise a JSON-lines batch of textbook records"
)]
pub struct Cli {
    /// JSON-lines input, one record per line.
    #[arg(long)]
    pub input: PathBuf,

    /// Grade applied to records without a `class` field.
    #[arg(long = "class")]
    pub class: Option<String>,

    /// Subject applied to records without a `subject` field.
    #[arg(long)]
    pub subject: Option<String>,

    /// Language applied to records without a `language` field.
    #[arg(long)]
    pub language: Option<String>,

    /// Write the normalised records here as JSON-lines.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Extra TOML config layered over the defaults and the user config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log and skip malformed lines instead of failing the run.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Raise the log level to debug.
    #[arg(long)]
    pub debug: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
