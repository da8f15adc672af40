//! ingest_pipeline — JSON-lines record normalizer.
//!
//! Reads a JSON-lines file of textbook content records, coerces the loosely
//! typed `chapter` field to a canonical integer, and hands accepted records to
//! a downstream sink. The binary in `main.rs` is a thin shell over [`app`];
//! the pipeline layers themselves live in [`ingest_core`] and are re-exported
//! here so integration tests can import them directly.
//!
//! # Architecture
//!
//! ```text
//! Cli ──► app::run ──► Ingestor ──► Normalizer ──► RecordSink
//! ```

pub mod app;
pub mod cli;

pub use ingest_core::{
    config, error, export, ingestor, normalizer, types, BatchTags, Chapter, Config,
    IngestError, IngestSummary, Ingestor, MalformedPolicy, MalformedReason, Record,
};
