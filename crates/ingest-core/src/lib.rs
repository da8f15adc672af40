//! ingest-core — core library for the `ingest_pipeline` tool.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! input.jsonl ──► Ingestor ──► Normalizer ──► RecordSink
//!                    │                            │
//!                    └────── IngestSummary ◄──────┘
//! ```
//!
//! Everything runs synchronously on the calling thread, one line at a time.
//! The sink is the hand-off point to whatever consumes records downstream.

pub mod config;
pub mod error;
pub mod export;
pub mod ingestor;
pub mod normalizer;
pub mod types;

pub use config::{Config, IngestConfig, MalformedPolicy};
pub use error::{IngestError, MalformedReason, Result};
pub use export::{CountingSink, JsonlSink, MemorySink, RecordSink};
pub use ingestor::Ingestor;
pub use normalizer::Normalizer;
pub use types::{BatchTags, Chapter, IngestSummary, Record};
