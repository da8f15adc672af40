//! Ingestor — drives the normalizer over a JSON-lines input.
//!
//! Reads the input line by line, skips blank lines, rejects duplicate ids,
//! and applies the configured [`MalformedPolicy`] to every line the
//! normalizer refuses. Accepted records go to a [`RecordSink`] in input order.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{IngestConfig, MalformedPolicy};
use crate::error::{IngestError, MalformedReason, Result};
use crate::export::RecordSink;
use crate::normalizer::Normalizer;
use crate::types::{BatchTags, IngestSummary, Record};

const BOM: char = '\u{feff}';

/// Open an input file for reading. Fails before any record is processed.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    Ok(BufReader::new(file))
}

#[derive(Debug, Clone)]
pub struct Ingestor {
    normalizer: Normalizer,
    policy: MalformedPolicy,
}

impl Ingestor {
    pub fn new(config: &IngestConfig, tags: BatchTags) -> Self {
        Self {
            normalizer: Normalizer::new(config, tags),
            policy: config.on_malformed,
        }
    }

    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Open `path` and ingest it into `sink`.
    pub fn ingest_path<S: RecordSink + ?Sized>(
        &self,
        path: &Path,
        sink: &mut S,
    ) -> Result<IngestSummary> {
        info!(path = %path.display(), "reading input");
        let reader = open_input(path)?;
        self.ingest_reader(reader, sink)
    }

    /// Ingest every line of `reader` into `sink`.
    ///
    /// Under [`MalformedPolicy::Abort`] every line is still examined so all
    /// problems are logged, but nothing reaches the sink after the first bad
    /// line and the run ends in [`IngestError::InvalidBatch`]. `finish` is
    /// only called on the sink when the run succeeds.
    pub fn ingest_reader<R: BufRead, S: RecordSink + ?Sized>(
        &self,
        reader: R,
        sink: &mut S,
    ) -> Result<IngestSummary> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut ingested = 0usize;
        let mut skipped = 0usize;
        let mut failures = 0usize;
        let mut first_failure: Option<(usize, MalformedReason)> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(IngestError::Read)?;
            let raw = if line_no == 1 {
                line.trim_start_matches(BOM)
            } else {
                line.as_str()
            };
            if raw.trim().is_empty() {
                continue;
            }

            match self.accept_line(raw, line_no, &mut seen) {
                Ok(record) => {
                    if first_failure.is_none() {
                        debug!(
                            line = line_no,
                            id = %record.id,
                            chapter = %record.chapter,
                            "record accepted"
                        );
                        sink.accept(record)?;
                        ingested += 1;
                    }
                }
                Err(IngestError::MalformedRecord { line, reason }) => {
                    warn!(line, %reason, "malformed record");
                    match self.policy {
                        MalformedPolicy::Skip => skipped += 1,
                        MalformedPolicy::Abort => {
                            failures += 1;
                            first_failure.get_or_insert((line, reason));
                        }
                    }
                }
                Err(other) => return Err(other),
            }
        }

        if let Some((line, reason)) = first_failure {
            return Err(IngestError::InvalidBatch {
                count: failures,
                line,
                reason,
            });
        }

        sink.finish()?;
        info!(ingested, skipped, "ingestion complete");

        Ok(IngestSummary {
            ingested,
            skipped,
            collection: self.normalizer.tags().collection_name(),
        })
    }

    fn accept_line(
        &self,
        raw: &str,
        line_no: usize,
        seen: &mut HashSet<String>,
    ) -> Result<Record> {
        let record = self.normalizer.normalize_line(raw, line_no)?;
        if !seen.insert(record.id.clone()) {
            return Err(IngestError::MalformedRecord {
                line: line_no,
                reason: MalformedReason::DuplicateId(record.id),
            });
        }
        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
