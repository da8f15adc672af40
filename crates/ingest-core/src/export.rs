//! Export — the hand-off point between the ingestor and downstream consumers.
//!
//! A [`RecordSink`] receives each accepted [`Record`] in input order. The
//! embedding/indexing stages live outside this workspace; the sinks here only
//! collect, count, or persist the normalised stream.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::types::Record;

/// Downstream consumer of normalised records.
pub trait RecordSink {
    fn accept(&mut self, record: Record) -> Result<()>;

    /// Called once after the last record of a successful run.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory sinks
// ---------------------------------------------------------------------------

/// Keeps every record. Used by library callers and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<Record>,
}

impl MemorySink {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn accept(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        Ok(())
    }
}

/// Drops records, keeping only a count.
#[derive(Debug, Default)]
pub struct CountingSink {
    count: usize,
}

impl CountingSink {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl RecordSink for CountingSink {
    fn accept(&mut self, _record: Record) -> Result<()> {
        self.count += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonlSink
// ---------------------------------------------------------------------------

/// Writes one compact JSON object per record.
///
/// Output goes to `<target>.partial` and is renamed over `target` by
/// [`RecordSink::finish`]. Dropping the sink before `finish` deletes the
/// partial file, so a failed run never leaves half an output behind.
#[derive(Debug)]
pub struct JsonlSink {
    target: PathBuf,
    partial: PathBuf,
    writer: Option<BufWriter<File>>,
    finished: bool,
}

impl JsonlSink {
    pub fn create(target: impl AsRef<Path>) -> Result<Self> {
        let target = target.as_ref().to_path_buf();
        let partial = partial_path(&target);
        let file = File::create(&partial).map_err(|e| IngestError::io(&partial, e))?;
        tracing::debug!(path = %partial.display(), "opened output");
        Ok(Self {
            target,
            partial,
            writer: Some(BufWriter::new(file)),
            finished: false,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl RecordSink for JsonlSink {
    fn accept(&mut self, record: Record) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            IngestError::io(
                &self.target,
                std::io::Error::other("output already finished"),
            )
        })?;
        serde_json::to_writer(&mut *writer, &record)?;
        writer
            .write_all(b"\n")
            .map_err(|e| IngestError::io(&self.partial, e))
    }

    fn finish(&mut self) -> Result<()> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        writer.flush().map_err(|e| IngestError::io(&self.partial, e))?;
        drop(writer);
        std::fs::rename(&self.partial, &self.target)
            .map_err(|e| IngestError::io(&self.target, e))?;
        self.finished = true;
        tracing::debug!(path = %self.target.display(), "output committed");
        Ok(())
    }
}

impl Drop for JsonlSink {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        self.writer.take();
        if let Err(e) = std::fs::remove_file(&self.partial) {
            tracing::warn!(
                path = %self.partial.display(),
                error = %e,
                "failed to remove partial output"
            );
        }
    }
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name: OsString = target.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
