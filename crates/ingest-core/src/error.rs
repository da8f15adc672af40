//! Error types shared by every layer of the pipeline.

use std::path::PathBuf;

/// Why a single input line was rejected.
///
/// Carried inside [`IngestError::MalformedRecord`] together with the line
/// number, so the ingestor can decide per line whether to abort or skip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("line is not a JSON object")]
    NotAnObject,
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' has wrong type: expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field '{field}' is not an integer: {value}")]
    InvalidInteger { field: &'static str, value: String },
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: MalformedReason },

    /// Raised once at the end of an `abort` run that saw malformed lines.
    #[error("invalid JSONL input: {count} malformed line(s), first at line {line}: {reason}")]
    InvalidBatch {
        count: usize,
        line: usize,
        reason: MalformedReason,
    },

    #[error("invalid --{tag} value: {value:?}")]
    InvalidTag { tag: &'static str, value: String },

    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read input stream")]
    Read(#[source] std::io::Error),

    #[error("failed to serialize record")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
