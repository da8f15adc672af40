//! Normalizer — turns one JSON-lines line into a [`Record`](crate::Record).
//!
//! The input format is loosely typed: `chapter` and `class` arrive either as
//! JSON integers or as digit-only strings. Both shapes are coerced to a single
//! `i64` here, at the boundary, so nothing downstream has to care which one the
//! producer emitted.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::config::IngestConfig;
use crate::error::{IngestError, MalformedReason, Result};
use crate::types::{BatchTags, Chapter, Record};

/// Optional sign followed by ASCII digits. Checked after trimming.
static INTEGER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern must compile"));

const INTEGER_EXPECTED: &str = "integer or digit-only string";

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Coerce a JSON integer or an integer-shaped string into an `i64`.
///
/// Floats, booleans, `null`, containers, empty strings, and values outside
/// the `i64` range are rejected.
pub fn coerce_integer(
    value: &Value,
    field: &'static str,
) -> std::result::Result<i64, MalformedReason> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| MalformedReason::InvalidInteger {
            field,
            value: n.to_string(),
        }),
        Value::String(s) => {
            let invalid = || MalformedReason::InvalidInteger {
                field,
                value: s.clone(),
            };
            let trimmed = s.trim();
            if !INTEGER_SHAPE.is_match(trimmed) {
                return Err(invalid());
            }
            trimmed.parse::<i64>().map_err(|_| invalid())
        }
        _ => Err(MalformedReason::WrongType {
            field,
            expected: INTEGER_EXPECTED,
        }),
    }
}

/// Lowercase hex SHA-256 of the trimmed text.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}

fn take_string(
    obj: &mut Map<String, Value>,
    field: &'static str,
) -> std::result::Result<String, MalformedReason> {
    match obj.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(MalformedReason::WrongType {
            field,
            expected: "string",
        }),
        None => Err(MalformedReason::MissingField(field)),
    }
}

fn take_optional_string(
    obj: &mut Map<String, Value>,
    field: &'static str,
) -> std::result::Result<Option<String>, MalformedReason> {
    match obj.remove(field) {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(MalformedReason::WrongType {
            field,
            expected: "string",
        }),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Stateless per-line transform. Holds only the batch tags and the id policy.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tags: BatchTags,
    generate_missing_ids: bool,
}

impl Normalizer {
    pub fn new(config: &IngestConfig, tags: BatchTags) -> Self {
        Self {
            tags,
            generate_missing_ids: config.generate_missing_ids,
        }
    }

    pub fn tags(&self) -> &BatchTags {
        &self.tags
    }

    /// Parse and normalise one raw line. `line_no` is 1-based and only used
    /// for error reporting.
    pub fn normalize_line(&self, line: &str, line_no: usize) -> Result<Record> {
        let malformed = |reason: MalformedReason| IngestError::MalformedRecord {
            line: line_no,
            reason,
        };
        let value: Value = serde_json::from_str(line)
            .map_err(|e| malformed(MalformedReason::InvalidJson(e.to_string())))?;
        self.normalize_value(value).map_err(malformed)
    }

    /// Normalise an already-decoded JSON value.
    pub fn normalize_value(&self, value: Value) -> std::result::Result<Record, MalformedReason> {
        let Value::Object(mut obj) = value else {
            return Err(MalformedReason::NotAnObject);
        };

        let id = match obj.remove("id") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::String(_) | Value::Null) | None if self.generate_missing_ids => None,
            Some(Value::String(_) | Value::Null) | None => {
                return Err(MalformedReason::MissingField("id"))
            }
            Some(_) => {
                return Err(MalformedReason::WrongType {
                    field: "id",
                    expected: "string",
                })
            }
        };

        let chapter = match obj.remove("chapter") {
            Some(v) => Chapter(coerce_integer(&v, "chapter")?),
            None => return Err(MalformedReason::MissingField("chapter")),
        };
        let title = take_string(&mut obj, "title")?;
        let text = take_string(&mut obj, "text")?;

        let class = match obj.remove("class") {
            Some(v) => Some(coerce_integer(&v, "class")?),
            None => self.tags.class,
        };
        let subject =
            take_optional_string(&mut obj, "subject")?.or_else(|| self.tags.subject.clone());
        let language =
            take_optional_string(&mut obj, "language")?.or_else(|| self.tags.language.clone());

        // Always recomputed from the text; a stale input hash is dropped.
        obj.remove("hash");
        let hash = content_hash(&text);

        let id = id.unwrap_or_else(|| derive_id(class, subject.as_deref(), chapter, &hash));

        Ok(Record {
            id,
            chapter,
            title,
            text,
            class,
            subject,
            language,
            hash,
            extra: obj.into_iter().collect::<BTreeMap<_, _>>(),
        })
    }
}

/// `{class}_{subject}_{chapter}_{hash8}`; absent parts render empty.
fn derive_id(class: Option<i64>, subject: Option<&str>, chapter: Chapter, hash: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        class.map(|c| c.to_string()).unwrap_or_default(),
        subject.unwrap_or_default().trim(),
        chapter,
        &hash[..8]
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
