//! Core types for ingest-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! normalised [`Record`], its canonical [`Chapter`] number, the per-run
//! [`BatchTags`], and the [`IngestSummary`] reported at the end of a run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{IngestError, Result};
use crate::normalizer::coerce_integer;

/// Canonical chapter number.
///
/// Input may spell a chapter as `3` or `"3"`; both become `Chapter(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Chapter(pub i64);

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalised record produced by the normalizer and handed to a sink.
///
/// Serialises back to a single JSON object: the known fields first, in
/// declaration order, then every other input key in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Opaque identifier, unique within a batch.
    pub id: String,
    pub chapter: Chapter,
    pub title: String,
    /// Body text handed to downstream indexing.
    pub text: String,
    /// Grade number. Taken from the batch tags when the line has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Lowercase hex SHA-256 of the trimmed `text`.
    pub hash: String,
    /// Input keys the pipeline does not interpret (`textbook`, `tokens`, …).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Metadata applied to a whole run via `--class`, `--subject`, `--language`.
///
/// Each tag only fills in a record field the line itself left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchTags {
    pub class: Option<i64>,
    pub subject: Option<String>,
    pub language: Option<String>,
}

impl BatchTags {
    /// Build tags from raw flag values. `class` follows the same integer
    /// coercion as record fields.
    pub fn from_flags(
        class: Option<&str>,
        subject: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self> {
        let class = class
            .map(|raw| {
                coerce_integer(&serde_json::Value::String(raw.to_string()), "class").map_err(
                    |_| IngestError::InvalidTag {
                        tag: "class",
                        value: raw.to_string(),
                    },
                )
            })
            .transpose()?;

        Ok(Self {
            class,
            subject: subject.map(str::to_string),
            language: language.map(str::to_string),
        })
    }

    /// Downstream collection name, e.g. `class_8_social_science_en`.
    ///
    /// `None` unless all three tags are set.
    pub fn collection_name(&self) -> Option<String> {
        let class = self.class?;
        let subject = self.subject.as_deref()?;
        let language = self.language.as_deref()?;
        Some(format!(
            "class_{}_{}_{}",
            class,
            subject.trim().to_lowercase().replace(' ', "_"),
            language.trim().to_lowercase()
        ))
    }
}

/// Outcome of a successful run. Printed by the binary as one JSON line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub ingested: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}
