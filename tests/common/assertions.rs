//! Domain-specific assertion macros for ingest_pipeline harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which record invariant was violated.

use ingest_core::{IngestError, MalformedReason, Record};

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a `Record` carries the expected canonical chapter.
///
/// ```rust
/// assert_chapter!(record, 3);
/// ```
#[macro_export]
macro_rules! assert_chapter {
    ($record:expr, $chapter:expr) => {{
        let record: &ingest_core::Record = &$record;
        let expected = ingest_core::Chapter($chapter);
        if record.chapter != expected {
            panic!(
                "assert_chapter! failed for id {:?}:\n  expected: {}\n  actual:   {}",
                record.id, expected, record.chapter
            );
        }
    }};
}

/// Assert that a `Record` preserved an unrecognised input key.
#[macro_export]
macro_rules! assert_extra {
    ($record:expr, $key:expr, $value:expr) => {{
        let record: &ingest_core::Record = &$record;
        let key: &str = $key;
        let expected = serde_json::json!($value);
        match record.extra.get(key) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_extra! failed:\n  record.extra[{:?}]\n  expected: {}\n  actual:   {}",
                key, expected, actual
            ),
            None => panic!(
                "assert_extra! failed: key {:?} not found.\n  Available: {:?}",
                key,
                record.extra.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Error assertions
// ---------------------------------------------------------------------------

/// Unwrap a `MalformedRecord` error, panicking with the actual error
/// otherwise. Returns `(line, reason)`.
pub fn expect_malformed<T: std::fmt::Debug>(
    result: Result<T, IngestError>,
) -> (usize, MalformedReason) {
    match result {
        Err(IngestError::MalformedRecord { line, reason }) => (line, reason),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

/// Assert the invariants every normalised record must satisfy.
pub fn assert_record_invariants(record: &Record) {
    assert!(!record.id.trim().is_empty(), "record id must be non-empty: {record:?}");
    assert_eq!(
        record.hash,
        ingest_core::normalizer::content_hash(&record.text),
        "record hash must match its text: {:?}",
        record.id
    );
    for key in ["id", "chapter", "title", "text", "class", "subject", "language", "hash"] {
        assert!(
            !record.extra.contains_key(key),
            "known key {key:?} leaked into extra for {:?}",
            record.id
        );
    }
}
