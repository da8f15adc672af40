//! Test builders — ergonomic constructors for input lines and input files.
//!
//! These builders are designed for readability in tests, not for production
//! use. They panic on invalid input rather than returning `Result`.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// LineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one JSON-lines input object.
///
/// # Example
///
/// ```rust
/// let line = LineBuilder::new("c1")
///     .chapter("3")
///     .field("textbook", "ncert")
///     .build();
/// ```
pub struct LineBuilder {
    fields: Map<String, Value>,
}

impl LineBuilder {
    /// Starts from a complete record: `chapter` 1, title `T`, text `x`.
    pub fn new(id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), json!(id));
        fields.insert("chapter".into(), json!(1));
        fields.insert("title".into(), json!("T"));
        fields.insert("text".into(), json!("x"));
        Self { fields }
    }

    pub fn chapter(self, chapter: impl Into<Value>) -> Self {
        self.field("chapter", chapter)
    }

    pub fn text(self, text: &str) -> Self {
        self.field("text", text)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> String {
        Value::Object(self.fields).to_string()
    }
}

// ---------------------------------------------------------------------------
// Input files
// ---------------------------------------------------------------------------

/// Write `lines` as a newline-terminated JSON-lines file inside `dir`.
pub fn write_jsonl<S: AsRef<str>>(dir: &Path, name: &str, lines: &[S]) -> PathBuf {
    let path = dir.join(name);
    let mut body = String::new();
    for line in lines {
        body.push_str(line.as_ref());
        body.push('\n');
    }
    std::fs::write(&path, body).expect("write test input");
    path
}
