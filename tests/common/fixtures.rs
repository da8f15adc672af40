//! Static JSON-lines corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative input lines.

/// The line exercised by the original acceptance test: `chapter` as a string.
pub const STRING_CHAPTER_LINE: &str = r#"{"id":"c1","chapter":"3","title":"T","text":"x"}"#;

/// Well-formed records in the shapes producers actually emit.
pub const CORPUS_VALID: &[&str] = &[
    r#"{"id":"c1","chapter":"3","title":"T","text":"x"}"#,
    r#"{"id":"c2","chapter":3,"title":"Matter","text":"Everything around us is made of matter."}"#,
    r#"{"id":"c3","chapter":" 4 ","title":"Light","text":"Light travels in straight lines.","class":8,"subject":"science","language":"en","textbook":"ncert","tokens":127}"#,
    r#"{"id":"c4","chapter":"+5","title":"Sound","text":"Sound needs a medium.","class":"8"}"#,
    r#"{"id":"c5","chapter":12,"title":"Friction","text":"Friction opposes motion.","subject":"science"}"#,
];

/// One rejected line per failure mode.
pub const CORPUS_MALFORMED: &[&str] = &[
    r#"{"id":"m1","chapter":"three","title":"T","text":"x"}"#,
    r#"{"id":"m2","chapter":3.5,"title":"T","text":"x"}"#,
    r#"{"id":"m3","chapter":null,"title":"T","text":"x"}"#,
    r#"{"id":"m4","title":"T","text":"x"}"#,
    r#"{"chapter":3,"title":"T","text":"x"}"#,
    r#"{"id":"m6","chapter":3,"title":"T"}"#,
    r#"{"id":"m7","chapter":3,"title":7,"text":"x"}"#,
    r#"{"id":"m8","chapter":3,"title":"T","text":"x","class":"eight"}"#,
    r#"["not","an","object"]"#,
    r#"{"id":"m10","chapter":3,"#,
];

/// `count` valid records with alternating chapter shapes, for volume tests.
pub fn corpus_high_volume(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let chapter = if i % 2 == 0 {
                serde_json::json!(i % 15 + 1)
            } else {
                serde_json::json!((i % 15 + 1).to_string())
            };
            serde_json::json!({
                "id": format!("chunk-{i}"),
                "chapter": chapter,
                "title": format!("Section {i}"),
                "text": format!("Body text for section {i}."),
            })
            .to_string()
        })
        .collect()
}
