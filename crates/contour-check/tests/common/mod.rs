//! Shared helpers for integration tests.

#![allow(dead_code)]

use contour_tree::{JsonNode, KeyNode, ObjectEntry, TextRange};
use serde_json::Value;

/// Lay `value` out as compact JSON and build the matching tree.
///
/// Returns the source text alongside the tree so tests can compute offsets
/// with `str::find`. Object members come out in `serde_json::Map` order,
/// which is sorted by key.
pub fn document(value: &Value) -> (String, JsonNode) {
    let mut source = String::new();
    let node = build(value, &mut source);
    (source, node)
}

fn build(value: &Value, out: &mut String) -> JsonNode {
    let start = out.len();
    match value {
        Value::Null => {
            out.push_str("null");
            JsonNode::null(TextRange::new(start, out.len()))
        }
        Value::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
            JsonNode::boolean(*b, TextRange::new(start, out.len()))
        }
        Value::Number(n) => {
            out.push_str(&n.to_string());
            JsonNode::number(n.as_f64().unwrap_or_default(), TextRange::new(start, out.len()))
        }
        Value::String(s) => {
            push_quoted(s, out);
            JsonNode::string(s.clone(), TextRange::new(start, out.len()))
        }
        Value::Array(items) => {
            out.push('[');
            let mut children = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                children.push(build(item, out));
            }
            out.push(']');
            JsonNode::array(TextRange::new(start, out.len()), children)
        }
        Value::Object(map) => {
            out.push('{');
            let mut entries = Vec::with_capacity(map.len());
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let key_start = out.len();
                push_quoted(key, out);
                let key = KeyNode::new(key.clone(), TextRange::new(key_start, out.len()));
                out.push(':');
                entries.push(ObjectEntry::new(key, build(value, out)));
            }
            out.push('}');
            JsonNode::object(TextRange::new(start, out.len()), entries)
        }
    }
}

fn push_quoted(s: &str, out: &mut String) {
    out.push_str(&serde_json::to_string(s).unwrap());
}

/// Byte range of the first occurrence of `needle` in `source`.
pub fn span(source: &str, needle: &str) -> TextRange {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {source:?}"));
    TextRange::new(start, start + needle.len())
}

/// Install a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
