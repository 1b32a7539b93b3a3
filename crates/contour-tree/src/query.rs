//! Position queries over annotated trees
//!
//! Editor tooling reads the annotations a checker left behind by source
//! offset: the hover of the key under the cursor, or the expectation of the
//! innermost value under the cursor.

use crate::expectation::Expectation;
use crate::node::{JsonNode, NodeValue};

impl JsonNode {
    /// The innermost node whose range contains `offset`.
    pub fn node_at(&self, offset: usize) -> Option<&JsonNode> {
        if !self.range.contains(offset) {
            return None;
        }
        let child = match &self.value {
            NodeValue::Object(entries) => entries
                .iter()
                .filter_map(|entry| entry.value.as_ref())
                .find_map(|value| value.node_at(offset)),
            NodeValue::Array(items) => items.iter().find_map(|item| item.node_at(offset)),
            _ => None,
        };
        Some(child.unwrap_or(self))
    }

    /// Hover text of the object key under `offset`, searching the whole tree.
    pub fn hover_at(&self, offset: usize) -> Option<String> {
        if !self.range.contains(offset) {
            return None;
        }
        match &self.value {
            NodeValue::Object(entries) => entries.iter().find_map(|entry| {
                if let Some(key) = &entry.key
                    && key.range.contains(offset)
                {
                    return key.hover();
                }
                entry.value.as_ref().and_then(|value| value.hover_at(offset))
            }),
            NodeValue::Array(items) => items.iter().find_map(|item| item.hover_at(offset)),
            _ => None,
        }
    }

    /// Expectation of the innermost node under `offset` that has one.
    pub fn expectation_at(&self, offset: usize) -> Option<Vec<Expectation>> {
        if !self.range.contains(offset) {
            return None;
        }
        let from_child = match &self.value {
            NodeValue::Object(entries) => entries
                .iter()
                .filter_map(|entry| entry.value.as_ref())
                .find_map(|value| value.expectation_at(offset)),
            NodeValue::Array(items) => items.iter().find_map(|item| item.expectation_at(offset)),
            _ => None,
        };
        from_child.or_else(|| self.expectation())
    }
}
