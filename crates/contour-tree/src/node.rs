//! JSON-like node with source location tracking.

use std::cell::RefCell;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::expectation::Expectation;
use crate::range::TextRange;

/// Type discriminant of a [`JsonNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    /// Lowercase name used in diagnostics ("expected object, got string").
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value carried by a [`JsonNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum NodeValue {
    /// Object members in source order. Duplicates are kept.
    Object(Vec<ObjectEntry>),
    Array(Vec<JsonNode>),
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// A node in a JSON-like tree.
///
/// The `expectation` slot starts empty and is written by checkers. Writing
/// goes through a `RefCell`, so the slot can be filled while the tree is only
/// borrowed. A tree must therefore not be checked from two threads at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonNode {
    #[serde(flatten)]
    pub value: NodeValue,

    pub range: TextRange,

    #[serde(
        skip_serializing_if = "slot_is_empty",
        serialize_with = "serialize_slot"
    )]
    expectation: RefCell<Option<Vec<Expectation>>>,
}

/// An object member: `key: value`.
///
/// Either side may be missing in partially written input (`{"a": }` or
/// `{: 1}`), which is why both are optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonNode>,
}

/// An object key with its own range and a writable hover slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyNode {
    pub value: String,

    pub range: TextRange,

    #[serde(skip_serializing_if = "slot_is_empty", serialize_with = "serialize_slot")]
    hover: RefCell<Option<String>>,
}

fn slot_is_empty<T>(slot: &RefCell<Option<T>>) -> bool {
    slot.borrow().is_none()
}

fn serialize_slot<T: Serialize, S: Serializer>(
    slot: &RefCell<Option<T>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    slot.borrow().serialize(serializer)
}

impl JsonNode {
    pub fn new(value: NodeValue, range: TextRange) -> Self {
        Self {
            value,
            range,
            expectation: RefCell::new(None),
        }
    }

    pub fn object(range: TextRange, entries: Vec<ObjectEntry>) -> Self {
        Self::new(NodeValue::Object(entries), range)
    }

    pub fn array(range: TextRange, items: Vec<JsonNode>) -> Self {
        Self::new(NodeValue::Array(items), range)
    }

    pub fn string(value: impl Into<String>, range: TextRange) -> Self {
        Self::new(NodeValue::String(value.into()), range)
    }

    pub fn number(value: f64, range: TextRange) -> Self {
        Self::new(NodeValue::Number(value), range)
    }

    pub fn boolean(value: bool, range: TextRange) -> Self {
        Self::new(NodeValue::Boolean(value), range)
    }

    pub fn null(range: TextRange) -> Self {
        Self::new(NodeValue::Null, range)
    }

    pub fn kind(&self) -> NodeKind {
        match &self.value {
            NodeValue::Object(_) => NodeKind::Object,
            NodeValue::Array(_) => NodeKind::Array,
            NodeValue::String(_) => NodeKind::String,
            NodeValue::Number(_) => NodeKind::Number,
            NodeValue::Boolean(_) => NodeKind::Boolean,
            NodeValue::Null => NodeKind::Null,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.value, NodeValue::Object(_))
    }

    /// Object members if this is an object.
    pub fn as_object(&self) -> Option<&[ObjectEntry]> {
        match &self.value {
            NodeValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonNode]> {
        match &self.value {
            NodeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            NodeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            NodeValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            NodeValue::Boolean(b) => Some(b),
            _ => None,
        }
    }

    /// Value of the first member with the given key.
    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        self.as_object()?
            .iter()
            .find(|entry| entry.key_str() == Some(key))
            .and_then(|entry| entry.value.as_ref())
    }

    /// A clone of the current expectation, if any checker has set one.
    pub fn expectation(&self) -> Option<Vec<Expectation>> {
        self.expectation.borrow().clone()
    }

    /// Type labels of the current expectation, in order.
    pub fn expectation_labels(&self) -> Vec<String> {
        self.expectation
            .borrow()
            .iter()
            .flatten()
            .map(|e| e.typedoc.clone())
            .collect()
    }

    pub fn set_expectation(&self, expectation: Vec<Expectation>) {
        *self.expectation.borrow_mut() = Some(expectation);
    }

    /// Remove expectation and hover annotations from this node and all
    /// descendants.
    pub fn clear_annotations(&self) {
        self.expectation.borrow_mut().take();
        match &self.value {
            NodeValue::Object(entries) => {
                for entry in entries {
                    if let Some(key) = &entry.key {
                        key.hover.borrow_mut().take();
                    }
                    if let Some(value) = &entry.value {
                        value.clear_annotations();
                    }
                }
            }
            NodeValue::Array(items) => items.iter().for_each(JsonNode::clear_annotations),
            _ => {}
        }
    }
}

impl From<&JsonNode> for TextRange {
    fn from(node: &JsonNode) -> Self {
        node.range
    }
}

impl ObjectEntry {
    pub fn new(key: KeyNode, value: JsonNode) -> Self {
        Self {
            key: Some(key),
            value: Some(value),
        }
    }

    /// A member whose value has not been written yet.
    pub fn key_only(key: KeyNode) -> Self {
        Self {
            key: Some(key),
            value: None,
        }
    }

    pub fn key_str(&self) -> Option<&str> {
        self.key.as_ref().map(|k| k.value.as_str())
    }
}

impl KeyNode {
    pub fn new(value: impl Into<String>, range: TextRange) -> Self {
        Self {
            value: value.into(),
            range,
            hover: RefCell::new(None),
        }
    }

    pub fn hover(&self) -> Option<String> {
        self.hover.borrow().clone()
    }

    pub fn set_hover(&self, hover: impl Into<String>) {
        *self.hover.borrow_mut() = Some(hover.into());
    }

    /// The key as a standalone string node, for checkers that validate keys.
    pub fn to_string_node(&self) -> JsonNode {
        JsonNode::string(self.value.clone(), self.range)
    }
}

impl From<&KeyNode> for TextRange {
    fn from(key: &KeyNode) -> Self {
        key.range
    }
}
