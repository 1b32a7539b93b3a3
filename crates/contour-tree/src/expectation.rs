//! Expectation metadata attached to nodes during checking
//!
//! An expectation describes what a schema accepts at a position in the tree.
//! It exists for documentation and editor tooling (hover, and the data a
//! completion provider would consume). It never feeds back into validation.

use serde::{Deserialize, Serialize};

/// Broad type of an expectation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectationKind {
    Any,
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

/// One accepted type at a position in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    pub kind: ExpectationKind,

    /// Human-readable type label shown in hovers (e.g. `Object`, `String`)
    pub typedoc: String,

    /// Declared fields, for objects with a fixed set of keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldExpectation>>,

    /// Expectation for the keys themselves, for objects with dynamic keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<Expectation>>,

    /// Expectation for each item, for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Expectation>>,

    /// Accepted literal values, for closed string sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<Vec<String>>,
}

/// A declared field of an object expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldExpectation {
    pub key: String,

    /// What the field's value accepts. `None` when the field's checker did
    /// not describe itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Expectation>>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Expectation {
    pub fn new(kind: ExpectationKind, typedoc: impl Into<String>) -> Self {
        Self {
            kind,
            typedoc: typedoc.into(),
            fields: None,
            keys: None,
            items: None,
            pool: None,
        }
    }

    pub fn any() -> Self {
        Self::new(ExpectationKind::Any, "Any")
    }

    pub fn object() -> Self {
        Self::new(ExpectationKind::Object, "Object")
    }

    pub fn array() -> Self {
        Self::new(ExpectationKind::Array, "Array")
    }

    pub fn string() -> Self {
        Self::new(ExpectationKind::String, "String")
    }

    pub fn number() -> Self {
        Self::new(ExpectationKind::Number, "Number")
    }

    pub fn boolean() -> Self {
        Self::new(ExpectationKind::Boolean, "Boolean")
    }

    pub fn null() -> Self {
        Self::new(ExpectationKind::Null, "null")
    }

    pub fn with_fields(mut self, fields: Vec<FieldExpectation>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_keys(mut self, keys: Option<Vec<Expectation>>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_items(mut self, items: Option<Vec<Expectation>>) -> Self {
        self.items = items;
        self
    }

    pub fn with_pool(mut self, pool: Vec<String>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Look up a declared field by key.
    pub fn field(&self, key: &str) -> Option<&FieldExpectation> {
        self.fields.as_ref()?.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let expectation = Expectation::object().with_fields(vec![
            FieldExpectation {
                key: "a".to_string(),
                value: Some(vec![Expectation::string()]),
                optional: false,
                deprecated: false,
            },
            FieldExpectation {
                key: "b".to_string(),
                value: None,
                optional: true,
                deprecated: true,
            },
        ]);

        assert_eq!(expectation.field("a").unwrap().value.as_ref().unwrap()[0].typedoc, "String");
        assert!(expectation.field("b").unwrap().deprecated);
        assert!(expectation.field("c").is_none());
        assert!(Expectation::string().field("a").is_none());
    }

    #[test]
    fn test_serialization_skips_empty_parts() {
        let json = serde_json::to_value(Expectation::boolean()).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "boolean", "typedoc": "Boolean"}));

        let field = FieldExpectation {
            key: "x".to_string(),
            value: None,
            optional: true,
            deprecated: false,
        };
        let json = serde_json::to_value(field).unwrap();
        assert_eq!(json, serde_json::json!({"key": "x", "optional": true}));
    }
}
