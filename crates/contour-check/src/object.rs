//! Structural object checker.
//!
//! Validates an object node against one of three shapes:
//!
//! - **any**: every object is accepted as is;
//! - **fixed keys**: a declared list of keys with a spec per key. Missing,
//!   unknown and deprecated keys are reported, and every known key gets a
//!   hover;
//! - **dynamic keys**: a checker for the keys themselves plus a spec per key
//!   for the values.
//!
//! Whatever the shape, the node's expectation is tagged as an object first,
//! so hovers work even when the node turns out not to be an object.

use std::collections::HashSet;
use std::sync::Arc;

use contour_tree::{Expectation, FieldExpectation, JsonNode, ObjectEntry, TextRange};

use crate::checker::Checker;
use crate::context::CheckerContext;
use crate::error::CheckErrorKind;
use crate::hover::format_hover;
use crate::primitives::any;
use crate::property::{Properties, PropertySpec};

type PropertyFn = Arc<dyn Fn(&str) -> PropertySpec + Send + Sync>;

enum ObjectShape {
    Any,
    Fixed { keys: Vec<String>, values: PropertyFn },
    Dynamic { keys: Checker, values: PropertyFn },
}

/// Accept any object.
pub fn any_object() -> Checker {
    object_checker(ObjectShape::Any)
}

/// Object with a fixed set of keys. `values` is consulted for declared keys
/// only.
pub fn object<K, S, F>(keys: K, values: F) -> Checker
where
    K: IntoIterator<Item = S>,
    S: Into<String>,
    F: Fn(&str) -> PropertySpec + Send + Sync + 'static,
{
    object_checker(ObjectShape::Fixed {
        keys: keys.into_iter().map(Into::into).collect(),
        values: Arc::new(values),
    })
}

/// Object whose keys are validated by a checker rather than declared.
pub fn object_with_keys<F>(keys: Checker, values: F) -> Checker
where
    F: Fn(&str) -> PropertySpec + Send + Sync + 'static,
{
    object_checker(ObjectShape::Dynamic {
        keys,
        values: Arc::new(values),
    })
}

/// Object with the keys and specs of a property record.
pub fn record(properties: Properties) -> Checker {
    let keys: Vec<String> = properties.keys().map(str::to_string).collect();
    object(keys, move |key| {
        properties
            .get(key)
            .cloned()
            .unwrap_or_else(|| PropertySpec::from(any()))
    })
}

fn object_checker(shape: ObjectShape) -> Checker {
    Checker::new(move |node, ctx| check_object(&shape, node, ctx))
}

fn check_object(shape: &ObjectShape, node: &JsonNode, ctx: &CheckerContext<'_>) {
    node.set_expectation(vec![describe(shape, ctx)]);

    let Some(entries) = node.as_object() else {
        ctx.report(CheckErrorKind::type_mismatch("object", node.kind()), node);
        return;
    };

    match shape {
        ObjectShape::Any => {}
        ObjectShape::Fixed { keys, values } => check_fixed(keys, values, node, entries, ctx),
        ObjectShape::Dynamic { keys, values } => check_dynamic(keys, values, entries, ctx),
    }
}

fn describe(shape: &ObjectShape, ctx: &CheckerContext<'_>) -> Expectation {
    let expectation = Expectation::object();
    if !ctx.allows_expectation() {
        return expectation;
    }
    match shape {
        ObjectShape::Any => expectation,
        ObjectShape::Fixed { keys, values } => {
            let fields = keys
                .iter()
                .map(|key| {
                    let spec = values(key);
                    FieldExpectation {
                        key: key.clone(),
                        value: spec.checker().expectation(ctx),
                        optional: spec.may_be_absent(),
                        deprecated: spec.is_deprecated(),
                    }
                })
                .collect();
            expectation.with_fields(fields)
        }
        ObjectShape::Dynamic { keys, .. } => expectation.with_keys(keys.expectation(ctx)),
    }
}

fn check_fixed(
    keys: &[String],
    values: &PropertyFn,
    node: &JsonNode,
    entries: &[ObjectEntry],
    ctx: &CheckerContext<'_>,
) {
    let given: HashSet<&str> = entries.iter().filter_map(ObjectEntry::key_str).collect();
    let declared: HashSet<&str> = keys.iter().map(String::as_str).collect();

    for key in keys {
        if given.contains(key.as_str()) || values(key).may_be_absent() {
            continue;
        }
        ctx.report(
            CheckErrorKind::MissingProperty {
                property: key.clone(),
            },
            node.range.first_char(),
        );
    }

    for entry in entries {
        let Some(key) = &entry.key else {
            continue;
        };
        if !declared.contains(key.value.as_str()) {
            ctx.report(
                CheckErrorKind::UnknownProperty {
                    property: key.value.clone(),
                },
                key,
            );
            continue;
        }

        let spec = values(&key.value);
        if spec.is_deprecated() {
            ctx.report(
                CheckErrorKind::DeprecatedProperty {
                    property: key.value.clone(),
                },
                key,
            );
        }

        let child_ctx = match spec.doc_path() {
            Some(segment) => ctx.descend(segment),
            None => ctx.clone(),
        }
        .descend(&key.value);

        let placeholder;
        let value = match &entry.value {
            Some(value) => value,
            None => {
                placeholder = JsonNode::null(TextRange::point(key.range.end));
                &placeholder
            }
        };
        spec.checker().check(value, &child_ctx);

        key.set_hover(format_hover(
            ctx.config(),
            child_ctx.path(),
            &value.expectation_labels(),
            child_ctx.documentation().as_deref(),
        ));
    }
}

fn check_dynamic(
    keys: &Checker,
    values: &PropertyFn,
    entries: &[ObjectEntry],
    ctx: &CheckerContext<'_>,
) {
    for entry in entries {
        let Some(key) = &entry.key else {
            continue;
        };
        keys.check(&key.to_string_node(), ctx);
        if let Some(value) = &entry.value {
            values(&key.value).checker().check(value, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{boolean, number, string};
    use crate::property::{deprecated, opt};
    use crate::validator::Validator;
    use contour_diagnostics::{Diagnostic, DiagnosticCollector, Severity};
    use contour_tree::{KeyNode, NodeKind};

    fn entry(key: &str, start: usize, value: JsonNode) -> ObjectEntry {
        ObjectEntry::new(KeyNode::new(key, TextRange::new(start, start + key.len() + 2)), value)
    }

    fn run(checker: &Checker, node: &JsonNode) -> Vec<Diagnostic> {
        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        checker.check(node, &validator.context(&sink, ""));
        sink.into_diagnostics()
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().filter_map(|d| d.code.as_deref()).collect()
    }

    // ==================== Shape tests ====================

    #[test]
    fn test_non_object_is_type_mismatch() {
        let checker = record(Properties::new().with("a", string()));
        let node = JsonNode::string("x", TextRange::new(0, 3));

        let diagnostics = run(&checker, &node);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected object, got string");
        assert_eq!(diagnostics[0].range, TextRange::new(0, 3));

        // Expectation is still set for hover purposes
        assert_eq!(node.expectation_labels(), vec!["Object"]);
    }

    #[test]
    fn test_any_object_accepts_anything_inside() {
        let node = JsonNode::object(
            TextRange::new(0, 20),
            vec![entry("whatever", 1, JsonNode::null(TextRange::new(13, 17)))],
        );
        assert!(run(&any_object(), &node).is_empty());
        assert_eq!(node.kind(), NodeKind::Object);
    }

    // ==================== Fixed key tests ====================

    #[test]
    fn test_missing_before_unknown() {
        let checker = record(
            Properties::new()
                .with("a", string())
                .with("b", string())
                .with("c", opt(string())),
        );
        // {"z": "v"}
        let node = JsonNode::object(
            TextRange::new(0, 10),
            vec![entry("z", 1, JsonNode::string("v", TextRange::new(6, 9)))],
        );

        let diagnostics = run(&checker, &node);
        assert_eq!(codes(&diagnostics), vec!["C-1-2", "C-1-2", "C-1-3"]);
        assert_eq!(diagnostics[0].message, "Missing property \"a\"");
        assert_eq!(diagnostics[1].message, "Missing property \"b\"");
        assert_eq!(diagnostics[0].range, TextRange::new(0, 1));
        assert_eq!(diagnostics[2].severity, Severity::Warning);
        assert_eq!(diagnostics[2].range, TextRange::new(1, 4));
    }

    #[test]
    fn test_unknown_reported_per_occurrence() {
        let checker = record(Properties::new());
        let node = JsonNode::object(
            TextRange::new(0, 30),
            vec![
                entry("x", 1, JsonNode::number(1.0, TextRange::new(6, 7))),
                entry("x", 9, JsonNode::number(2.0, TextRange::new(14, 15))),
            ],
        );

        let diagnostics = run(&checker, &node);
        assert_eq!(codes(&diagnostics), vec!["C-1-3", "C-1-3"]);
        assert_eq!(diagnostics[1].range, TextRange::new(9, 12));
    }

    #[test]
    fn test_deprecated_used_is_hint_only() {
        let checker = record(Properties::new().with("old", deprecated(boolean())));
        let node = JsonNode::object(
            TextRange::new(0, 15),
            vec![entry("old", 1, JsonNode::boolean(true, TextRange::new(8, 12)))],
        );

        let diagnostics = run(&checker, &node);
        assert_eq!(codes(&diagnostics), vec!["C-1-4"]);
        assert_eq!(diagnostics[0].severity, Severity::Hint);

        let empty = JsonNode::object(TextRange::new(0, 2), vec![]);
        assert!(run(&checker, &empty).is_empty());
    }

    #[test]
    fn test_value_checked_with_extended_path() {
        let checker = record(Properties::new().with("n", number()));
        let node = JsonNode::object(
            TextRange::new(0, 12),
            vec![entry("n", 1, JsonNode::string("x", TextRange::new(6, 9)))],
        );

        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        checker.check(&node, &validator.context(&sink, "root"));

        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected number, got string");

        let hover = node.as_object().unwrap()[0].key.as_ref().unwrap().hover().unwrap();
        assert_eq!(hover, "```typescript\nroot.n: Number\n```");
    }

    #[test]
    fn test_key_without_value_is_checked_as_null() {
        let checker = record(Properties::new().with("a", string()));
        let node = JsonNode::object(
            TextRange::new(0, 6),
            vec![ObjectEntry::key_only(KeyNode::new("a", TextRange::new(1, 4)))],
        );

        let diagnostics = run(&checker, &node);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected string, got null");
        assert_eq!(diagnostics[0].range, TextRange::point(4));
    }

    #[test]
    fn test_doc_path_override_prefixes_key() {
        let checker = record(
            Properties::new().with("x", PropertySpec::from(string()).with_doc_path("foo")),
        );
        let node = JsonNode::object(
            TextRange::new(0, 12),
            vec![entry("x", 1, JsonNode::string("v", TextRange::new(6, 9)))],
        );
        run(&checker, &node);

        let hover = node.as_object().unwrap()[0].key.as_ref().unwrap().hover().unwrap();
        assert_eq!(hover, "```typescript\nfoo.x: String\n```");
    }

    #[test]
    fn test_object_with_key_function() {
        let checker = object(["a", "b"], |key| match key {
            "a" => string().into(),
            _ => opt(number()),
        });
        let node = JsonNode::object(TextRange::new(0, 2), vec![]);

        let diagnostics = run(&checker, &node);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Missing property \"a\"");
    }

    // ==================== Expectation tests ====================

    #[test]
    fn test_fields_described_at_root_depth() {
        let checker = record(
            Properties::new()
                .with("a", string())
                .with("b", opt(number()))
                .with("c", deprecated(boolean())),
        );
        let node = JsonNode::object(TextRange::new(0, 2), vec![]);
        run(&checker, &node);

        let expectation = node.expectation().unwrap();
        let fields = expectation[0].fields.as_ref().unwrap();
        let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(!fields[0].optional);
        assert!(fields[1].optional);
        assert!(fields[2].optional && fields[2].deprecated);
        assert_eq!(fields[0].value, Some(vec![Expectation::string()]));
    }

    #[test]
    fn test_nested_fields_stop_at_depth_guard() {
        let inner = record(Properties::new().with("deep", string()));
        let checker = record(Properties::new().with("inner", inner));
        let node = JsonNode::object(TextRange::new(0, 2), vec![]);
        run(&checker, &node);

        let expectation = node.expectation().unwrap();
        let inner = expectation[0].field("inner").unwrap().value.as_ref().unwrap();
        assert_eq!(inner[0].typedoc, "Object");
        assert!(inner[0].fields.is_none());
    }

    #[test]
    fn test_dynamic_keys() {
        let checker = object_with_keys(string(), |_| boolean().into());
        let node = JsonNode::object(
            TextRange::new(0, 20),
            vec![
                entry("x", 1, JsonNode::boolean(true, TextRange::new(6, 10))),
                entry("y", 12, JsonNode::number(1.0, TextRange::new(17, 18))),
            ],
        );

        let diagnostics = run(&checker, &node);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, TextRange::new(17, 18));

        let expectation = node.expectation().unwrap();
        assert_eq!(expectation[0].keys, Some(vec![Expectation::string()]));
    }
}
