//! Per-node checking context.
//!
//! A context is an immutable value. Checkers derive new contexts for their
//! children instead of mutating the one they were given, so siblings always
//! start from the same state.

use std::fmt;

use contour_diagnostics::{DiagnosticSink, DiscardSink, MessageCatalog};
use contour_tree::TextRange;

use crate::config::CheckerConfig;
use crate::error::CheckErrorKind;
use crate::registry::SchemaRegistry;
use crate::validator::Validator;

static DISCARD: DiscardSink = DiscardSink;

/// State handed to every checker.
#[derive(Clone)]
pub struct CheckerContext<'a> {
    validator: &'a Validator,
    sink: &'a dyn DiagnosticSink,
    depth: i32,
    path: String,
}

impl<'a> CheckerContext<'a> {
    pub(crate) fn new(
        validator: &'a Validator,
        sink: &'a dyn DiagnosticSink,
        path: impl Into<String>,
    ) -> Self {
        Self {
            validator,
            sink,
            depth: 0,
            path: path.into(),
        }
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// The dotted documentation path of the node being checked.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn config(&self) -> &'a CheckerConfig {
        self.validator.config()
    }

    pub fn registry(&self) -> &'a SchemaRegistry {
        self.validator.registry()
    }

    pub fn messages(&self) -> &'a MessageCatalog {
        self.validator.messages()
    }

    /// Documentation for the current path.
    pub fn documentation(&self) -> Option<String> {
        self.validator.documentation().lookup(&self.path)
    }

    /// Whether object checkers at this depth still describe their members.
    pub fn allows_expectation(&self) -> bool {
        self.depth <= self.config().expectation_depth
    }

    /// Context for a child, with `segment` appended to the path.
    pub fn descend(&self, segment: &str) -> Self {
        let path = if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        };
        Self {
            path,
            ..self.clone()
        }
    }

    /// Context with the documentation path replaced.
    pub fn with_doc_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    /// Context for describing a checker: one level deeper, findings dropped.
    pub fn probe(&self) -> CheckerContext<'a> {
        Self {
            sink: &DISCARD,
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    /// The same context reporting into another sink.
    pub fn with_sink<'b>(&self, sink: &'b dyn DiagnosticSink) -> CheckerContext<'b>
    where
        'a: 'b,
    {
        CheckerContext {
            validator: self.validator,
            sink,
            depth: self.depth,
            path: self.path.clone(),
        }
    }

    /// Report a finding anchored at `anchor`.
    pub fn report(&self, kind: CheckErrorKind, anchor: impl Into<TextRange>) {
        self.sink
            .report(kind.to_diagnostic(anchor.into(), self.messages()));
    }
}

impl fmt::Debug for CheckerContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerContext")
            .field("depth", &self.depth)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_diagnostics::DiagnosticCollector;

    #[test]
    fn test_descend_builds_dotted_path() {
        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        let root = validator.context(&sink, "");

        let child = root.descend("pools").descend("rolls");
        assert_eq!(child.path(), "pools.rolls");
        assert_eq!(child.depth(), 0);
        assert_eq!(root.path(), "");

        let named = validator.context(&sink, "loot_table").descend("pools");
        assert_eq!(named.path(), "loot_table.pools");
    }

    #[test]
    fn test_probe_is_deeper_and_silent() {
        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        let root = validator.context(&sink, "a");

        let probe = root.probe();
        assert_eq!(probe.depth(), 1);
        assert_eq!(probe.path(), "a");
        assert!(root.allows_expectation());
        assert!(!probe.allows_expectation());

        probe.report(
            CheckErrorKind::MissingProperty {
                property: "x".to_string(),
            },
            TextRange::new(0, 1),
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_report_renders_through_catalog() {
        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        let ctx = validator.context(&sink, "");

        ctx.report(
            CheckErrorKind::UnknownProperty {
                property: "c".to_string(),
            },
            TextRange::new(3, 6),
        );

        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unknown property \"c\"");
        assert_eq!(diagnostics[0].range, TextRange::new(3, 6));
    }

    #[test]
    fn test_with_doc_path_replaces() {
        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        let ctx = validator.context(&sink, "a.b").with_doc_path("shared");
        assert_eq!(ctx.path(), "shared");
    }
}
