//! The checker abstraction.

use std::fmt;
use std::sync::Arc;

use contour_tree::{Expectation, JsonNode, TextRange};

use crate::context::CheckerContext;

type CheckFn = dyn Fn(&JsonNode, &CheckerContext<'_>) + Send + Sync;

/// A validation routine over one node.
///
/// A checker never returns a result. It reports findings through the
/// context's sink and writes annotations (expectation, hover) into the node.
/// Checkers are cheap to clone and can be shared between schemas.
#[derive(Clone)]
pub struct Checker {
    inner: Arc<CheckFn>,
}

impl Checker {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&JsonNode, &CheckerContext<'_>) + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn check(&self, node: &JsonNode, ctx: &CheckerContext<'_>) {
        (self.inner)(node, ctx)
    }

    /// Describe what this checker accepts without validating anything.
    ///
    /// Runs the checker on a placeholder null node under a probing context
    /// (one level deeper, findings discarded) and returns whatever
    /// expectation it left on the placeholder.
    pub fn expectation(&self, ctx: &CheckerContext<'_>) -> Option<Vec<Expectation>> {
        let placeholder = JsonNode::null(TextRange::default());
        self.check(&placeholder, &ctx.probe());
        placeholder.expectation()
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckErrorKind;
    use crate::validator::Validator;
    use contour_diagnostics::DiagnosticCollector;

    #[test]
    fn test_expectation_discards_findings() {
        let checker = Checker::new(|node, ctx| {
            node.set_expectation(vec![Expectation::string()]);
            ctx.report(CheckErrorKind::type_mismatch("string", node.kind()), node);
        });

        let validator = Validator::new();
        let sink = DiagnosticCollector::new();
        let ctx = validator.context(&sink, "");

        let expectation = checker.expectation(&ctx).unwrap();
        assert_eq!(expectation, vec![Expectation::string()]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_expectation_none_when_checker_is_silent() {
        let checker = Checker::new(|_, _| {});
        let validator = Validator::new();
        let sink = DiagnosticCollector::new();

        assert!(checker.expectation(&validator.context(&sink, "")).is_none());
    }
}
