//! Leaf and combinator checkers.
//!
//! Every checker here tags the node it visits with an expectation before it
//! looks at the node's kind, so a mismatched value still gets a useful hover.

use contour_diagnostics::{DiagnosticCollector, Severity};
use contour_tree::{Expectation, NodeKind};
use regex::Regex;

use crate::checker::Checker;
use crate::error::{CheckErrorKind, SchemaError};

/// Accept every value.
pub fn any() -> Checker {
    Checker::new(|node, _| node.set_expectation(vec![Expectation::any()]))
}

fn kind_of(expectation: Expectation, kind: NodeKind) -> Checker {
    Checker::new(move |node, ctx| {
        node.set_expectation(vec![expectation.clone()]);
        if node.kind() != kind {
            ctx.report(CheckErrorKind::type_mismatch(kind.name(), node.kind()), node);
        }
    })
}

pub fn boolean() -> Checker {
    kind_of(Expectation::boolean(), NodeKind::Boolean)
}

pub fn number() -> Checker {
    kind_of(Expectation::number(), NodeKind::Number)
}

pub fn string() -> Checker {
    kind_of(Expectation::string(), NodeKind::String)
}

/// A string from a closed set of values.
pub fn literal<I, S>(values: I) -> Checker
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let pool: Vec<String> = values.into_iter().map(Into::into).collect();
    Checker::new(move |node, ctx| {
        node.set_expectation(vec![Expectation::string().with_pool(pool.clone())]);
        match node.as_str() {
            None => ctx.report(CheckErrorKind::type_mismatch("string", node.kind()), node),
            Some(value) if !pool.iter().any(|p| p == value) => ctx.report(
                CheckErrorKind::UnexpectedValue {
                    value: value.to_string(),
                    allowed: pool.clone(),
                },
                node,
            ),
            Some(_) => {}
        }
    })
}

/// A string matching a regular expression.
///
/// The expression is unanchored, as with [`Regex::is_match`].
pub fn pattern(re: &str) -> Result<Checker, SchemaError> {
    let regex = Regex::new(re).map_err(|source| SchemaError::InvalidPattern {
        pattern: re.to_string(),
        source,
    })?;
    Ok(Checker::new(move |node, ctx| {
        node.set_expectation(vec![Expectation::string()]);
        match node.as_str() {
            None => ctx.report(CheckErrorKind::type_mismatch("string", node.kind()), node),
            Some(value) if !regex.is_match(value) => ctx.report(
                CheckErrorKind::PatternMismatch {
                    value: value.to_string(),
                    pattern: regex.as_str().to_string(),
                },
                node,
            ),
            Some(_) => {}
        }
    }))
}

/// An array whose items all satisfy `item`.
pub fn list_of(item: Checker) -> Checker {
    Checker::new(move |node, ctx| {
        let items = if ctx.allows_expectation() {
            item.expectation(ctx)
        } else {
            None
        };
        node.set_expectation(vec![Expectation::array().with_items(items)]);

        let Some(children) = node.as_array() else {
            ctx.report(CheckErrorKind::type_mismatch("array", node.kind()), node);
            return;
        };
        for child in children {
            item.check(child, ctx);
        }
    })
}

/// The first alternative that accepts the node.
///
/// Each alternative is tried against a private collector. The first one with
/// no error-severity findings wins; if none does, the one with the fewest
/// errors wins. Only the winner's findings reach the real sink. The node's
/// expectation is the union of every alternative's.
pub fn any_of(alternatives: Vec<Checker>) -> Checker {
    Checker::new(move |node, ctx| {
        let mut described: Vec<Option<Vec<Expectation>>> = Vec::with_capacity(alternatives.len());
        let mut best: Option<(usize, usize)> = None;

        for (index, alternative) in alternatives.iter().enumerate() {
            let trial = DiagnosticCollector::new();
            alternative.check(node, &ctx.with_sink(&trial));
            described.push(node.expectation());

            let errors = trial.count_at(Severity::Error);
            if best.is_none_or(|(_, fewest)| errors < fewest) {
                best = Some((index, errors));
            }
            if errors == 0 {
                break;
            }
        }

        let Some((chosen, errors)) = best else {
            return;
        };
        tracing::trace!(chosen, errors, path = ctx.path(), "any_of selected alternative");

        // Trials left annotations behind; only the winner's should remain.
        node.clear_annotations();
        alternatives[chosen].check(node, ctx);

        let mut union = Vec::new();
        for (index, alternative) in alternatives.iter().enumerate() {
            let expectation = if index == chosen {
                node.expectation()
            } else {
                match described.get(index) {
                    Some(tried) => tried.clone(),
                    None => alternative.expectation(ctx),
                }
            };
            union.extend(expectation.into_iter().flatten());
        }
        node.set_expectation(union);
    })
}

/// A checker looked up by name in the context's registry at check time.
pub fn reference(name: impl Into<String>) -> Checker {
    let name = name.into();
    Checker::new(move |node, ctx| match ctx.registry().resolve(&name) {
        Some(checker) => checker.check(node, ctx),
        None => ctx.report(
            CheckErrorKind::UnresolvedReference { name: name.clone() },
            node,
        ),
    })
}

/// Run `checker` with the documentation path replaced by `path`.
pub fn as_doc_path(path: impl Into<String>, checker: Checker) -> Checker {
    let path = path.into();
    Checker::new(move |node, ctx| checker.check(node, &ctx.with_doc_path(path.as_str())))
}
