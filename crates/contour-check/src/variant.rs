//! Variant resolvers.
//!
//! These pick the property record that applies to an object, either from the
//! value of a sibling key ([`dispatch`] with [`pick`] or [`when`]) or from
//! which of several marker keys is present ([`having`]). The chosen record is
//! then handed to [`record`](crate::object::record), so missing, unknown and
//! deprecated analysis is the same however the schema was chosen.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use contour_tree::{Expectation, JsonNode, ObjectEntry};
use indexmap::IndexMap;

use crate::checker::Checker;
use crate::context::CheckerContext;
use crate::error::CheckErrorKind;
use crate::property::{Properties, opt};

/// Namespace assumed for unqualified identifiers.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Strip `namespace:` from the front of `value`, if present.
pub fn strip_namespace<'v>(value: &'v str, namespace: &str) -> &'v str {
    value
        .strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(value)
}

/// The string value of the first member named `key`.
///
/// `None` when there is no such member, when it has no value, or when the
/// value is not a string.
pub fn extract<'n>(key: &str, children: &'n [ObjectEntry]) -> Option<&'n str> {
    children
        .iter()
        .find(|entry| entry.key_str() == Some(key))
        .and_then(|entry| entry.value.as_ref())
        .and_then(JsonNode::as_str)
}

/// Choose a checker from the value of the discriminant key `key`.
///
/// The discriminant itself is validated only by the selected schema.
pub fn dispatch<F>(key: impl Into<String>, selector: F) -> Checker
where
    F: Fn(Option<&str>, &[ObjectEntry]) -> Checker + Send + Sync + 'static,
{
    let key = key.into();
    Checker::new(move |node, ctx| {
        let Some(children) = node.as_object() else {
            node.set_expectation(vec![Expectation::object()]);
            ctx.report(CheckErrorKind::type_mismatch("object", node.kind()), node);
            return;
        };
        let value = extract(&key, children);
        tracing::trace!(
            key = %key,
            value = ?value,
            path = ctx.path(),
            "dispatching on discriminant"
        );
        selector(value, children).check(node, ctx);
    })
}

/// Build a checker from the node being checked.
///
/// This is how node-dependent resolvers such as [`having`] join a schema:
/// `resolve(move |node, ctx| record(having(node, ctx, &markers)))`.
pub fn resolve<F>(f: F) -> Checker
where
    F: Fn(&JsonNode, &CheckerContext<'_>) -> Checker + Send + Sync + 'static,
{
    Checker::new(move |node, ctx| f(node, ctx).check(node, ctx))
}

/// Property records keyed by discriminant value.
#[derive(Debug, Clone)]
pub struct Cases {
    namespace: Option<String>,
    cases: IndexMap<String, Properties>,
}

impl Default for Cases {
    fn default() -> Self {
        Self {
            namespace: Some(DEFAULT_NAMESPACE.to_string()),
            cases: IndexMap::new(),
        }
    }
}

impl Cases {
    /// Cases whose discriminant may carry the default namespace prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cases matched on the raw discriminant value.
    pub fn without_namespace() -> Self {
        Self {
            namespace: None,
            cases: IndexMap::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn case(mut self, name: impl Into<String>, properties: Properties) -> Self {
        self.cases.insert(name.into(), properties);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    fn normalize<'v>(&self, value: &'v str) -> &'v str {
        match &self.namespace {
            Some(namespace) => strip_namespace(value, namespace),
            None => value,
        }
    }

    /// The case and its name for a discriminant value.
    pub fn get<'c>(&'c self, value: &str) -> Option<(&'c str, &'c Properties)> {
        self.cases
            .get_key_value(self.normalize(value))
            .map(|(name, properties)| (name.as_str(), properties))
    }
}

/// The properties of the case named by `value`.
///
/// Each returned property documents itself under the case name. An absent
/// or unrecognized value gives an empty record.
pub fn pick(value: Option<&str>, cases: &Cases) -> Properties {
    let Some((name, properties)) = value.and_then(|value| cases.get(value)) else {
        return Properties::new();
    };
    properties
        .clone()
        .map_specs(|spec| spec.with_doc_path(name))
}

/// `if_match` when `value` is one of `allowed`, `if_not` otherwise.
///
/// Both sides are compared without the default namespace prefix. An absent
/// value gives an empty record.
pub fn when(
    value: Option<&str>,
    allowed: &[&str],
    if_match: Properties,
    if_not: Properties,
) -> Properties {
    let Some(value) = value else {
        return Properties::new();
    };
    let value = strip_namespace(value, DEFAULT_NAMESPACE);
    if allowed
        .iter()
        .any(|candidate| strip_namespace(candidate, DEFAULT_NAMESPACE) == value)
    {
        if_match
    } else {
        if_not
    }
}

/// A variant record, either built up front or on demand.
#[derive(Clone)]
pub enum Branch {
    Ready(Properties),
    Deferred(Arc<dyn Fn() -> Properties + Send + Sync>),
}

impl Branch {
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> Properties + Send + Sync + 'static,
    {
        Branch::Deferred(Arc::new(f))
    }

    pub fn properties(&self) -> Properties {
        match self {
            Branch::Ready(properties) => properties.clone(),
            Branch::Deferred(f) => f(),
        }
    }
}

impl From<Properties> for Branch {
    fn from(properties: Properties) -> Self {
        Branch::Ready(properties)
    }
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Ready(properties) => f.debug_tuple("Ready").field(properties).finish(),
            Branch::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

/// Marker keys and the branch each one selects, in priority order.
#[derive(Debug, Clone, Default)]
pub struct Markers {
    branches: IndexMap<String, Branch>,
}

impl Markers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(mut self, key: impl Into<String>, branch: impl Into<Branch>) -> Self {
        self.branches.insert(key.into(), branch.into());
        self
    }

    pub fn deferred<F>(self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Properties + Send + Sync + 'static,
    {
        self.marker(key, Branch::deferred(f))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.branches.keys().map(String::as_str)
    }
}

/// Select a record by which marker key the object has.
///
/// The first marker, in declaration order, present among the object's keys
/// selects its branch. When none is present one diagnostic naming every
/// marker is reported at the start of the object, and the result is a
/// record of every marker key with its own branch's spec, all optional, so
/// hovers still work and nothing is reported twice.
///
/// A non-object gets the fallback record without a report; the object
/// checker that consumes the record reports the type mismatch.
pub fn having(node: &JsonNode, ctx: &CheckerContext<'_>, markers: &Markers) -> Properties {
    if let Some(children) = node.as_object() {
        let given: HashSet<&str> = children.iter().filter_map(ObjectEntry::key_str).collect();
        if let Some((marker, branch)) = markers
            .branches
            .iter()
            .find(|(marker, _)| given.contains(marker.as_str()))
        {
            tracing::trace!(marker = %marker, path = ctx.path(), "selected variant by marker key");
            return branch.properties();
        }

        ctx.report(
            CheckErrorKind::MissingDiscriminant {
                candidates: markers.keys().map(str::to_string).collect(),
            },
            node.range.first_char(),
        );
    }

    markers
        .branches
        .iter()
        .filter_map(|(marker, branch)| {
            let properties = branch.properties();
            let spec = properties.get(marker)?.clone();
            Some((marker.as_str(), opt(spec)))
        })
        .collect()
}
