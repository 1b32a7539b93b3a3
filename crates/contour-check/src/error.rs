// Error types for schema checking

use contour_diagnostics::{Diagnostic, DiagnosticTag, MessageCatalog, Severity, quote};
use contour_tree::TextRange;
use thiserror::Error;

/// Errors raised while building a schema.
///
/// These are programming errors in the schema definition, not findings about
/// a document, so they surface as `Result`s at construction time.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("property '{0}' is declared twice in the same record")]
    DuplicateProperty(String),
}

/// Structured finding kinds reported while checking a document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CheckErrorKind {
    /// Node is not the structurally required kind
    TypeMismatch { expected: String, got: String },

    /// Required key absent
    MissingProperty { property: String },

    /// Given key not declared by the schema
    UnknownProperty { property: String },

    /// Declared-deprecated key was used
    DeprecatedProperty { property: String },

    /// None of the marker keys of a presence-based variant is present
    MissingDiscriminant { candidates: Vec<String> },

    /// String outside a closed set of values
    UnexpectedValue { value: String, allowed: Vec<String> },

    /// String that does not match a pattern
    PatternMismatch { value: String, pattern: String },

    /// Schema reference with no registered checker
    UnresolvedReference { name: String },
}

impl CheckErrorKind {
    pub fn type_mismatch(expected: impl Into<String>, got: impl ToString) -> Self {
        CheckErrorKind::TypeMismatch {
            expected: expected.into(),
            got: got.to_string(),
        }
    }

    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckErrorKind::TypeMismatch { .. } => "C-1-1",
            CheckErrorKind::MissingProperty { .. } => "C-1-2",
            CheckErrorKind::UnknownProperty { .. } => "C-1-3",
            CheckErrorKind::DeprecatedProperty { .. } => "C-1-4",
            CheckErrorKind::MissingDiscriminant { .. } => "C-1-5",
            CheckErrorKind::UnexpectedValue { .. } => "C-1-6",
            CheckErrorKind::PatternMismatch { .. } => "C-1-7",
            CheckErrorKind::UnresolvedReference { .. } => "C-1-8",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CheckErrorKind::UnknownProperty { .. } => Severity::Warning,
            CheckErrorKind::DeprecatedProperty { .. } => Severity::Hint,
            _ => Severity::Error,
        }
    }

    pub fn tag(&self) -> Option<DiagnosticTag> {
        match self {
            CheckErrorKind::DeprecatedProperty { .. } => Some(DiagnosticTag::Deprecated),
            _ => None,
        }
    }

    /// Format a human-readable message through the catalog
    pub fn message(&self, catalog: &MessageCatalog) -> String {
        match self {
            CheckErrorKind::TypeMismatch { expected, got } => {
                catalog.localize("type.mismatch", &[expected.as_str(), got.as_str()])
            }
            CheckErrorKind::MissingProperty { property } => {
                catalog.localize("property.missing", &[quote(property).as_str()])
            }
            CheckErrorKind::UnknownProperty { property } => {
                catalog.localize("property.unknown", &[quote(property).as_str()])
            }
            CheckErrorKind::DeprecatedProperty { property } => {
                catalog.localize("property.deprecated", &[quote(property).as_str()])
            }
            CheckErrorKind::MissingDiscriminant { candidates } => {
                let quoted: Vec<String> = candidates.iter().map(|c| quote(c)).collect();
                let joined = catalog.join_or(&quoted);
                catalog.localize("property.missing.one_of", &[joined.as_str()])
            }
            CheckErrorKind::UnexpectedValue { value, allowed } => {
                let quoted: Vec<String> = allowed.iter().map(|a| quote(a)).collect();
                let joined = catalog.join_or(&quoted);
                catalog.localize("value.unexpected", &[joined.as_str(), quote(value).as_str()])
            }
            CheckErrorKind::PatternMismatch { value, pattern } => {
                catalog.localize("value.pattern", &[quote(value).as_str(), pattern.as_str()])
            }
            CheckErrorKind::UnresolvedReference { name } => {
                catalog.localize("reference.unresolved", &[quote(name).as_str()])
            }
        }
    }

    /// Build the diagnostic for this finding at `anchor`.
    pub fn to_diagnostic(&self, anchor: TextRange, catalog: &MessageCatalog) -> Diagnostic {
        let diagnostic = Diagnostic::new(self.message(catalog), anchor)
            .with_severity(self.severity())
            .with_code(self.error_code());
        match self.tag() {
            Some(tag) => diagnostic.with_tag(tag),
            None => diagnostic,
        }
    }
}
