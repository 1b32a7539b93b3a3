//! Core diagnostic types.
//!
//! Severities and tags match the LSP numbering so a language server can map
//! them one to one.

use std::collections::BTreeSet;
use std::fmt;

use contour_tree::{LineIndex, TextRange};
use serde::{Deserialize, Serialize};

/// Diagnostic severity levels, matching LSP DiagnosticSeverity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reports an error.
    #[default]
    Error = 1,
    /// Reports a warning.
    Warning = 2,
    /// Reports an information.
    Information = 3,
    /// Reports a hint.
    Hint = 4,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "info",
            Severity::Hint => "hint",
        })
    }
}

/// Extra rendering hints for a diagnostic, matching LSP DiagnosticTag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticTag {
    /// Unused or unnecessary code (rendered faded).
    Unnecessary = 1,
    /// Deprecated or obsolete code (rendered struck through).
    Deprecated = 2,
}

/// A positioned diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The range at which the diagnostic applies.
    pub range: TextRange,

    /// The rendered, human-readable message.
    pub message: String,

    pub severity: Severity,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<DiagnosticTag>,

    /// Stable code for the kind of problem (e.g. "C-1-2").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn new(message: impl Into<String>, anchor: impl Into<TextRange>) -> Self {
        Self {
            range: anchor.into(),
            message: message.into(),
            severity: Severity::default(),
            tags: BTreeSet::new(),
            code: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_tag(mut self, tag: DiagnosticTag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render as a single line: `severity[code] position: message`.
    ///
    /// With a [`LineIndex`] the position is a 1-based `line:column`; without
    /// one (or if the offset does not map) it is the raw byte range.
    pub fn to_text(&self, index: Option<&LineIndex>) -> String {
        let code = self
            .code
            .as_ref()
            .map(|c| format!("[{c}]"))
            .unwrap_or_default();
        let position = index
            .and_then(|index| index.location(self.range.start))
            .map_or_else(
                || format!("{}..{}", self.range.start, self.range.end),
                |loc| format!("{}:{}", loc.row + 1, loc.column + 1),
            );
        format!("{}{} {}: {}", self.severity, code, position, self.message)
    }
}
