//! Diagnostic sinks
//!
//! Checkers report through a shared reference, so sinks use interior
//! mutability. Reports are kept in arrival order; the checking engine is
//! responsible for making that order deterministic.

use std::cell::RefCell;

use crate::diagnostic::{Diagnostic, Severity};

/// Receiver for diagnostics produced during checking.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that drops everything.
///
/// Used when a checker runs only to describe itself, so its findings on a
/// placeholder node never reach the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// In-memory sink accumulating diagnostics in report order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Whether any error-severity diagnostic has been reported.
    pub fn has_errors(&self) -> bool {
        self.count_at(Severity::Error) > 0
    }

    /// Number of diagnostics with exactly the given severity.
    pub fn count_at(&self, severity: Severity) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// A snapshot of the diagnostics reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}
