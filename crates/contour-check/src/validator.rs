//! Validation entry point.

use std::fmt;

use contour_diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticSink, MessageCatalog, Severity,
};
use contour_tree::JsonNode;

use crate::checker::Checker;
use crate::config::CheckerConfig;
use crate::context::CheckerContext;
use crate::docs::{Documentation, NoDocumentation};
use crate::registry::SchemaRegistry;

/// Diagnostics produced by one validation pass, in report order.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutput {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationOutput {
    /// True when no error-severity diagnostic was reported. Warnings and
    /// hints do not make a document invalid.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

/// Everything a validation pass shares: schema registry, documentation,
/// messages and configuration.
pub struct Validator {
    registry: SchemaRegistry,
    documentation: Box<dyn Documentation>,
    messages: MessageCatalog,
    config: CheckerConfig,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            registry: SchemaRegistry::new(),
            documentation: Box::new(NoDocumentation),
            messages: MessageCatalog::builtin().clone(),
            config: CheckerConfig::default(),
        }
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: SchemaRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_documentation(mut self, documentation: impl Documentation + 'static) -> Self {
        self.documentation = Box::new(documentation);
        self
    }

    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn documentation(&self) -> &dyn Documentation {
        self.documentation.as_ref()
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// A root context reporting into `sink`, for running checkers directly.
    pub fn context<'a>(
        &'a self,
        sink: &'a dyn DiagnosticSink,
        root_path: &str,
    ) -> CheckerContext<'a> {
        CheckerContext::new(self, sink, root_path)
    }

    /// Check `root` against `checker`, collecting every diagnostic.
    ///
    /// `root_path` prefixes every documentation path, e.g. `loot_table`.
    /// Annotations from a previous pass are cleared first so the result only
    /// depends on the tree and the schema.
    pub fn validate(
        &self,
        root: &JsonNode,
        checker: &Checker,
        root_path: &str,
    ) -> ValidationOutput {
        tracing::debug!(root_path, "validating document");

        root.clear_annotations();
        let sink = DiagnosticCollector::new();
        checker.check(root, &self.context(&sink, root_path));

        let diagnostics = sink.into_diagnostics();
        tracing::debug!(
            root_path,
            diagnostics = diagnostics.len(),
            "validation finished"
        );
        ValidationOutput { diagnostics }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Validate with default settings: no registry, no documentation, built-in
/// messages.
pub fn validate(root: &JsonNode, checker: &Checker) -> ValidationOutput {
    Validator::new().validate(root, checker, "")
}
