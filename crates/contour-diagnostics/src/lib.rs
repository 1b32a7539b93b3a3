//! Diagnostics and message lookup for contour.
//!
//! This crate defines the two external collaborators the checking engine
//! talks to while it walks a document:
//!
//! - a **diagnostic sink** ([`DiagnosticSink`]) receiving positioned
//!   [`Diagnostic`] values, with [`DiagnosticCollector`] as the standard
//!   in-memory implementation;
//! - a **message catalog** ([`MessageCatalog`]) mapping message keys to
//!   localized templates.
//!
//! # Example
//!
//! ```
//! use contour_diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, Severity};
//! use contour_tree::TextRange;
//!
//! let sink = DiagnosticCollector::new();
//! sink.report(
//!     Diagnostic::new("Unknown property \"c\"", TextRange::new(10, 13))
//!         .with_severity(Severity::Warning),
//! );
//!
//! assert_eq!(sink.len(), 1);
//! assert!(!sink.has_errors());
//! ```

pub mod catalog;
pub mod diagnostic;
pub mod sink;

pub use catalog::{CatalogError, MessageCatalog, quote};
pub use diagnostic::{Diagnostic, DiagnosticTag, Severity};
pub use sink::{DiagnosticCollector, DiagnosticSink, DiscardSink};
