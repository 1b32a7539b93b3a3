//! # contour-check
//!
//! Declarative schema checking for JSON-like trees.
//!
//! Schemas are built from small combinators that all produce a [`Checker`]:
//!
//! - leaf checkers ([`string`], [`number`], [`literal`], [`pattern`], ...);
//! - the structural object checker ([`record`], [`object`],
//!   [`object_with_keys`]) with per-property flags from [`opt`] and
//!   [`deprecated`];
//! - variant resolvers choosing a record from a sibling value ([`dispatch`]
//!   with [`pick`] or [`when`]) or from which marker key is present
//!   ([`having`], joined to a schema with [`resolve`]).
//!
//! Running a checker reports positioned diagnostics and annotates the tree
//! with expectation and hover metadata for editor tooling.
//!
//! ## Example
//!
//! ```rust
//! use contour_check::{Properties, Validator, number, opt, record, string};
//! use contour_tree::{JsonNode, KeyNode, ObjectEntry, TextRange};
//!
//! let schema = record(
//!     Properties::new()
//!         .with("name", string())
//!         .with("weight", opt(number())),
//! );
//!
//! // {"nme": "x"}
//! let document = JsonNode::object(
//!     TextRange::new(0, 12),
//!     vec![ObjectEntry::new(
//!         KeyNode::new("nme", TextRange::new(1, 6)),
//!         JsonNode::string("x", TextRange::new(8, 11)),
//!     )],
//! );
//!
//! let output = Validator::new().validate(&document, &schema, "item");
//! let messages: Vec<_> = output.diagnostics.iter().map(|d| d.message.as_str()).collect();
//! assert_eq!(messages, ["Missing property \"name\"", "Unknown property \"nme\""]);
//! ```

pub mod checker;
pub mod config;
pub mod context;
pub mod docs;
pub mod error;
pub mod hover;
pub mod object;
pub mod primitives;
pub mod property;
pub mod registry;
pub mod validator;
pub mod variant;

pub use checker::Checker;
pub use config::{CheckerConfig, ConfigError};
pub use context::CheckerContext;
pub use docs::{CatalogDocumentation, Documentation, NoDocumentation};
pub use error::{CheckErrorKind, SchemaError};
pub use hover::format_hover;
pub use object::{any_object, object, object_with_keys, record};
pub use primitives::{
    any, any_of, as_doc_path, boolean, list_of, literal, number, pattern, reference, string,
};
pub use property::{FlaggedProperty, Properties, PropertySpec, deprecated, opt};
pub use registry::SchemaRegistry;
pub use validator::{ValidationOutput, Validator, validate};
pub use variant::{
    Branch, Cases, DEFAULT_NAMESPACE, Markers, dispatch, extract, having, pick, resolve,
    strip_namespace, when,
};
