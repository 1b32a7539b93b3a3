//! # contour-tree
//!
//! Tree-shaped documents with source location tracking.
//!
//! This crate provides [`JsonNode`], a JSON-like value where every node knows
//! the byte range it was parsed from. Object members are kept as an ordered
//! list of [`ObjectEntry`] values so duplicate and partially written members
//! (a key without a value, a value without a key) survive into validation.
//!
//! Nodes also carry two annotation slots that a checker fills in while it
//! walks the tree:
//!
//! - the **expectation** slot on every node ([`Expectation`]), describing the
//!   types the schema accepts at that position;
//! - the **hover** slot on every object key ([`KeyNode`]), holding rendered
//!   documentation for editor tooling.
//!
//! Both slots use interior mutability, so a checker only ever needs a shared
//! borrow of the tree.
//!
//! This crate contains no parser. Producers build trees with the constructors
//! on [`JsonNode`].
//!
//! ## Example
//!
//! ```rust
//! use contour_tree::{JsonNode, KeyNode, ObjectEntry, TextRange};
//!
//! // {"a": true}
//! let root = JsonNode::object(
//!     TextRange::new(0, 11),
//!     vec![ObjectEntry::new(
//!         KeyNode::new("a", TextRange::new(1, 4)),
//!         JsonNode::boolean(true, TextRange::new(6, 10)),
//!     )],
//! );
//!
//! assert_eq!(root.get("a").and_then(JsonNode::as_bool), Some(true));
//! ```

mod expectation;
mod node;
mod query;
mod range;

pub use expectation::{Expectation, ExpectationKind, FieldExpectation};
pub use node::{JsonNode, KeyNode, NodeKind, NodeValue, ObjectEntry};
pub use range::{LineIndex, Location, TextRange};
