//! Node type registry, placement rules, and schema validation for
//! property-grid documents.
//!
//! A property-grid document is a tree of [`propgrid_dom::Value`]s rooted at
//! an `Adapter` node. This crate decides which trees are legal:
//! - [`NodeDef`]/[`AttributeDef`]: static definitions of node kinds, their
//!   placement predicates, and their typed attribute schemas
//! - [`NodeRegistry`]: process-wide table of registered node kinds,
//!   populated once at startup and read-only thereafter
//! - [`builtins`]: the standard node roster (Adapter, Row, Label,
//!   PropertyEditor, and the editor kinds derived from it)
//! - [`check_placement`]/[`check_attribute`]: pure validation over the
//!   registry
//! - [`DocumentTree`]: schema-checked mutation of a document, rejecting
//!   illegal operations without touching the tree
//!
//! # Lifecycle
//!
//! Registration is a fixed startup sequence: build a [`NodeRegistry`]
//! (usually via [`NodeRegistry::with_builtins`]), optionally publish it with
//! [`init_global`], then stop mutating it. After that phase the registry is
//! immutable and safe to read from any thread without locking. Document
//! trees themselves are not thread-safe; each editing session owns its tree
//! and serializes access.

pub mod builtins;
mod def;
mod error;
mod registry;
mod tree;
mod validate;

pub use def::{AttributeDef, AttributeType, NodeDef, PlacementPredicate};
pub use error::{PlacementError, RegistryError, SchemaError, TreeError};
pub use registry::{NodeEntry, NodeRegistry, global, init_global};
pub use tree::{DocumentTree, DomPath};
pub use validate::{UnknownAttributePolicy, check_attribute, check_placement};
