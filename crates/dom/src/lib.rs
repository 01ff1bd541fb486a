//! Generic hierarchical value model for property-grid documents.
//!
//! This crate provides the value representation the model layer operates on:
//! - [`Value`]: tagged union over scalars, callback tokens, and nodes
//! - [`Node`]: a typed tree node with ordered attributes and children
//! - [`ValueKind`]: the discriminant, used by schema validation
//! - [`CallbackId`]: opaque handle for handler-valued attributes
//!
//! The dom layer is deliberately untyped with respect to node semantics:
//! which node names exist, where they may be placed, and which attributes
//! they accept is the model layer's concern. Persistence of trees is an
//! external collaborator's concern and not defined here.

mod node;
mod value;

pub use node::Node;
pub use value::{CallbackId, Value, ValueKind};
