use propgrid_dom::ValueKind;
use thiserror::Error;

use crate::def::AttributeType;
use crate::tree::DomPath;

/// Errors from registry population.
///
/// Registration happens during a fixed startup sequence, so these are
/// programmer errors; [`builtins::install`](crate::builtins::install) callers
/// and [`NodeRegistry::with_builtins`](crate::NodeRegistry::with_builtins)
/// treat them as fatal. The raw operations still surface them as typed
/// results for hosts that embed the registry behind their own reflection
/// layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// A node type with this name is already registered.
	#[error("duplicate node type registration: {0}")]
	DuplicateNode(&'static str),
	/// The attribute is already declared on this node type.
	#[error("duplicate attribute {attribute:?} on node type {node}")]
	DuplicateAttribute {
		/// The owning node type name.
		node: &'static str,
		/// The colliding attribute name.
		attribute: &'static str,
	},
	/// The named node type (or a required base) is not registered.
	#[error("unknown node type: {0}")]
	UnknownNode(&'static str),
}

/// Errors from the symmetric placement check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
	/// The prospective parent is not a node value.
	#[error("placement parent is not a node")]
	NotANode,
	/// A node value names a type the registry does not know.
	#[error("unknown node type: {0}")]
	UnknownType(String),
	/// One or both placement predicates rejected the pairing.
	#[error("{child} may not be placed under {parent}")]
	IllegalPlacement {
		/// The prospective parent's node type name.
		parent: String,
		/// The child's node type name, or its value kind for scalars.
		child: String,
	},
}

/// Errors from attribute schema validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
	/// The node names a type the registry does not know.
	#[error("unknown node type: {0}")]
	UnknownType(String),
	/// The attribute is not declared on the node type or its base chain.
	#[error("attribute {attribute:?} is not declared on node type {node}")]
	UnknownAttribute {
		/// The node type name.
		node: String,
		/// The undeclared attribute name.
		attribute: String,
	},
	/// The value's kind does not match the attribute's declared kind.
	#[error("attribute {attribute:?} expects a {expected} value, got {got}")]
	TypeMismatch {
		/// The attribute name.
		attribute: String,
		/// The declared kind.
		expected: AttributeType,
		/// The kind of the supplied value.
		got: ValueKind,
	},
}

/// Errors from document tree mutation.
///
/// Every rejected operation leaves the tree unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
	/// The path does not address a node in the current tree.
	#[error("invalid document path: {0}")]
	InvalidPath(DomPath),
	/// Insertion violated the placement rules.
	#[error(transparent)]
	Placement(#[from] PlacementError),
	/// Attribute mutation violated the node's schema.
	#[error(transparent)]
	Schema(#[from] SchemaError),
}
