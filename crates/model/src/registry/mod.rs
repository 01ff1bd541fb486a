//! Process-wide node type registry.

use std::sync::OnceLock;

use rustc_hash::FxHashMap as HashMap;

use crate::def::{AttributeDef, NodeDef};
use crate::error::RegistryError;

#[cfg(test)]
mod tests;

/// Registry published by [`init_global`], immutable thereafter.
static GLOBAL_REGISTRY: OnceLock<NodeRegistry> = OnceLock::new();

/// A registered node kind: its definition plus the attributes declared
/// directly on it, in registration order.
pub struct NodeEntry {
	def: &'static NodeDef,
	attributes: Vec<&'static AttributeDef>,
}

impl NodeEntry {
	/// Returns the node definition.
	pub fn def(&self) -> &'static NodeDef {
		self.def
	}

	/// Iterates attributes declared directly on this kind, in registration
	/// order. Inherited attributes are not included; see
	/// [`NodeRegistry::attributes`] for the flattened schema.
	pub fn declared_attributes(&self) -> impl Iterator<Item = &'static AttributeDef> {
		self.attributes.iter().copied()
	}
}

/// Table of registered node kinds, keyed by unique name.
///
/// Populated during startup, then treated as read-only. Registration never
/// silently overwrites: duplicates are detectable failures.
#[derive(Default)]
pub struct NodeRegistry {
	nodes: HashMap<&'static str, NodeEntry>,
}

impl NodeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry pre-populated with the builtin node roster.
	///
	/// Builtin registration is a fixed sequence; a collision here is a
	/// programmer error and aborts.
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		if let Err(err) = crate::builtins::install(&mut registry) {
			panic!("builtin node registration failed: {err}");
		}
		registry
	}

	/// Registers a node kind keyed by its unique name.
	///
	/// Fails with [`RegistryError::DuplicateNode`] if the name is taken and
	/// [`RegistryError::UnknownNode`] if the definition names a base that has
	/// not been registered yet (bases register first).
	pub fn register_node(&mut self, def: &'static NodeDef) -> Result<(), RegistryError> {
		if let Some(base) = def.base
			&& !self.nodes.contains_key(base.name)
		{
			return Err(RegistryError::UnknownNode(base.name));
		}
		if self.nodes.contains_key(def.name) {
			return Err(RegistryError::DuplicateNode(def.name));
		}
		tracing::debug!(node = def.name, base = def.base.map(|b| b.name), "registered node type");
		self.nodes.insert(
			def.name,
			NodeEntry {
				def,
				attributes: Vec::new(),
			},
		);
		Ok(())
	}

	/// Registers an editor node kind.
	///
	/// Editor kinds compose their attribute schema from their `base` chain
	/// (typically rooted at `PropertyEditor`); the union is flattened at
	/// lookup time by [`NodeRegistry::attribute`], so registration itself is
	/// the same name-keyed insertion as [`NodeRegistry::register_node`].
	pub fn register_property_editor(&mut self, def: &'static NodeDef) -> Result<(), RegistryError> {
		self.register_node(def)
	}

	/// Declares an attribute on an already-registered node kind.
	pub fn register_node_attribute(
		&mut self,
		node: &'static NodeDef,
		attribute: &'static AttributeDef,
	) -> Result<(), RegistryError> {
		let entry = self
			.nodes
			.get_mut(node.name)
			.ok_or(RegistryError::UnknownNode(node.name))?;
		if entry.attributes.iter().any(|a| a.name == attribute.name) {
			return Err(RegistryError::DuplicateAttribute {
				node: node.name,
				attribute: attribute.name,
			});
		}
		tracing::debug!(
			node = node.name,
			attribute = attribute.name,
			value_type = attribute.value_type.name(),
			"registered node attribute"
		);
		entry.attributes.push(attribute);
		Ok(())
	}

	/// Returns the entry for a node type name.
	pub fn node(&self, name: &str) -> Option<&NodeEntry> {
		self.nodes.get(name)
	}

	/// Returns true if the node type name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.nodes.contains_key(name)
	}

	/// Looks up an attribute on a node kind, walking its base chain.
	///
	/// An attribute declared on a derived kind shadows one of the same name
	/// declared on a base.
	pub fn attribute(&self, node: &str, attribute: &str) -> Option<&'static AttributeDef> {
		let entry = self.nodes.get(node)?;
		for def in entry.def.chain() {
			if let Some(found) = self
				.nodes
				.get(def.name)
				.and_then(|e| e.attributes.iter().find(|a| a.name == attribute))
			{
				return Some(found);
			}
		}
		None
	}

	/// Returns the flattened attribute schema for a node kind: its own
	/// declared attributes first, then inherited ones, with shadowed base
	/// attributes removed.
	pub fn attributes(&self, node: &str) -> Option<Vec<&'static AttributeDef>> {
		let entry = self.nodes.get(node)?;
		let mut flattened: Vec<&'static AttributeDef> = Vec::new();
		for def in entry.def.chain() {
			let Some(owner) = self.nodes.get(def.name) else {
				continue;
			};
			for &attr in &owner.attributes {
				if !flattened.iter().any(|a| a.name == attr.name) {
					flattened.push(attr);
				}
			}
		}
		Some(flattened)
	}

	/// Iterates registered node type names.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.nodes.keys().copied()
	}

	/// Returns the number of registered node kinds.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns true if no node kinds are registered.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Publishes the process-wide registry.
///
/// The first call wins; later calls are ignored. Call once at startup after
/// the registration phase, before any concurrent readers exist.
pub fn init_global(registry: NodeRegistry) {
	let _ = GLOBAL_REGISTRY.set(registry);
}

/// Returns the process-wide registry, if [`init_global`] has run.
///
/// Read-only after init, so no locking is needed.
pub fn global() -> Option<&'static NodeRegistry> {
	GLOBAL_REGISTRY.get()
}
