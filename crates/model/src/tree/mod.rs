//! Schema-checked document trees.

use propgrid_dom::{Node, Value};

use crate::builtins;
use crate::error::TreeError;
use crate::registry::NodeRegistry;
use crate::validate::{UnknownAttributePolicy, check_attribute, check_placement};


/// Address of a node in a document tree: the child indices walked from the
/// root. The empty path is the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomPath(Vec<usize>);

impl DomPath {
	/// The root path.
	pub fn root() -> Self {
		Self::default()
	}

	/// Returns this path extended by one child index.
	pub fn child(&self, index: usize) -> Self {
		let mut indices = self.0.clone();
		indices.push(index);
		Self(indices)
	}

	/// Returns the parent path, or `None` for the root.
	pub fn parent(&self) -> Option<Self> {
		let (_, rest) = self.0.split_last()?;
		Some(Self(rest.to_vec()))
	}

	/// Returns the final child index, or `None` for the root.
	pub fn last(&self) -> Option<usize> {
		self.0.last().copied()
	}

	/// The child indices from the root.
	pub fn indices(&self) -> &[usize] {
		&self.0
	}

	/// Returns true if this is the root path.
	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<usize> for DomPath {
	fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl From<&[usize]> for DomPath {
	fn from(indices: &[usize]) -> Self {
		Self(indices.to_vec())
	}
}

impl core::fmt::Display for DomPath {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		if self.0.is_empty() {
			return f.write_str("/");
		}
		for index in &self.0 {
			write!(f, "/{index}")?;
		}
		Ok(())
	}
}

/// A property-grid document: a value tree rooted at an `Adapter` node,
/// mutated only through operations that validate against the registry.
///
/// Rejected operations leave the tree unchanged. The tree is not internally
/// synchronized; each editing session owns its tree and serializes access
/// (the registry itself is read-only and freely shared).
pub struct DocumentTree<'r> {
	registry: &'r NodeRegistry,
	root: Value,
	unknown_attributes: UnknownAttributePolicy,
}

impl<'r> DocumentTree<'r> {
	/// Creates an empty document: a lone `Adapter` root.
	pub fn new(registry: &'r NodeRegistry) -> Self {
		Self {
			registry,
			root: Value::Node(Node::new(builtins::ADAPTER.name)),
			unknown_attributes: UnknownAttributePolicy::default(),
		}
	}

	/// Sets how undeclared attributes are treated (default: reject).
	pub fn with_unknown_attributes(mut self, policy: UnknownAttributePolicy) -> Self {
		self.unknown_attributes = policy;
		self
	}

	/// Returns the root value.
	pub fn root(&self) -> &Value {
		&self.root
	}

	/// Returns the value at `path`, if the path addresses one.
	pub fn value(&self, path: &DomPath) -> Option<&Value> {
		let mut current = &self.root;
		for &index in path.indices() {
			current = current.as_node()?.child(index)?;
		}
		Some(current)
	}

	/// Returns the node at `path`, failing unless the path addresses a node.
	pub fn node(&self, path: &DomPath) -> Result<&Node, TreeError> {
		self.value(path)
			.and_then(Value::as_node)
			.ok_or_else(|| TreeError::InvalidPath(path.clone()))
	}

	/// Returns the number of children of the node at `path`.
	pub fn child_count(&self, path: &DomPath) -> Result<usize, TreeError> {
		Ok(self.node(path)?.child_count())
	}

	/// Appends `value` as a new child of the node at `parent`.
	///
	/// Fails with [`TreeError::InvalidPath`] if `parent` does not address a
	/// node (there is no fallback to the root), or with
	/// [`TreeError::Placement`] if the symmetric placement check rejects the
	/// pairing. On success, returns the new child's path.
	pub fn try_insert_child(&mut self, parent: &DomPath, value: Value) -> Result<DomPath, TreeError> {
		let parent_value = self
			.value(parent)
			.filter(|v| v.is_node())
			.ok_or_else(|| TreeError::InvalidPath(parent.clone()))?;

		if let Err(err) = check_placement(self.registry, parent_value, &value) {
			tracing::warn!(parent = %parent, error = %err, "rejected insertion");
			return Err(err.into());
		}

		let node = self
			.value_mut(parent)
			.and_then(Value::as_node_mut)
			.ok_or_else(|| TreeError::InvalidPath(parent.clone()))?;
		node.push_child(value);
		Ok(parent.child(node.child_count() - 1))
	}

	/// Removes and returns the child at `path`.
	///
	/// The root itself cannot be removed.
	pub fn remove_child(&mut self, path: &DomPath) -> Result<Value, TreeError> {
		let (parent, index) = match (path.parent(), path.last()) {
			(Some(parent), Some(index)) => (parent, index),
			_ => return Err(TreeError::InvalidPath(path.clone())),
		};
		self.value_mut(&parent)
			.and_then(Value::as_node_mut)
			.and_then(|node| node.remove_child(index))
			.ok_or_else(|| TreeError::InvalidPath(path.clone()))
	}

	/// Sets an attribute on the node at `path`, validating it against the
	/// node kind's schema first.
	pub fn set_attribute(
		&mut self,
		path: &DomPath,
		name: &str,
		value: Value,
	) -> Result<(), TreeError> {
		let node_name = self.node(path)?.name().to_string();
		if let Err(err) =
			check_attribute(self.registry, &node_name, name, &value, self.unknown_attributes)
		{
			tracing::warn!(path = %path, attribute = name, error = %err, "rejected attribute");
			return Err(err.into());
		}

		let node = self
			.value_mut(path)
			.and_then(Value::as_node_mut)
			.ok_or_else(|| TreeError::InvalidPath(path.clone()))?;
		node.set_attribute(name, value);
		Ok(())
	}

	/// Returns the attribute value on the node at `path`, if set.
	pub fn get_attribute(&self, path: &DomPath, name: &str) -> Result<Option<&Value>, TreeError> {
		Ok(self.node(path)?.attribute(name))
	}

	fn value_mut(&mut self, path: &DomPath) -> Option<&mut Value> {
		let mut current = &mut self.root;
		for &index in path.indices() {
			current = current.as_node_mut()?.child_mut(index)?;
		}
		Some(current)
	}
}
