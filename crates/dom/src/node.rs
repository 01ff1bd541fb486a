use crate::value::Value;

/// A structural node in a property-grid document.
///
/// A node carries its type name, an ordered attribute list, and ordered
/// children. Attribute order is insertion order; setting an existing
/// attribute replaces its value in place. Attribute sets on real documents
/// are small, so lookup is a linear scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	name: Box<str>,
	attributes: Vec<(Box<str>, Value)>,
	children: Vec<Value>,
}

impl Node {
	/// Creates an empty node of the given type name.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Returns the node's type name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the attribute value, if set.
	pub fn attribute(&self, name: &str) -> Option<&Value> {
		self.attributes
			.iter()
			.find(|(key, _)| &**key == name)
			.map(|(_, value)| value)
	}

	/// Sets an attribute, replacing any previous value for the same name.
	pub fn set_attribute(&mut self, name: impl Into<Box<str>>, value: Value) {
		let name = name.into();
		match self.attributes.iter_mut().find(|(key, _)| *key == name) {
			Some((_, slot)) => *slot = value,
			None => self.attributes.push((name, value)),
		}
	}

	/// Removes an attribute, returning its previous value if it was set.
	pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
		let idx = self.attributes.iter().position(|(key, _)| &**key == name)?;
		Some(self.attributes.remove(idx).1)
	}

	/// Iterates attributes in insertion order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.attributes.iter().map(|(key, value)| (&**key, value))
	}

	/// Returns the number of attributes set on this node.
	pub fn attribute_count(&self) -> usize {
		self.attributes.len()
	}

	/// Returns the child at `index`.
	pub fn child(&self, index: usize) -> Option<&Value> {
		self.children.get(index)
	}

	/// Returns the child at `index` mutably.
	pub fn child_mut(&mut self, index: usize) -> Option<&mut Value> {
		self.children.get_mut(index)
	}

	/// Iterates children in order.
	pub fn children(&self) -> impl Iterator<Item = &Value> {
		self.children.iter()
	}

	/// Returns the number of children.
	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Appends a child value.
	///
	/// The dom layer imposes no placement rules; callers that need
	/// schema-checked insertion go through the model layer instead.
	pub fn push_child(&mut self, value: Value) {
		self.children.push(value);
	}

	/// Removes and returns the child at `index`, if present.
	pub fn remove_child(&mut self, index: usize) -> Option<Value> {
		if index < self.children.len() {
			Some(self.children.remove(index))
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn attribute_set_replaces_in_place() {
		let mut node = Node::new("Row");
		node.set_attribute("Min", Value::Int(0));
		node.set_attribute("Max", Value::Int(10));
		node.set_attribute("Min", Value::Int(5));

		assert_eq!(node.attribute("Min"), Some(&Value::Int(5)));
		let order: Vec<&str> = node.attributes().map(|(k, _)| k).collect();
		assert_eq!(order, vec!["Min", "Max"]);
	}

	#[test]
	fn remove_attribute_returns_previous() {
		let mut node = Node::new("Row");
		node.set_attribute("Suffix", Value::from("m/s"));
		assert_eq!(node.remove_attribute("Suffix"), Some(Value::from("m/s")));
		assert_eq!(node.remove_attribute("Suffix"), None);
		assert_eq!(node.attribute_count(), 0);
	}

	#[test]
	fn children_are_ordered() {
		let mut node = Node::new("Adapter");
		node.push_child(Value::Node(Node::new("Row")));
		node.push_child(Value::Int(7));
		assert_eq!(node.child_count(), 2);
		assert_eq!(node.child(0).and_then(Value::node_name), Some("Row"));
		assert_eq!(node.remove_child(1), Some(Value::Int(7)));
		assert_eq!(node.remove_child(5), None);
	}
}
