use crate::node::Node;

/// Opaque handle to a callback registered with the host application.
///
/// Handler-valued attributes (e.g. change notifications) carry one of these
/// instead of an actual closure; the host resolves the token on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

impl core::fmt::Display for CallbackId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "callback#{}", self.0)
	}
}

/// A value in a property-grid document.
///
/// Either a scalar leaf, a callback token, or a [`Node`] with children and
/// attributes of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean value.
	Bool(bool),
	/// Signed integer value.
	Int(i64),
	/// Unsigned integer value.
	Uint(u64),
	/// Floating-point value.
	Double(f64),
	/// String value.
	String(String),
	/// Opaque callback token.
	Callback(CallbackId),
	/// Structural node.
	Node(Node),
}

impl Value {
	/// Returns true if this value is a structural node.
	pub fn is_node(&self) -> bool {
		matches!(self, Value::Node(_))
	}

	/// Returns the node's type name, or `None` for non-node values.
	pub fn node_name(&self) -> Option<&str> {
		match self {
			Value::Node(node) => Some(node.name()),
			_ => None,
		}
	}

	/// Returns the node if this value is one.
	pub fn as_node(&self) -> Option<&Node> {
		match self {
			Value::Node(node) => Some(node),
			_ => None,
		}
	}

	/// Returns the node mutably if this value is one.
	pub fn as_node_mut(&mut self) -> Option<&mut Node> {
		match self {
			Value::Node(node) => Some(node),
			_ => None,
		}
	}

	/// Returns true for any numeric variant (Int, Uint, Double).
	pub fn is_number(&self) -> bool {
		matches!(self, Value::Int(_) | Value::Uint(_) | Value::Double(_))
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the callback token if this is a `Callback` variant.
	pub fn as_callback(&self) -> Option<CallbackId> {
		match self {
			Value::Callback(id) => Some(*id),
			_ => None,
		}
	}

	/// Returns the kind discriminant of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Bool,
			Value::Int(_) => ValueKind::Int,
			Value::Uint(_) => ValueKind::Uint,
			Value::Double(_) => ValueKind::Double,
			Value::String(_) => ValueKind::String,
			Value::Callback(_) => ValueKind::Callback,
			Value::Node(_) => ValueKind::Node,
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::Uint(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Double(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl From<CallbackId> for Value {
	fn from(v: CallbackId) -> Self {
		Value::Callback(v)
	}
}

impl From<Node> for Value {
	fn from(v: Node) -> Self {
		Value::Node(v)
	}
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Absent value.
	Null,
	/// Boolean.
	Bool,
	/// Signed integer.
	Int,
	/// Unsigned integer.
	Uint,
	/// Floating-point number.
	Double,
	/// String.
	String,
	/// Opaque callback token.
	Callback,
	/// Structural node.
	Node,
}

impl ValueKind {
	/// Human-readable kind name, used in error messages.
	pub fn name(self) -> &'static str {
		match self {
			ValueKind::Null => "null",
			ValueKind::Bool => "bool",
			ValueKind::Int => "int",
			ValueKind::Uint => "uint",
			ValueKind::Double => "double",
			ValueKind::String => "string",
			ValueKind::Callback => "callback",
			ValueKind::Node => "node",
		}
	}
}

impl core::fmt::Display for ValueKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_roundtrip() {
		assert_eq!(Value::Int(3).kind(), ValueKind::Int);
		assert_eq!(Value::from("x").kind(), ValueKind::String);
		assert_eq!(Value::Callback(CallbackId(1)).kind(), ValueKind::Callback);
		assert!(!Value::Null.is_node());
	}

	#[test]
	fn numeric_predicate() {
		assert!(Value::Int(-1).is_number());
		assert!(Value::Uint(1).is_number());
		assert!(Value::Double(0.5).is_number());
		assert!(!Value::Bool(true).is_number());
		assert!(!Value::from("5").is_number());
	}
}
