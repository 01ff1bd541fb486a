use propgrid_dom::{Value, ValueKind};

/// A placement predicate over the current document context.
///
/// Predicates are pure: they inspect only the value they are handed, never
/// stored state, so repeated checks against an unchanged tree always agree.
pub type PlacementPredicate = fn(&Value) -> bool;

/// Definition of a node kind (static input).
///
/// Identity is the unique `name`. Placement behavior is supplied as two
/// predicates; [`check_placement`](crate::check_placement) requires both
/// directions to agree before an insertion is legal. `base` links a derived
/// editor kind to the kind whose attribute schema it inherits — attribute
/// composition only, not placement subtyping.
pub struct NodeDef {
	/// Unique node type name (e.g. `"Row"`).
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// May a node of this kind be appended under `parent`?
	pub can_add_to_parent: PlacementPredicate,
	/// May a node of this kind contain `child`?
	pub can_be_parent_to: PlacementPredicate,
	/// Base kind whose declared attributes this kind inherits.
	pub base: Option<&'static NodeDef>,
}

impl NodeDef {
	/// Iterates this definition and its base chain, most-derived first.
	pub fn chain(&'static self) -> impl Iterator<Item = &'static NodeDef> {
		let mut next = Some(self);
		core::iter::from_fn(move || {
			let def = next?;
			next = def.base;
			Some(def)
		})
	}
}

impl core::fmt::Debug for NodeDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("NodeDef")
			.field("name", &self.name)
			.field("base", &self.base.map(|b| b.name))
			.finish()
	}
}

/// Definition of a typed attribute slot on a node kind (static input).
pub struct AttributeDef {
	/// Attribute name (e.g. `"Min"`).
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Value kind constraint.
	pub value_type: AttributeType,
	/// Default value factory; `Value::Null` means "unset".
	pub default: fn() -> Value,
}

impl core::fmt::Debug for AttributeDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("AttributeDef")
			.field("name", &self.name)
			.field("value_type", &self.value_type)
			.finish()
	}
}

/// The kind of value an attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
	/// Boolean values.
	Bool,
	/// Any numeric value (int, uint, or double).
	Number,
	/// String values.
	String,
	/// Opaque callback tokens.
	Callback,
}

impl AttributeType {
	/// Returns true if `value` satisfies this kind constraint.
	pub fn matches(self, value: &Value) -> bool {
		match self {
			AttributeType::Bool => matches!(value.kind(), ValueKind::Bool),
			AttributeType::Number => value.is_number(),
			AttributeType::String => matches!(value.kind(), ValueKind::String),
			AttributeType::Callback => matches!(value.kind(), ValueKind::Callback),
		}
	}

	/// Human-readable kind name, used in error messages.
	pub fn name(self) -> &'static str {
		match self {
			AttributeType::Bool => "bool",
			AttributeType::Number => "number",
			AttributeType::String => "string",
			AttributeType::Callback => "callback",
		}
	}
}

impl core::fmt::Display for AttributeType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}
