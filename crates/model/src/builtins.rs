//! Builtin node roster.
//!
//! The standard kinds every property-grid document is built from:
//! - [`ADAPTER`]: the root node, one per document
//! - [`ROW`]: structural container, nests under the adapter or other rows
//! - [`LABEL`]: leaf presenting static text
//! - [`PROPERTY_EDITOR`]: leaf presenting one editable field, and the base
//!   of the concrete editor kinds ([`SLIDER`], [`CHECK_BOX`], …)
//!
//! [`install`] registers the roster into a [`NodeRegistry`] during the
//! startup phase; [`NodeRegistry::with_builtins`] does the same and treats
//! any error as fatal.

use propgrid_dom::Value;

use crate::def::{AttributeDef, AttributeType, NodeDef};
use crate::error::RegistryError;
use crate::registry::NodeRegistry;

fn never(_: &Value) -> bool {
	false
}

fn parent_is_adapter_or_row(parent: &Value) -> bool {
	matches!(parent.node_name(), Some(name) if name == ROW.name || name == ADAPTER.name)
}

fn parent_is_row(parent: &Value) -> bool {
	parent.node_name() == Some(ROW.name)
}

fn child_is_row(child: &Value) -> bool {
	child.node_name() == Some(ROW.name)
}

fn child_is_node(child: &Value) -> bool {
	child.is_node()
}

fn child_is_leaf(child: &Value) -> bool {
	!child.is_node()
}

fn no_default() -> Value {
	Value::Null
}

/// Root node of a document; owns the whole property-grid session.
pub static ADAPTER: NodeDef = NodeDef {
	name: "Adapter",
	description: "Root node of a property-grid document",
	// Adapters are root nodes, never nested under anything.
	can_add_to_parent: never,
	// Adapters parent only rows.
	can_be_parent_to: child_is_row,
	base: None,
};

/// Structural container node.
pub static ROW: NodeDef = NodeDef {
	name: "Row",
	description: "Structural container for editors, labels, and nested rows",
	// Rows live under the adapter or under other rows.
	can_add_to_parent: parent_is_adapter_or_row,
	// Rows contain nodes, not bare scalars.
	can_be_parent_to: child_is_node,
	base: None,
};

/// Static text leaf.
pub static LABEL: NodeDef = NodeDef {
	name: "Label",
	description: "Static text within a row",
	can_add_to_parent: parent_is_row,
	// Leaf kinds hold scalar content only, never structural children.
	can_be_parent_to: child_is_leaf,
	base: None,
};

/// One editable field; base kind of all concrete editors.
pub static PROPERTY_EDITOR: NodeDef = NodeDef {
	name: "PropertyEditor",
	description: "An editable field within a row",
	can_add_to_parent: parent_is_row,
	can_be_parent_to: child_is_leaf,
	base: None,
};

/// Handler invoked when the edited value changes.
pub static ON_CHANGED: AttributeDef = AttributeDef {
	name: "OnChanged",
	description: "Callback invoked when the edited value changes",
	value_type: AttributeType::Callback,
	default: no_default,
};

/// Concrete editor type name for generic `PropertyEditor` nodes.
pub static EDITOR_TYPE: AttributeDef = AttributeDef {
	name: "Type",
	description: "Concrete editor type to instantiate",
	value_type: AttributeType::String,
	default: || Value::String(String::new()),
};

macro_rules! editor_def {
	($vis:vis static $ident:ident: $name:literal, $desc:literal, base: $base:expr;) => {
		#[doc = $desc]
		$vis static $ident: NodeDef = NodeDef {
			name: $name,
			description: $desc,
			can_add_to_parent: parent_is_row,
			can_be_parent_to: child_is_leaf,
			base: Some(&$base),
		};
	};
}

editor_def! { pub static NUMERIC_EDITOR: "NumericEditor", "Generic numeric field", base: PROPERTY_EDITOR; }
editor_def! { pub static SLIDER: "Slider", "Numeric field with a slider handle", base: NUMERIC_EDITOR; }
editor_def! { pub static SPIN_BOX: "SpinBox", "Numeric field with increment arrows", base: NUMERIC_EDITOR; }
editor_def! { pub static BUTTON: "Button", "Push button", base: PROPERTY_EDITOR; }
editor_def! { pub static CHECK_BOX: "CheckBox", "Boolean toggle", base: PROPERTY_EDITOR; }
editor_def! { pub static COLOR: "Color", "Color picker", base: PROPERTY_EDITOR; }
editor_def! { pub static COMBO_BOX: "ComboBox", "Drop-down selection", base: PROPERTY_EDITOR; }
editor_def! { pub static RADIO_BUTTON: "RadioButton", "Exclusive selection", base: PROPERTY_EDITOR; }
editor_def! { pub static LINE_EDIT: "LineEdit", "Single-line text field", base: PROPERTY_EDITOR; }
editor_def! { pub static MULTI_LINE_EDIT: "MultiLineEdit", "Multi-line text field", base: PROPERTY_EDITOR; }
editor_def! { pub static QUATERNION: "Quaternion", "Rotation field", base: PROPERTY_EDITOR; }
editor_def! { pub static VECTOR2: "Vector2", "Two-component vector field", base: PROPERTY_EDITOR; }
editor_def! { pub static VECTOR3: "Vector3", "Three-component vector field", base: PROPERTY_EDITOR; }
editor_def! { pub static VECTOR4: "Vector4", "Four-component vector field", base: PROPERTY_EDITOR; }
editor_def! { pub static FILE_PATH: "FilePath", "Filesystem path field", base: PROPERTY_EDITOR; }

/// Lower bound on the edited value.
pub static MIN: AttributeDef = AttributeDef {
	name: "Min",
	description: "Lower bound on the edited value",
	value_type: AttributeType::Number,
	default: no_default,
};

/// Upper bound on the edited value.
pub static MAX: AttributeDef = AttributeDef {
	name: "Max",
	description: "Upper bound on the edited value",
	value_type: AttributeType::Number,
	default: no_default,
};

/// Step size for increment/decrement.
pub static STEP: AttributeDef = AttributeDef {
	name: "Step",
	description: "Step size for increment and decrement",
	value_type: AttributeType::Number,
	default: || Value::Double(1.0),
};

/// Unit suffix displayed after the value.
pub static SUFFIX: AttributeDef = AttributeDef {
	name: "Suffix",
	description: "Unit suffix displayed after the value",
	value_type: AttributeType::String,
	default: || Value::String(String::new()),
};

/// Soft lower bound; the UI resists but does not forbid values below it.
pub static SOFT_MIN: AttributeDef = AttributeDef {
	name: "SoftMin",
	description: "Soft lower bound for UI clamping",
	value_type: AttributeType::Number,
	default: no_default,
};

/// Soft upper bound; the UI resists but does not forbid values above it.
pub static SOFT_MAX: AttributeDef = AttributeDef {
	name: "SoftMax",
	description: "Soft upper bound for UI clamping",
	value_type: AttributeType::Number,
	default: no_default,
};

/// Stored decimal precision.
pub static DECIMALS: AttributeDef = AttributeDef {
	name: "Decimals",
	description: "Stored decimal precision",
	value_type: AttributeType::Number,
	default: || Value::Uint(7),
};

/// Displayed decimal precision.
pub static DISPLAY_DECIMALS: AttributeDef = AttributeDef {
	name: "DisplayDecimals",
	description: "Displayed decimal precision",
	value_type: AttributeType::Number,
	default: || Value::Uint(2),
};

/// Registers the builtin roster into `registry`.
///
/// Order matters: base kinds register before the kinds that inherit from
/// them. Errors are programmer errors (duplicate startup registration) and
/// should be treated as fatal by the caller.
pub fn install(registry: &mut NodeRegistry) -> Result<(), RegistryError> {
	registry.register_node(&ADAPTER)?;
	registry.register_node(&ROW)?;
	registry.register_node(&LABEL)?;
	registry.register_node(&PROPERTY_EDITOR)?;
	registry.register_node_attribute(&PROPERTY_EDITOR, &ON_CHANGED)?;
	registry.register_node_attribute(&PROPERTY_EDITOR, &EDITOR_TYPE)?;

	registry.register_property_editor(&NUMERIC_EDITOR)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &MIN)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &MAX)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &STEP)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &SUFFIX)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &SOFT_MIN)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &SOFT_MAX)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &DECIMALS)?;
	registry.register_node_attribute(&NUMERIC_EDITOR, &DISPLAY_DECIMALS)?;

	registry.register_property_editor(&SLIDER)?;
	registry.register_property_editor(&SPIN_BOX)?;
	registry.register_property_editor(&BUTTON)?;
	registry.register_property_editor(&CHECK_BOX)?;
	registry.register_property_editor(&COLOR)?;
	registry.register_property_editor(&COMBO_BOX)?;
	registry.register_property_editor(&RADIO_BUTTON)?;
	registry.register_property_editor(&LINE_EDIT)?;
	registry.register_property_editor(&MULTI_LINE_EDIT)?;
	registry.register_property_editor(&QUATERNION)?;
	registry.register_property_editor(&VECTOR2)?;
	registry.register_property_editor(&VECTOR3)?;
	registry.register_property_editor(&VECTOR4)?;
	registry.register_property_editor(&FILE_PATH)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn install_registers_full_roster() {
		let registry = NodeRegistry::with_builtins();
		for name in [
			"Adapter",
			"Row",
			"Label",
			"PropertyEditor",
			"NumericEditor",
			"Slider",
			"SpinBox",
			"CheckBox",
			"FilePath",
		] {
			assert!(registry.contains(name), "missing builtin {name}");
		}
		assert_eq!(registry.len(), 19);
	}

	#[test]
	fn install_twice_reports_duplicate() {
		let mut registry = NodeRegistry::with_builtins();
		assert_eq!(
			install(&mut registry),
			Err(RegistryError::DuplicateNode("Adapter"))
		);
	}

	#[test]
	fn slider_inherits_numeric_and_editor_attributes() {
		let registry = NodeRegistry::with_builtins();
		assert!(std::ptr::eq(registry.attribute("Slider", "Min").unwrap(), &MIN));
		assert!(std::ptr::eq(
			registry.attribute("Slider", "OnChanged").unwrap(),
			&ON_CHANGED
		));
		assert!(registry.attribute("Slider", "Checked").is_none());
	}

	#[test]
	fn numeric_defaults_are_numbers() {
		for attr in [&STEP, &DECIMALS, &DISPLAY_DECIMALS] {
			assert!((attr.default)().is_number(), "{} default", attr.name);
		}
	}
}
