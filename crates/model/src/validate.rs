//! Pure placement and schema checks over a registry.
//!
//! Both checks are read-only: repeated validation of the same operation
//! against an unchanged tree yields the same result.

use propgrid_dom::Value;

use crate::error::{PlacementError, SchemaError};
use crate::registry::NodeRegistry;

/// How validation treats attributes a node's schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownAttributePolicy {
	/// Reject undeclared attributes with a schema error.
	#[default]
	Reject,
	/// Accept undeclared attributes as pass-through metadata, unvalidated.
	Allow,
}

/// Checks whether `child` may be appended under `parent`.
///
/// Both directions must agree: the parent's kind must accept the child
/// (`can_be_parent_to`) and, for node children, the child's kind must accept
/// the parent (`can_add_to_parent`). A one-sided permission is insufficient.
///
/// Node children must name a registered kind; unregistered kinds are never
/// placeable. Scalar children carry no kind of their own, so only the
/// parent-side predicate constrains them.
pub fn check_placement(
	registry: &NodeRegistry,
	parent: &Value,
	child: &Value,
) -> Result<(), PlacementError> {
	let parent_name = parent.node_name().ok_or(PlacementError::NotANode)?;
	let parent_entry = registry
		.node(parent_name)
		.ok_or_else(|| PlacementError::UnknownType(parent_name.to_string()))?;

	let child_accepts = match child.node_name() {
		Some(child_name) => {
			let child_entry = registry
				.node(child_name)
				.ok_or_else(|| PlacementError::UnknownType(child_name.to_string()))?;
			(child_entry.def().can_add_to_parent)(parent)
		}
		None => true,
	};

	if !child_accepts || !(parent_entry.def().can_be_parent_to)(child) {
		return Err(PlacementError::IllegalPlacement {
			parent: parent_name.to_string(),
			child: describe(child),
		});
	}
	Ok(())
}

/// Checks an attribute name/value pair against a node kind's schema.
///
/// The attribute must be declared on the kind or its base chain, and the
/// value's kind must match the declaration. Undeclared attributes are
/// rejected or passed through according to `policy`.
pub fn check_attribute(
	registry: &NodeRegistry,
	node: &str,
	attribute: &str,
	value: &Value,
	policy: UnknownAttributePolicy,
) -> Result<(), SchemaError> {
	if !registry.contains(node) {
		return Err(SchemaError::UnknownType(node.to_string()));
	}
	match registry.attribute(node, attribute) {
		Some(def) => {
			if !def.value_type.matches(value) {
				return Err(SchemaError::TypeMismatch {
					attribute: attribute.to_string(),
					expected: def.value_type,
					got: value.kind(),
				});
			}
			Ok(())
		}
		None => match policy {
			UnknownAttributePolicy::Reject => Err(SchemaError::UnknownAttribute {
				node: node.to_string(),
				attribute: attribute.to_string(),
			}),
			UnknownAttributePolicy::Allow => Ok(()),
		},
	}
}

/// Names a value for placement errors: node type name, or value kind for
/// scalars.
fn describe(value: &Value) -> String {
	match value.node_name() {
		Some(name) => name.to_string(),
		None => format!("{} value", value.kind()),
	}
}

#[cfg(test)]
mod tests {
	use propgrid_dom::{CallbackId, Node};

	use super::*;
	use crate::builtins;
	use crate::def::AttributeType;

	fn node(name: &str) -> Value {
		Value::Node(Node::new(name))
	}

	#[test]
	fn unregistered_child_kind_is_never_placeable() {
		let registry = NodeRegistry::with_builtins();
		assert_eq!(
			check_placement(&registry, &node("Row"), &node("Gizmo")),
			Err(PlacementError::UnknownType("Gizmo".to_string()))
		);
	}

	#[test]
	fn scalar_parent_is_rejected() {
		let registry = NodeRegistry::with_builtins();
		assert_eq!(
			check_placement(&registry, &Value::Int(5), &node("Row")),
			Err(PlacementError::NotANode)
		);
	}

	#[test]
	fn one_sided_permission_is_insufficient() {
		let registry = NodeRegistry::with_builtins();
		// Row accepts any node child, but Adapter refuses every parent.
		let err = check_placement(&registry, &node("Row"), &node("Adapter")).unwrap_err();
		assert_eq!(
			err,
			PlacementError::IllegalPlacement {
				parent: "Row".to_string(),
				child: "Adapter".to_string(),
			}
		);
	}

	#[test]
	fn strict_mode_rejects_undeclared_attributes() {
		let registry = NodeRegistry::with_builtins();
		let err = check_attribute(
			&registry,
			builtins::SLIDER.name,
			"Tooltip",
			&Value::from("hi"),
			UnknownAttributePolicy::Reject,
		)
		.unwrap_err();
		assert_eq!(
			err,
			SchemaError::UnknownAttribute {
				node: "Slider".to_string(),
				attribute: "Tooltip".to_string(),
			}
		);

		assert_eq!(
			check_attribute(
				&registry,
				builtins::SLIDER.name,
				"Tooltip",
				&Value::from("hi"),
				UnknownAttributePolicy::Allow,
			),
			Ok(())
		);
	}

	#[test]
	fn declared_attributes_are_kind_checked_even_in_allow_mode() {
		let registry = NodeRegistry::with_builtins();
		let err = check_attribute(
			&registry,
			builtins::SLIDER.name,
			"Min",
			&Value::from("0"),
			UnknownAttributePolicy::Allow,
		)
		.unwrap_err();
		assert_eq!(
			err,
			SchemaError::TypeMismatch {
				attribute: "Min".to_string(),
				expected: AttributeType::Number,
				got: propgrid_dom::ValueKind::String,
			}
		);
	}

	#[test]
	fn callback_attribute_requires_token() {
		let registry = NodeRegistry::with_builtins();
		assert_eq!(
			check_attribute(
				&registry,
				builtins::CHECK_BOX.name,
				"OnChanged",
				&Value::Callback(CallbackId(3)),
				UnknownAttributePolicy::Reject,
			),
			Ok(())
		);
		assert!(matches!(
			check_attribute(
				&registry,
				builtins::CHECK_BOX.name,
				"OnChanged",
				&Value::Bool(true),
				UnknownAttributePolicy::Reject,
			),
			Err(SchemaError::TypeMismatch { .. })
		));
	}

	#[test]
	fn checks_are_idempotent() {
		let registry = NodeRegistry::with_builtins();
		let parent = node("Adapter");
		let child = node("Label");
		let first = check_placement(&registry, &parent, &child);
		for _ in 0..3 {
			assert_eq!(check_placement(&registry, &parent, &child), first);
		}
	}
}
