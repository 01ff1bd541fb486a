use propgrid_dom::Value;

use super::*;
use crate::builtins;
use crate::def::AttributeType;

static WIDGET: NodeDef = NodeDef {
	name: "Widget",
	description: "Test kind",
	can_add_to_parent: |_| true,
	can_be_parent_to: |_| true,
	base: None,
};

static GADGET: NodeDef = NodeDef {
	name: "Gadget",
	description: "Derived test kind",
	can_add_to_parent: |_| true,
	can_be_parent_to: |_| false,
	base: Some(&WIDGET),
};

static TINT: AttributeDef = AttributeDef {
	name: "Tint",
	description: "Test attribute",
	value_type: AttributeType::String,
	default: || Value::Null,
};

static TINT_OVERRIDE: AttributeDef = AttributeDef {
	name: "Tint",
	description: "Shadowing test attribute",
	value_type: AttributeType::Number,
	default: || Value::Null,
};

#[test]
fn duplicate_node_is_detected_not_overwritten() {
	let mut registry = NodeRegistry::new();
	registry.register_node(&WIDGET).unwrap();
	assert_eq!(
		registry.register_node(&WIDGET),
		Err(RegistryError::DuplicateNode("Widget"))
	);
	assert_eq!(registry.len(), 1);
	assert!(std::ptr::eq(registry.node("Widget").unwrap().def(), &WIDGET));
}

#[test]
fn base_must_register_first() {
	let mut registry = NodeRegistry::new();
	assert_eq!(
		registry.register_node(&GADGET),
		Err(RegistryError::UnknownNode("Widget"))
	);
	registry.register_node(&WIDGET).unwrap();
	registry.register_node(&GADGET).unwrap();
}

#[test]
fn attribute_requires_registered_node() {
	let mut registry = NodeRegistry::new();
	assert_eq!(
		registry.register_node_attribute(&WIDGET, &TINT),
		Err(RegistryError::UnknownNode("Widget"))
	);
}

#[test]
fn duplicate_attribute_is_detected() {
	let mut registry = NodeRegistry::new();
	registry.register_node(&WIDGET).unwrap();
	registry.register_node_attribute(&WIDGET, &TINT).unwrap();
	assert_eq!(
		registry.register_node_attribute(&WIDGET, &TINT),
		Err(RegistryError::DuplicateAttribute {
			node: "Widget",
			attribute: "Tint",
		})
	);
}

#[test]
fn derived_attribute_shadows_base() {
	let mut registry = NodeRegistry::new();
	registry.register_node(&WIDGET).unwrap();
	registry.register_node(&GADGET).unwrap();
	registry.register_node_attribute(&WIDGET, &TINT).unwrap();
	registry.register_node_attribute(&GADGET, &TINT_OVERRIDE).unwrap();

	assert!(std::ptr::eq(registry.attribute("Widget", "Tint").unwrap(), &TINT));
	assert!(std::ptr::eq(
		registry.attribute("Gadget", "Tint").unwrap(),
		&TINT_OVERRIDE
	));

	// The flattened schema carries the shadowing declaration only.
	let flattened = registry.attributes("Gadget").unwrap();
	assert_eq!(flattened.len(), 1);
	assert!(std::ptr::eq(flattened[0], &TINT_OVERRIDE));
}

#[test]
fn flattened_schema_lists_own_attributes_first() {
	let registry = NodeRegistry::with_builtins();
	let names: Vec<&str> = registry
		.attributes("Slider")
		.unwrap()
		.iter()
		.map(|a| a.name)
		.collect();
	assert_eq!(
		names,
		vec![
			"Min",
			"Max",
			"Step",
			"Suffix",
			"SoftMin",
			"SoftMax",
			"Decimals",
			"DisplayDecimals",
			"OnChanged",
			"Type",
		]
	);
}

#[test]
fn global_registry_initializes_once() {
	init_global(NodeRegistry::with_builtins());
	let first = global().expect("global registry initialized");

	// A second init is ignored; readers keep seeing the first instance.
	init_global(NodeRegistry::new());
	let second = global().unwrap();
	assert!(std::ptr::eq(first, second));
	assert!(second.contains(builtins::ADAPTER.name));
}
