//! Conversion between [`AttributeSpec`] and the canonical [`Node`] tree.
//!
//! The attribute names and their order are a stable contract that editors
//! and diff viewers rely on:
//!
//! ```text
//! name type defaultValue defaultValueNumeric defaultValueDate
//! defaultValueBoolean value valueNumeric valueBoolean valueDate autoIncrement
//! ```
//!
//! Absent fields are omitted. `autoIncrement` is only written when true.
//! Constraints go into a nested `constraints` node where every specified
//! field is written, including explicit `false`.

use crate::attribute::AttributeSpec;
use crate::constraint::ConstraintSpec;
use crate::error::{CoreError, Result};
use crate::node::Node;

/// Default node name for a column attribute.
pub const COLUMN: &str = "column";
/// Name of the nested constraints node.
pub const CONSTRAINTS: &str = "constraints";

const NAME: &str = "name";
const TYPE: &str = "type";
const DEFAULT_VALUE: &str = "defaultValue";
const DEFAULT_VALUE_NUMERIC: &str = "defaultValueNumeric";
const DEFAULT_VALUE_DATE: &str = "defaultValueDate";
const DEFAULT_VALUE_BOOLEAN: &str = "defaultValueBoolean";
const VALUE: &str = "value";
const VALUE_NUMERIC: &str = "valueNumeric";
const VALUE_BOOLEAN: &str = "valueBoolean";
const VALUE_DATE: &str = "valueDate";
const AUTO_INCREMENT: &str = "autoIncrement";

const CHECK: &str = "check";
const FOREIGN_KEY_NAME: &str = "foreignKeyName";
const REFERENCES: &str = "references";
const DEFERRABLE: &str = "deferrable";
const DELETE_CASCADE: &str = "deleteCascade";
const INITIALLY_DEFERRED: &str = "initiallyDeferred";
const NULLABLE: &str = "nullable";
const PRIMARY_KEY: &str = "primaryKey";
const UNIQUE: &str = "unique";

/// Renders `spec` as a `column` node.
#[must_use]
pub fn to_tree(spec: &AttributeSpec) -> Node {
    to_tree_with_kind(spec, COLUMN)
}

/// Renders `spec` as a node named `kind`.
///
/// The name is written as-is; an empty name must be rejected by the caller.
#[must_use]
pub fn to_tree_with_kind(spec: &AttributeSpec, kind: &str) -> Node {
    let mut node = Node::new(kind);
    node.set_attribute(NAME, spec.name());
    node.set_optional(TYPE, spec.data_type());

    node.set_optional(DEFAULT_VALUE, spec.default_value());
    node.set_optional(DEFAULT_VALUE_NUMERIC, spec.default_value_numeric());
    node.set_optional(DEFAULT_VALUE_DATE, spec.default_value_date());
    node.set_optional(DEFAULT_VALUE_BOOLEAN, spec.default_value_boolean());

    node.set_optional(VALUE, spec.value());
    node.set_optional(VALUE_NUMERIC, spec.value_numeric());
    node.set_optional(VALUE_BOOLEAN, spec.value_boolean());
    node.set_optional(VALUE_DATE, spec.value_date());

    if spec.is_auto_increment() {
        node.set_attribute(AUTO_INCREMENT, "true");
    }

    if let Some(constraints) = spec.constraints() {
        node.push_child(constraints_to_tree(constraints));
    }

    node
}

fn constraints_to_tree(constraints: &ConstraintSpec) -> Node {
    let mut node = Node::new(CONSTRAINTS);
    node.set_optional(CHECK, constraints.check.as_deref());
    node.set_optional(FOREIGN_KEY_NAME, constraints.foreign_key_name.as_deref());
    node.set_optional(REFERENCES, constraints.references.as_deref());
    node.set_optional(DEFERRABLE, constraints.deferrable);
    node.set_optional(DELETE_CASCADE, constraints.delete_cascade);
    node.set_optional(INITIALLY_DEFERRED, constraints.initially_deferred);
    node.set_optional(NULLABLE, constraints.nullable);
    node.set_optional(PRIMARY_KEY, constraints.primary_key);
    node.set_optional(UNIQUE, constraints.unique);
    node
}

fn parse_bool(attribute: &str, value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoreError::InvalidBoolean {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
    }
}

/// Rebuilds an [`AttributeSpec`] from a node produced by [`to_tree`].
///
/// Every attribute goes through the regular setters, so blank `value` text is
/// dropped and `defaultValueNumeric="GENERATED_BY_DEFAULT"` becomes
/// `autoIncrement`. The node name itself is not checked.
///
/// # Errors
///
/// Fails on a missing `name`, an unknown attribute, a malformed boolean, or a
/// child other than a single `constraints` node.
pub fn from_tree(node: &Node) -> Result<AttributeSpec> {
    let name = node.attribute(NAME).ok_or_else(|| CoreError::MissingAttribute {
        node: node.name.clone(),
        attribute: NAME,
    })?;
    let mut spec = AttributeSpec::new(name);

    for attr in &node.attributes {
        let value = attr.value.as_str();
        match attr.name.as_str() {
            NAME => {}
            TYPE => spec.set_data_type(value),
            DEFAULT_VALUE => spec.set_default_value(value),
            DEFAULT_VALUE_NUMERIC => spec.set_default_value_numeric(value),
            DEFAULT_VALUE_DATE => spec.set_default_value_date(value),
            DEFAULT_VALUE_BOOLEAN => {
                spec.set_default_value_boolean(parse_bool(DEFAULT_VALUE_BOOLEAN, value)?);
            }
            VALUE => spec.set_value(value),
            VALUE_NUMERIC => spec.set_value_numeric(value),
            VALUE_BOOLEAN => spec.set_value_boolean(parse_bool(VALUE_BOOLEAN, value)?),
            VALUE_DATE => spec.set_value_date(value),
            AUTO_INCREMENT => spec.set_auto_increment(parse_bool(AUTO_INCREMENT, value)?),
            other => {
                return Err(CoreError::UnknownAttribute {
                    node: node.name.clone(),
                    attribute: other.to_string(),
                });
            }
        }
    }

    let mut seen_constraints = false;
    for child in &node.children {
        if child.name != CONSTRAINTS || seen_constraints {
            return Err(CoreError::UnexpectedChild {
                node: node.name.clone(),
                child: child.name.clone(),
            });
        }
        seen_constraints = true;
        spec.set_constraints(constraints_from_tree(child)?);
    }

    Ok(spec)
}

fn constraints_from_tree(node: &Node) -> Result<ConstraintSpec> {
    if let Some(child) = node.children.first() {
        return Err(CoreError::UnexpectedChild {
            node: node.name.clone(),
            child: child.name.clone(),
        });
    }

    let mut constraints = ConstraintSpec::default();
    for attr in &node.attributes {
        let value = attr.value.as_str();
        match attr.name.as_str() {
            CHECK => constraints.check = Some(value.to_string()),
            FOREIGN_KEY_NAME => constraints.foreign_key_name = Some(value.to_string()),
            REFERENCES => constraints.references = Some(value.to_string()),
            DEFERRABLE => constraints.deferrable = Some(parse_bool(DEFERRABLE, value)?),
            DELETE_CASCADE => constraints.delete_cascade = Some(parse_bool(DELETE_CASCADE, value)?),
            INITIALLY_DEFERRED => {
                constraints.initially_deferred = Some(parse_bool(INITIALLY_DEFERRED, value)?);
            }
            NULLABLE => constraints.nullable = Some(parse_bool(NULLABLE, value)?),
            PRIMARY_KEY => constraints.primary_key = Some(parse_bool(PRIMARY_KEY, value)?),
            UNIQUE => constraints.unique = Some(parse_bool(UNIQUE, value)?),
            other => {
                return Err(CoreError::UnknownAttribute {
                    node: node.name.clone(),
                    attribute: other.to_string(),
                });
            }
        }
    }
    Ok(constraints)
}
