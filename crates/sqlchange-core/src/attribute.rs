//! The column/attribute specification carried by schema changes.
//!
//! An [`AttributeSpec`] is what a changelog `<column>` entry turns into: a
//! name, an optional declared type, a current value (used by data-seeding
//! changes), a default value (used for `DEFAULT` clauses), an autoincrement
//! flag and optional constraints.
//!
//! Setters never reject input. Two of them apply compatibility rules:
//!
//! - [`AttributeSpec::set_value`] ignores blank text, so a value supplied as
//!   an attribute is not erased by an empty tag body parsed afterwards.
//! - [`AttributeSpec::set_default_value_numeric`] turns the
//!   [`GENERATED_BY_DEFAULT`] marker into `auto_increment = true`.

use tracing::debug;

use crate::constraint::ConstraintSpec;
use crate::value::{ValueKind, ValueVariant, is_blank};

/// Legacy marker accepted in `defaultValueNumeric` meaning "identity column".
///
/// Backward-compatibility shim: the marker is never stored as a default and is
/// never rendered as SQL.
pub const GENERATED_BY_DEFAULT: &str = "GENERATED_BY_DEFAULT";

/// Column-level change specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSpec {
    name: String,
    data_type: Option<String>,
    value: ValueVariant,
    default: ValueVariant,
    auto_increment: Option<bool>,
    constraints: Option<ConstraintSpec>,
}

impl AttributeSpec {
    /// Creates a specification with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the column name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the declared type, if any.
    #[must_use]
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    /// Sets the declared type.
    pub fn set_data_type(&mut self, data_type: impl Into<String>) {
        self.data_type = Some(data_type.into());
    }

    /// Returns the whole current-value slot.
    #[must_use]
    pub const fn value_variant(&self) -> &ValueVariant {
        &self.value
    }

    /// Returns the current text value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Sets the current text value.
    ///
    /// Blank input is discarded without touching a previously stored value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if is_blank(&value) {
            debug!(column = %self.name, "discarding blank value");
            return;
        }
        self.value.assign(ValueVariant::Text(value));
    }

    /// Returns the current numeric value.
    #[must_use]
    pub fn value_numeric(&self) -> Option<&str> {
        self.value.as_numeric()
    }

    /// Sets the current numeric value.
    pub fn set_value_numeric(&mut self, value: impl Into<String>) {
        self.value.assign(ValueVariant::Numeric(value.into()));
    }

    /// Returns the current boolean value.
    #[must_use]
    pub const fn value_boolean(&self) -> Option<bool> {
        self.value.as_boolean()
    }

    /// Sets the current boolean value.
    pub fn set_value_boolean(&mut self, value: bool) {
        self.value.assign(ValueVariant::Boolean(value));
    }

    /// Returns the current date value.
    #[must_use]
    pub fn value_date(&self) -> Option<&str> {
        self.value.as_date()
    }

    /// Sets the current date value.
    pub fn set_value_date(&mut self, value: impl Into<String>) {
        self.value.assign(ValueVariant::Date(value.into()));
    }

    /// Clears the current value regardless of its kind.
    pub fn clear_value(&mut self) {
        self.value = ValueVariant::None;
    }

    /// Returns the whole default-value slot.
    #[must_use]
    pub const fn default_variant(&self) -> &ValueVariant {
        &self.default
    }

    /// Returns the default text value.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_text()
    }

    /// Sets the default text value.
    pub fn set_default_value(&mut self, value: impl Into<String>) {
        self.default.assign(ValueVariant::Text(value.into()));
    }

    /// Returns the default numeric value.
    #[must_use]
    pub fn default_value_numeric(&self) -> Option<&str> {
        self.default.as_numeric()
    }

    /// Sets the default numeric value.
    ///
    /// [`GENERATED_BY_DEFAULT`] is intercepted: it marks the column as
    /// autoincrement and leaves the default slot untouched.
    pub fn set_default_value_numeric(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == GENERATED_BY_DEFAULT {
            debug!(column = %self.name, "default marker mapped to autoincrement");
            self.auto_increment = Some(true);
            return;
        }
        self.default.assign(ValueVariant::Numeric(value));
    }

    /// Returns the default boolean value.
    #[must_use]
    pub const fn default_value_boolean(&self) -> Option<bool> {
        self.default.as_boolean()
    }

    /// Sets the default boolean value.
    pub fn set_default_value_boolean(&mut self, value: bool) {
        self.default.assign(ValueVariant::Boolean(value));
    }

    /// Returns the default date value.
    #[must_use]
    pub fn default_value_date(&self) -> Option<&str> {
        self.default.as_date()
    }

    /// Sets the default date value.
    pub fn set_default_value_date(&mut self, value: impl Into<String>) {
        self.default.assign(ValueVariant::Date(value.into()));
    }

    /// Clears the default value regardless of its kind.
    pub fn clear_default(&mut self) {
        self.default = ValueVariant::None;
    }

    /// Clears the default value only if it is of `kind`.
    pub fn clear_default_kind(&mut self, kind: ValueKind) {
        self.default.clear_kind(kind);
    }

    /// Returns true if any default encoding is present.
    ///
    /// The autoincrement flag is not a default value.
    #[must_use]
    pub const fn has_default_value(&self) -> bool {
        self.default.is_some()
    }

    /// Returns the autoincrement flag as supplied (`None` when unspecified).
    #[must_use]
    pub const fn auto_increment(&self) -> Option<bool> {
        self.auto_increment
    }

    /// Returns true only if autoincrement was explicitly enabled.
    #[must_use]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment == Some(true)
    }

    /// Sets the autoincrement flag.
    pub fn set_auto_increment(&mut self, value: bool) {
        self.auto_increment = Some(value);
    }

    /// Returns the constraints, if any.
    #[must_use]
    pub const fn constraints(&self) -> Option<&ConstraintSpec> {
        self.constraints.as_ref()
    }

    /// Returns the constraints, creating an empty set if absent.
    pub fn constraints_mut(&mut self) -> &mut ConstraintSpec {
        self.constraints.get_or_insert_with(ConstraintSpec::default)
    }

    /// Replaces the constraints.
    pub fn set_constraints(&mut self, constraints: ConstraintSpec) {
        self.constraints = Some(constraints);
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, data_type: impl Into<String>) -> Self {
        self.set_data_type(data_type);
        self
    }

    /// Sets the current text value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Sets the current numeric value.
    #[must_use]
    pub fn with_value_numeric(mut self, value: impl Into<String>) -> Self {
        self.set_value_numeric(value);
        self
    }

    /// Sets the current boolean value.
    #[must_use]
    pub fn with_value_boolean(mut self, value: bool) -> Self {
        self.set_value_boolean(value);
        self
    }

    /// Sets the current date value.
    #[must_use]
    pub fn with_value_date(mut self, value: impl Into<String>) -> Self {
        self.set_value_date(value);
        self
    }

    /// Sets the default text value.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.set_default_value(value);
        self
    }

    /// Sets the default numeric value.
    #[must_use]
    pub fn with_default_value_numeric(mut self, value: impl Into<String>) -> Self {
        self.set_default_value_numeric(value);
        self
    }

    /// Sets the default boolean value.
    #[must_use]
    pub fn with_default_value_boolean(mut self, value: bool) -> Self {
        self.set_default_value_boolean(value);
        self
    }

    /// Sets the default date value.
    #[must_use]
    pub fn with_default_value_date(mut self, value: impl Into<String>) -> Self {
        self.set_default_value_date(value);
        self
    }

    /// Sets the autoincrement flag.
    #[must_use]
    pub fn with_auto_increment(mut self, value: bool) -> Self {
        self.set_auto_increment(value);
        self
    }

    /// Sets the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSpec) -> Self {
        self.set_constraints(constraints);
        self
    }
}
