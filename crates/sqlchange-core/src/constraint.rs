//! Column-level integrity constraints.

/// Constraints attached to a single column.
///
/// Every field is optional: `None` means "not specified", which is distinct
/// from an explicit `Some(false)`. The distinction survives serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSpec {
    /// CHECK expression.
    pub check: Option<String>,
    /// Name of the foreign key constraint.
    pub foreign_key_name: Option<String>,
    /// Referenced target, e.g. `users(id)`.
    pub references: Option<String>,
    /// Whether the constraint is deferrable.
    pub deferrable: Option<bool>,
    /// Whether deletes cascade to referencing rows.
    pub delete_cascade: Option<bool>,
    /// Whether the constraint is initially deferred.
    pub initially_deferred: Option<bool>,
    /// Whether the column accepts NULL.
    pub nullable: Option<bool>,
    /// Whether the column is (part of) the primary key.
    pub primary_key: Option<bool>,
    /// Whether the column is unique.
    pub unique: Option<bool>,
}

impl ConstraintSpec {
    /// Creates an empty constraint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CHECK expression.
    #[must_use]
    pub fn check(mut self, expr: impl Into<String>) -> Self {
        self.check = Some(expr.into());
        self
    }

    /// Sets the foreign key constraint name.
    #[must_use]
    pub fn foreign_key_name(mut self, name: impl Into<String>) -> Self {
        self.foreign_key_name = Some(name.into());
        self
    }

    /// Sets the referenced target.
    #[must_use]
    pub fn references(mut self, target: impl Into<String>) -> Self {
        self.references = Some(target.into());
        self
    }

    /// Sets deferrability.
    #[must_use]
    pub const fn deferrable(mut self, value: bool) -> Self {
        self.deferrable = Some(value);
        self
    }

    /// Sets ON DELETE CASCADE.
    #[must_use]
    pub const fn delete_cascade(mut self, value: bool) -> Self {
        self.delete_cascade = Some(value);
        self
    }

    /// Sets INITIALLY DEFERRED.
    #[must_use]
    pub const fn initially_deferred(mut self, value: bool) -> Self {
        self.initially_deferred = Some(value);
        self
    }

    /// Sets nullability.
    #[must_use]
    pub const fn nullable(mut self, value: bool) -> Self {
        self.nullable = Some(value);
        self
    }

    /// Sets the primary key flag.
    #[must_use]
    pub const fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = Some(value);
        self
    }

    /// Sets the unique flag.
    #[must_use]
    pub const fn unique(mut self, value: bool) -> Self {
        self.unique = Some(value);
        self
    }

    /// Returns true if no field has been specified.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.check.is_none()
            && self.foreign_key_name.is_none()
            && self.references.is_none()
            && self.deferrable.is_none()
            && self.delete_cascade.is_none()
            && self.initially_deferred.is_none()
            && self.nullable.is_none()
            && self.primary_key.is_none()
            && self.unique.is_none()
    }
}
