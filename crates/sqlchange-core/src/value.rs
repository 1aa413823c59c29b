//! Mutually exclusive value encodings for a single value slot.
//!
//! A column carries two independent slots (current value and default value),
//! each holding at most one [`ValueVariant`]. Older changelogs may still supply
//! several encodings for the same slot; [`ValueVariant::assign`] resolves those
//! by precedence so the rendered literal is the same one the independent-field
//! representation would have produced.

use std::fmt;

use tracing::debug;

/// The kind of a populated value slot, in precedence order.
///
/// When more than one encoding is offered for the same slot, the kind that
/// sorts first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// Free text, quoted according to the dialect.
    Text,
    /// Numeric text, always emitted verbatim.
    Numeric,
    /// Boolean, rendered through the dialect's literal pair.
    Boolean,
    /// ISO-8601 date, time or date-time text.
    Date,
}

impl ValueKind {
    /// Returns the lowercase label used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single value slot: nothing, or exactly one typed encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueVariant {
    /// No value supplied.
    #[default]
    None,
    /// Text value.
    Text(String),
    /// Numeric literal kept as text (never parsed, never quoted).
    Numeric(String),
    /// Boolean value.
    Boolean(bool),
    /// Date/time text in ISO-8601 form.
    Date(String),
}

impl ValueVariant {
    /// Returns the kind of the stored value, or `None` for an empty slot.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::None => None,
            Self::Text(_) => Some(ValueKind::Text),
            Self::Numeric(_) => Some(ValueKind::Numeric),
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Date(_) => Some(ValueKind::Date),
        }
    }

    /// Returns true if no value is stored.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if a value is stored.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the text payload if this is a [`ValueVariant::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload if this is a [`ValueVariant::Numeric`].
    #[must_use]
    pub fn as_numeric(&self) -> Option<&str> {
        match self {
            Self::Numeric(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload if this is a [`ValueVariant::Boolean`].
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date payload if this is a [`ValueVariant::Date`].
    #[must_use]
    pub fn as_date(&self) -> Option<&str> {
        match self {
            Self::Date(s) => Some(s),
            _ => None,
        }
    }

    /// Offers `candidate` to this slot.
    ///
    /// The candidate replaces the stored value when the slot is empty, when it
    /// has the same kind (last write wins), or when it outranks the stored
    /// kind. A lower-ranked candidate is dropped. Returns whether the slot
    /// changed.
    pub fn assign(&mut self, candidate: Self) -> bool {
        let Some(new_kind) = candidate.kind() else {
            return false;
        };
        match self.kind() {
            Some(current) if new_kind > current => {
                debug!(
                    current = %current,
                    ignored = %new_kind,
                    "ignoring lower-precedence value encoding"
                );
                false
            }
            _ => {
                *self = candidate;
                true
            }
        }
    }

    /// Clears the slot if it currently holds a value of `kind`.
    pub fn clear_kind(&mut self, kind: ValueKind) {
        if self.kind() == Some(kind) {
            *self = Self::None;
        }
    }
}

/// Returns true for empty or whitespace-only text.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
