//! Literal resolution for default and current values.
//!
//! [`resolve_default`] turns the default slot of an [`AttributeSpec`] into
//! the SQL fragment used after `DEFAULT`. [`resolve_value`] does the same for
//! the current-value slot, used by data-seeding changes. Both are pure and
//! consult the dialect only through [`DialectCapabilities`].

use std::sync::LazyLock;

use regex::Regex;

use crate::attribute::AttributeSpec;
use crate::dialect::DialectCapabilities;
use crate::value::ValueVariant;

/// The SQL NULL keyword.
pub const NULL: &str = "NULL";

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Wraps `text` in single quotes, doubling embedded quotes.
#[must_use]
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Returns true if `literal` consists of ASCII digits only.
///
/// Signs, decimal points and exponents do not count: `"1.0"` and `"-1"` are
/// not digit-only and get quoted when used as boolean literals.
#[must_use]
pub fn is_digits_only(literal: &str) -> bool {
    DIGITS_ONLY.is_match(literal)
}

fn text_literal<D: DialectCapabilities + ?Sized>(dialect: &D, text: &str) -> String {
    if dialect.should_quote_value(text) {
        quote_literal(text)
    } else {
        text.to_string()
    }
}

fn boolean_literal<D: DialectCapabilities + ?Sized>(dialect: &D, value: bool) -> String {
    let literal = if value {
        dialect.true_boolean_literal()
    } else {
        dialect.false_boolean_literal()
    };
    if is_digits_only(literal) {
        literal.to_string()
    } else {
        format!("'{literal}'")
    }
}

/// Resolves the default value of `spec` to a SQL literal for `dialect`.
///
/// Text equal to `null` (any case) yields the bare `NULL` keyword; other
/// text is left bare only when the dialect says so, and quoted otherwise.
/// Numeric text is emitted verbatim. Booleans go through the dialect's
/// literal pair and are quoted unless the literal is digits only. Dates are
/// delegated to [`DialectCapabilities::date_literal`]. With no default at
/// all the result is `NULL`.
#[must_use]
pub fn resolve_default<D: DialectCapabilities + ?Sized>(
    spec: &AttributeSpec,
    dialect: &D,
) -> String {
    match spec.default_variant() {
        ValueVariant::Text(text) if text.eq_ignore_ascii_case("null") => NULL.to_string(),
        ValueVariant::Text(text) => text_literal(dialect, text),
        ValueVariant::Numeric(number) => number.clone(),
        ValueVariant::Boolean(value) => boolean_literal(dialect, *value),
        ValueVariant::Date(date) => dialect.date_literal(date),
        ValueVariant::None => NULL.to_string(),
    }
}

/// Resolves the current value of `spec` to a SQL literal for `dialect`.
///
/// Follows the same rules as [`resolve_default`] except that text is never
/// mapped to the `NULL` keyword. Returns `None` when no value is set.
#[must_use]
pub fn resolve_value<D: DialectCapabilities + ?Sized>(
    spec: &AttributeSpec,
    dialect: &D,
) -> Option<String> {
    match spec.value_variant() {
        ValueVariant::Text(text) => Some(text_literal(dialect, text)),
        ValueVariant::Numeric(number) => Some(number.clone()),
        ValueVariant::Boolean(value) => Some(boolean_literal(dialect, *value)),
        ValueVariant::Date(date) => Some(dialect.date_literal(date)),
        ValueVariant::None => None,
    }
}

/// Returns `DEFAULT <literal>` when `spec` has a default value.
#[must_use]
pub fn default_clause<D: DialectCapabilities + ?Sized>(
    spec: &AttributeSpec,
    dialect: &D,
) -> Option<String> {
    spec.has_default_value()
        .then(|| format!("DEFAULT {}", resolve_default(spec, dialect)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DatabaseProduct;

    /// A dialect that quotes everything and writes booleans as Y/N.
    struct YesNo;

    impl DialectCapabilities for YesNo {
        fn should_quote_value(&self, _value: &str) -> bool {
            true
        }

        fn true_boolean_literal(&self) -> &str {
            "Y"
        }

        fn false_boolean_literal(&self) -> &str {
            "N"
        }

        fn date_literal(&self, iso_date: &str) -> String {
            format!("DATE '{iso_date}'")
        }
    }

    /// A dialect that never quotes and writes booleans as bare digits.
    struct Bare(&'static str);

    impl DialectCapabilities for Bare {
        fn should_quote_value(&self, _value: &str) -> bool {
            false
        }

        fn true_boolean_literal(&self) -> &str {
            self.0
        }

        fn false_boolean_literal(&self) -> &str {
            "0"
        }

        fn date_literal(&self, iso_date: &str) -> String {
            iso_date.to_string()
        }
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("plain"), "'plain'");
        assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
        assert_eq!(quote_literal("''"), "''''''");
    }

    #[test]
    fn test_text_default_is_escaped() {
        let spec = AttributeSpec::new("owner").with_default_value("O'Brien");
        assert_eq!(resolve_default(&spec, &YesNo), "'O''Brien'");
    }

    #[test]
    fn test_text_default_left_bare_when_dialect_says_so() {
        let spec = AttributeSpec::new("owner").with_default_value("O'Brien");
        assert_eq!(resolve_default(&spec, &Bare("1")), "O'Brien");
    }

    #[test]
    fn test_null_keyword_in_any_case() {
        for text in ["null", "NULL", "Null", "nUlL"] {
            let spec = AttributeSpec::new("c").with_default_value(text);
            assert_eq!(resolve_default(&spec, &YesNo), "NULL");
        }
        let spec = AttributeSpec::new("c").with_default_value(" null ");
        assert_eq!(resolve_default(&spec, &YesNo), "' null '");
    }

    #[test]
    fn test_numeric_default_is_verbatim() {
        let spec = AttributeSpec::new("qty").with_default_value_numeric("-12.50");
        assert_eq!(resolve_default(&spec, &YesNo), "-12.50");
    }

    #[test]
    fn test_boolean_digits_are_bare() {
        let spec = AttributeSpec::new("active").with_default_value_boolean(true);
        assert_eq!(resolve_default(&spec, &Bare("1")), "1");
        let spec = AttributeSpec::new("active").with_default_value_boolean(false);
        assert_eq!(resolve_default(&spec, &Bare("1")), "0");
    }

    #[test]
    fn test_boolean_tokens_are_quoted() {
        let spec = AttributeSpec::new("active").with_default_value_boolean(true);
        assert_eq!(resolve_default(&spec, &YesNo), "'Y'");
        let spec = AttributeSpec::new("active").with_default_value_boolean(false);
        assert_eq!(resolve_default(&spec, &YesNo), "'N'");
    }

    #[test]
    fn test_boolean_digit_check_is_strict() {
        // Known edge case: "1.0" and "-1" are not digits only.
        let spec = AttributeSpec::new("active").with_default_value_boolean(true);
        assert_eq!(resolve_default(&spec, &Bare("1.0")), "'1.0'");
        assert_eq!(resolve_default(&spec, &Bare("-1")), "'-1'");
        assert_eq!(resolve_default(&spec, &Bare("")), "''");
        assert!(!is_digits_only("\u{0661}"));
    }

    #[test]
    fn test_date_default_is_delegated() {
        let spec = AttributeSpec::new("since").with_default_value_date("2024-01-01");
        assert_eq!(resolve_default(&spec, &YesNo), "DATE '2024-01-01'");
    }

    #[test]
    fn test_no_default_is_null() {
        let spec = AttributeSpec::new("c");
        assert_eq!(resolve_default(&spec, &YesNo), "NULL");
        let spec = AttributeSpec::new("id").with_default_value_numeric("GENERATED_BY_DEFAULT");
        assert_eq!(resolve_default(&spec, &YesNo), "NULL");
    }

    #[test]
    fn test_current_value_is_ignored_by_default_resolution() {
        let spec = AttributeSpec::new("c").with_value("abc").with_value_numeric("1");
        assert_eq!(resolve_default(&spec, &YesNo), "NULL");
    }

    #[test]
    fn test_resolve_value() {
        let dialect = DatabaseProduct::Postgresql.dialect();
        assert_eq!(resolve_value(&AttributeSpec::new("c"), dialect), None);
        assert_eq!(
            resolve_value(&AttributeSpec::new("c").with_value("it's"), dialect).as_deref(),
            Some("'it''s'")
        );
        assert_eq!(
            resolve_value(&AttributeSpec::new("c").with_value("null"), dialect).as_deref(),
            Some("'null'")
        );
        assert_eq!(
            resolve_value(&AttributeSpec::new("c").with_value("now()"), dialect).as_deref(),
            Some("now()")
        );
        assert_eq!(
            resolve_value(&AttributeSpec::new("c").with_value_boolean(true), dialect).as_deref(),
            Some("'TRUE'")
        );
        assert_eq!(
            resolve_value(&AttributeSpec::new("c").with_value_numeric("3"), dialect).as_deref(),
            Some("3")
        );
        assert_eq!(
            resolve_value(&AttributeSpec::new("c").with_value_date("2024-01-01T10:00:00"), dialect)
                .as_deref(),
            Some("'2024-01-01 10:00:00'")
        );
    }

    #[test]
    fn test_default_clause() {
        let dialect = DatabaseProduct::Mysql.dialect();
        let spec = AttributeSpec::new("active").with_default_value_boolean(true);
        assert_eq!(default_clause(&spec, dialect).as_deref(), Some("DEFAULT 1"));

        let spec = AttributeSpec::new("id").with_auto_increment(true);
        assert_eq!(default_clause(&spec, dialect), None);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let dialect = DatabaseProduct::Oracle.dialect();
        let spec = AttributeSpec::new("created").with_default_value_date("2024-03-01T12:00:00");
        assert_eq!(resolve_default(&spec, dialect), resolve_default(&spec, dialect));
    }

    #[test]
    fn test_dyn_dialect() {
        let dialect: &dyn DialectCapabilities = &YesNo;
        let spec = AttributeSpec::new("active").with_default_value_boolean(true);
        assert_eq!(resolve_default(&spec, dialect), "'Y'");
    }
}
