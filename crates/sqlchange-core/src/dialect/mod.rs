//! Database-specific literal rules.
//!
//! Every supported database product differs in how it writes booleans and
//! dates and in which default expressions must stay unquoted. The
//! [`DialectCapabilities`] trait captures exactly those rules; the built-in
//! products are rows of a static table ([`DialectSpec`]) looked up by
//! [`DatabaseProduct`].

mod date;

pub use date::{BAD_DATE_FORMAT, DateShape, DateStyle};

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Literal formatting rules a database backend must provide.
pub trait DialectCapabilities {
    /// Returns false when `value` must be emitted bare (a keyword or a
    /// function call), true when it must be quoted as a string.
    fn should_quote_value(&self, value: &str) -> bool;

    /// Returns the literal for boolean true.
    fn true_boolean_literal(&self) -> &str;

    /// Returns the literal for boolean false.
    fn false_boolean_literal(&self) -> &str;

    /// Renders an ISO-8601 date, time or date-time as a complete literal.
    fn date_literal(&self, iso_date: &str) -> String;
}

impl<D: DialectCapabilities + ?Sized> DialectCapabilities for &D {
    fn should_quote_value(&self, value: &str) -> bool {
        (**self).should_quote_value(value)
    }

    fn true_boolean_literal(&self) -> &str {
        (**self).true_boolean_literal()
    }

    fn false_boolean_literal(&self) -> &str {
        (**self).false_boolean_literal()
    }

    fn date_literal(&self, iso_date: &str) -> String {
        (**self).date_literal(iso_date)
    }
}

/// Database products with built-in literal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProduct {
    /// PostgreSQL.
    Postgresql,
    /// MySQL / MariaDB.
    Mysql,
    /// Oracle Database.
    Oracle,
    /// Microsoft SQL Server.
    Mssql,
    /// SQLite.
    Sqlite,
    /// DuckDB.
    Duckdb,
    /// IBM DB2.
    Db2,
    /// H2.
    H2,
}

impl DatabaseProduct {
    /// All registered products, in registry order.
    pub const ALL: [Self; 8] = [
        Self::Postgresql,
        Self::Mysql,
        Self::Oracle,
        Self::Mssql,
        Self::Sqlite,
        Self::Duckdb,
        Self::Db2,
        Self::H2,
    ];

    /// Returns the canonical identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Oracle => "oracle",
            Self::Mssql => "mssql",
            Self::Sqlite => "sqlite",
            Self::Duckdb => "duckdb",
            Self::Db2 => "db2",
            Self::H2 => "h2",
        }
    }

    /// Returns the literal rules for this product.
    #[must_use]
    pub fn dialect(self) -> &'static DialectSpec {
        // The table is ordered like `ALL`.
        &DIALECTS[self as usize]
    }
}

impl fmt::Display for DatabaseProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DatabaseProduct {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(Self::Postgresql),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "oracle" => Ok(Self::Oracle),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "sqlite" => Ok(Self::Sqlite),
            "duckdb" => Ok(Self::Duckdb),
            "db2" => Ok(Self::Db2),
            "h2" => Ok(Self::H2),
            _ => Err(CoreError::UnknownDialect(s.to_string())),
        }
    }
}

/// Looks up the literal rules for a product identifier.
///
/// # Errors
///
/// Returns [`CoreError::UnknownDialect`] for identifiers not in the registry.
pub fn lookup(id: &str) -> Result<&'static DialectSpec> {
    id.parse::<DatabaseProduct>().map(DatabaseProduct::dialect)
}

/// A row of the built-in dialect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectSpec {
    /// The product these rules belong to.
    pub product: DatabaseProduct,
    /// Literal for boolean true.
    pub true_literal: &'static str,
    /// Literal for boolean false.
    pub false_literal: &'static str,
    /// Bare keywords that must never be quoted (e.g. `CURRENT_TIMESTAMP`).
    pub keywords: &'static [&'static str],
    /// Functions whose calls must never be quoted (e.g. `now`).
    pub functions: &'static [&'static str],
    /// How date literals are written.
    pub date_style: DateStyle,
}

static FUNCTION_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_.]*)\s*\(.*\)$").expect("valid function call regex")
});

impl DialectSpec {
    fn is_keyword(&self, value: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(value))
    }

    fn is_function_call(&self, value: &str) -> bool {
        FUNCTION_CALL
            .captures(value)
            .and_then(|caps| caps.get(1))
            .is_some_and(|name| {
                self.functions
                    .iter()
                    .any(|f| f.eq_ignore_ascii_case(name.as_str()))
            })
    }
}

impl DialectCapabilities for DialectSpec {
    fn should_quote_value(&self, value: &str) -> bool {
        let value = value.trim();
        !(self.is_keyword(value) || self.is_function_call(value))
    }

    fn true_boolean_literal(&self) -> &str {
        self.true_literal
    }

    fn false_boolean_literal(&self) -> &str {
        self.false_literal
    }

    fn date_literal(&self, iso_date: &str) -> String {
        self.date_style.render(iso_date)
    }
}

const ANSI_KEYWORDS: &[&str] = &["CURRENT_TIMESTAMP", "CURRENT_DATE", "CURRENT_TIME"];

static DIALECTS: [DialectSpec; 8] = [
    DialectSpec {
        product: DatabaseProduct::Postgresql,
        true_literal: "TRUE",
        false_literal: "FALSE",
        keywords: &[
            "CURRENT_TIMESTAMP",
            "CURRENT_DATE",
            "CURRENT_TIME",
            "LOCALTIMESTAMP",
            "LOCALTIME",
            "CURRENT_USER",
        ],
        functions: &["now", "nextval", "gen_random_uuid", "uuid_generate_v4", "clock_timestamp"],
        date_style: DateStyle::Iso,
    },
    DialectSpec {
        product: DatabaseProduct::Mysql,
        true_literal: "1",
        false_literal: "0",
        keywords: &["CURRENT_TIMESTAMP", "CURRENT_DATE", "CURRENT_TIME", "LOCALTIMESTAMP"],
        functions: &["now", "uuid", "current_timestamp", "utc_timestamp"],
        date_style: DateStyle::Iso,
    },
    DialectSpec {
        product: DatabaseProduct::Oracle,
        true_literal: "1",
        false_literal: "0",
        keywords: &["SYSDATE", "SYSTIMESTAMP", "CURRENT_TIMESTAMP", "CURRENT_DATE", "USER"],
        functions: &["sys_guid", "to_date", "to_timestamp"],
        date_style: DateStyle::OracleToDate,
    },
    DialectSpec {
        product: DatabaseProduct::Mssql,
        true_literal: "1",
        false_literal: "0",
        keywords: &["CURRENT_TIMESTAMP", "CURRENT_USER"],
        functions: &["getdate", "getutcdate", "sysdatetime", "newid", "newsequentialid"],
        date_style: DateStyle::Iso,
    },
    DialectSpec {
        product: DatabaseProduct::Sqlite,
        true_literal: "1",
        false_literal: "0",
        keywords: ANSI_KEYWORDS,
        functions: &["datetime", "date", "time", "strftime"],
        date_style: DateStyle::Iso,
    },
    DialectSpec {
        product: DatabaseProduct::Duckdb,
        true_literal: "TRUE",
        false_literal: "FALSE",
        keywords: ANSI_KEYWORDS,
        functions: &["now", "nextval", "gen_random_uuid", "current_timestamp"],
        date_style: DateStyle::Iso,
    },
    DialectSpec {
        product: DatabaseProduct::Db2,
        true_literal: "1",
        false_literal: "0",
        keywords: &[
            "CURRENT TIMESTAMP",
            "CURRENT DATE",
            "CURRENT TIME",
            "CURRENT_TIMESTAMP",
            "CURRENT_DATE",
            "CURRENT_TIME",
        ],
        functions: &["generate_unique"],
        date_style: DateStyle::Db2Functions,
    },
    DialectSpec {
        product: DatabaseProduct::H2,
        true_literal: "TRUE",
        false_literal: "FALSE",
        keywords: ANSI_KEYWORDS,
        functions: &["now", "random_uuid", "nextval"],
        date_style: DateStyle::Iso,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_ordered_like_all() {
        for product in DatabaseProduct::ALL {
            assert_eq!(product.dialect().product, product);
        }
    }

    #[test]
    fn test_product_from_str() {
        assert_eq!("postgres".parse::<DatabaseProduct>().unwrap(), DatabaseProduct::Postgresql);
        assert_eq!("SQLServer".parse::<DatabaseProduct>().unwrap(), DatabaseProduct::Mssql);
        assert_eq!(" h2 ".parse::<DatabaseProduct>().unwrap(), DatabaseProduct::H2);
        assert!(matches!(
            "informix".parse::<DatabaseProduct>(),
            Err(CoreError::UnknownDialect(id)) if id == "informix"
        ));
    }

    #[test]
    fn test_product_display_roundtrips() {
        for product in DatabaseProduct::ALL {
            assert_eq!(product.to_string().parse::<DatabaseProduct>().unwrap(), product);
        }
    }

    #[test]
    fn test_lookup() {
        let dialect = lookup("oracle").unwrap();
        assert_eq!(dialect.true_boolean_literal(), "1");
        assert!(lookup("nope").is_err());
    }

    #[test]
    fn test_keywords_are_not_quoted() {
        let pg = DatabaseProduct::Postgresql.dialect();
        assert!(!pg.should_quote_value("CURRENT_TIMESTAMP"));
        assert!(!pg.should_quote_value("current_timestamp"));
        assert!(!pg.should_quote_value("  LOCALTIMESTAMP "));
        assert!(pg.should_quote_value("SYSDATE"));

        let oracle = DatabaseProduct::Oracle.dialect();
        assert!(!oracle.should_quote_value("SYSDATE"));
    }

    #[test]
    fn test_function_calls_are_not_quoted() {
        let pg = DatabaseProduct::Postgresql.dialect();
        assert!(!pg.should_quote_value("now()"));
        assert!(!pg.should_quote_value("nextval('orders_id_seq')"));
        assert!(pg.should_quote_value("getdate()"));

        let mssql = DatabaseProduct::Mssql.dialect();
        assert!(!mssql.should_quote_value("GETDATE()"));
        assert!(!mssql.should_quote_value("newid ()"));
    }

    #[test]
    fn test_plain_text_is_quoted() {
        let mysql = DatabaseProduct::Mysql.dialect();
        assert!(mysql.should_quote_value("active"));
        assert!(mysql.should_quote_value("now"));
        assert!(mysql.should_quote_value("O'Brien"));
        assert!(mysql.should_quote_value(""));
    }

    #[test]
    fn test_db2_space_keywords() {
        let db2 = DatabaseProduct::Db2.dialect();
        assert!(!db2.should_quote_value("CURRENT TIMESTAMP"));
        assert_eq!(db2.date_literal("2024-05-01"), "DATE('2024-05-01')");
    }

    #[test]
    fn test_product_serde() {
        let json = serde_json::to_string(&DatabaseProduct::Mssql).unwrap();
        assert_eq!(json, "\"mssql\"");
        let back: DatabaseProduct = serde_json::from_str("\"duckdb\"").unwrap();
        assert_eq!(back, DatabaseProduct::Duckdb);
    }
}
