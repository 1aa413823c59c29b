//! Date literal formatting.
//!
//! Changelogs carry dates as ISO-8601 text. Each dialect decides how such a
//! value becomes a SQL literal; the shape of the text (date, time, or
//! date-time) is detected first so every style can pick a matching form.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

/// Prefix emitted for text that is not a recognizable ISO date.
pub const BAD_DATE_FORMAT: &str = "BAD_DATE_FORMAT:";

/// The detected shape of an ISO date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `YYYY-MM-DD`.
    Date,
    /// `HH:MM:SS[.fff]`.
    Time {
        /// Whether fractional seconds are present.
        fractional: bool,
    },
    /// `YYYY-MM-DD[T ]HH:MM:SS[.fff]`.
    DateTime {
        /// Whether fractional seconds are present.
        fractional: bool,
    },
}

impl DateShape {
    /// Classifies `text`, returning `None` when it is not a valid ISO value.
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok() {
            return Some(Self::Date);
        }
        if NaiveTime::parse_from_str(text, "%H:%M:%S%.f").is_ok() {
            return Some(Self::Time {
                fractional: text.contains('.'),
            });
        }
        let normalized = text.replacen('T', " ", 1);
        if NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S%.f").is_ok() {
            return Some(Self::DateTime {
                fractional: normalized.contains('.'),
            });
        }
        None
    }
}

/// How a dialect writes date literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Plain quoted ISO text with the `T` separator replaced by a space.
    Iso,
    /// Oracle `to_date(...)` / `to_timestamp(...)` with an explicit mask.
    OracleToDate,
    /// DB2 `DATE(...)`, `TIME(...)` and `TIMESTAMP(...)` casts.
    Db2Functions,
}

impl DateStyle {
    /// Renders `iso_date` as a SQL literal in this style.
    #[must_use]
    pub fn render(self, iso_date: &str) -> String {
        let Some(shape) = DateShape::classify(iso_date) else {
            warn!(value = iso_date, "unrecognized date literal");
            return format!("{BAD_DATE_FORMAT}{iso_date}");
        };
        let text = match shape {
            DateShape::DateTime { .. } => iso_date.replacen('T', " ", 1),
            DateShape::Date | DateShape::Time { .. } => iso_date.to_string(),
        };

        match self {
            Self::Iso => format!("'{text}'"),
            Self::OracleToDate => match shape {
                DateShape::Date => format!("to_date('{text}', 'YYYY-MM-DD')"),
                DateShape::Time { fractional: false } => {
                    format!("to_date('{text}', 'HH24:MI:SS')")
                }
                DateShape::Time { fractional: true } => {
                    format!("to_timestamp('{text}', 'HH24:MI:SS.FF')")
                }
                DateShape::DateTime { fractional: false } => {
                    format!("to_date('{text}', 'YYYY-MM-DD HH24:MI:SS')")
                }
                DateShape::DateTime { fractional: true } => {
                    format!("to_timestamp('{text}', 'YYYY-MM-DD HH24:MI:SS.FF')")
                }
            },
            Self::Db2Functions => match shape {
                DateShape::Date => format!("DATE('{text}')"),
                DateShape::Time { fractional: false } => format!("TIME('{text}')"),
                // TIME() has no fractional seconds.
                DateShape::Time { fractional: true } => {
                    warn!(value = iso_date, "fractional time not supported by DB2");
                    format!("{BAD_DATE_FORMAT}{iso_date}")
                }
                DateShape::DateTime { .. } => format!("TIMESTAMP('{text}')"),
            },
        }
    }
}
