//! # sqlchange-core
//!
//! Column-level building blocks for a schema-migration engine.
//!
//! A schema change describes its columns with [`AttributeSpec`]: a name, an
//! optional type, a current value and a default value (each one of text,
//! numeric, boolean or date), an autoincrement flag and optional
//! [`ConstraintSpec`]. This crate turns those descriptions into
//! dialect-correct SQL literals and into a canonical tree for persistence.
//!
//! - [`resolve_default`] / [`resolve_value`] produce literals through a
//!   [`DialectCapabilities`] implementation.
//! - [`to_tree`] / [`from_tree`] convert to and from the canonical [`Node`].
//!
//! ```rust
//! use sqlchange_core::{AttributeSpec, DatabaseProduct, resolve_default, to_tree};
//!
//! let spec = AttributeSpec::new("owner")
//!     .with_type("VARCHAR(64)")
//!     .with_default_value("O'Brien");
//!
//! let postgres = DatabaseProduct::Postgresql.dialect();
//! assert_eq!(resolve_default(&spec, postgres), "'O''Brien'");
//!
//! let node = to_tree(&spec);
//! assert_eq!(
//!     node.to_string(),
//!     r#"<column name="owner" type="VARCHAR(64)" defaultValue="O'Brien"/>"#
//! );
//! ```

pub mod attribute;
pub mod codec;
pub mod constraint;
pub mod dialect;
pub mod error;
pub mod node;
pub mod resolve;
pub mod value;

pub use attribute::{AttributeSpec, GENERATED_BY_DEFAULT};
pub use codec::{from_tree, to_tree, to_tree_with_kind};
pub use constraint::ConstraintSpec;
pub use dialect::{DatabaseProduct, DialectCapabilities, DialectSpec, lookup};
pub use error::{CoreError, Result};
pub use node::{Attribute, Node};
pub use resolve::{default_clause, quote_literal, resolve_default, resolve_value};
pub use value::{ValueKind, ValueVariant};
