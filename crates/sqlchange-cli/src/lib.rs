//! Command implementations for the `sqlchange` tool.
//!
//! Each command takes the raw JSON canonical tree of one column and returns
//! the text to print, so the binary stays a thin argument/IO layer.

use clap::ValueEnum;
use sqlchange_core::{
    DatabaseProduct, DialectCapabilities, Node, default_clause, from_tree, resolve_default,
    resolve_value, to_tree_with_kind,
};
use tracing::debug;

/// Errors raised by command implementations.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input could not be decoded into a column specification.
    #[error(transparent)]
    Core(#[from] sqlchange_core::CoreError),
}

/// Result type for command implementations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Output format for the `tree` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TreeFormat {
    /// XML element.
    #[default]
    Xml,
    /// Pretty-printed JSON document.
    Json,
}

fn parse_node(input: &str) -> Result<Node> {
    Ok(Node::from_json(input)?)
}

/// Resolves the default and current value literals of a column.
///
/// # Errors
///
/// Fails if `input` is not a valid canonical column tree.
pub fn render(input: &str, product: DatabaseProduct) -> Result<String> {
    let node = parse_node(input)?;
    let spec = from_tree(&node)?;
    let dialect = product.dialect();
    debug!(column = spec.name(), dialect = %product, "resolving literals");

    let mut out = format!("column: {}\ndialect: {product}\n", spec.name());
    out.push_str(&format!("default: {}\n", resolve_default(&spec, dialect)));
    let clause = default_clause(&spec, dialect).unwrap_or_else(|| "(none)".to_string());
    out.push_str(&format!("clause: {clause}\n"));
    if let Some(value) = resolve_value(&spec, dialect) {
        out.push_str(&format!("value: {value}\n"));
    }
    if spec.is_auto_increment() {
        out.push_str("autoIncrement: true\n");
    }
    Ok(out)
}

/// Parses and re-emits a column tree in canonical order.
///
/// The node name of the input is preserved.
///
/// # Errors
///
/// Fails if `input` is not a valid canonical column tree.
pub fn tree(input: &str, format: TreeFormat) -> Result<String> {
    let node = parse_node(input)?;
    let spec = from_tree(&node)?;
    let canonical = to_tree_with_kind(&spec, &node.name);
    match format {
        TreeFormat::Xml => Ok(canonical.to_string()),
        TreeFormat::Json => Ok(canonical.to_json()?),
    }
}

/// Lists the registered dialects with their boolean literals.
#[must_use]
pub fn dialects() -> String {
    let mut out = format!("{:<12} {:<8} {:<8}\n", "DIALECT", "TRUE", "FALSE");
    for product in DatabaseProduct::ALL {
        let dialect = product.dialect();
        out.push_str(&format!(
            "{:<12} {:<8} {:<8}\n",
            product.id(),
            dialect.true_boolean_literal(),
            dialect.false_boolean_literal()
        ));
    }
    out
}
