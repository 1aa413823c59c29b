//! Error types for the attribute model.
//!
//! Literal resolution and tree emission are total and never fail; errors only
//! arise when reading external input back in (canonical trees, dialect ids).

/// Errors raised while decoding attribute specifications.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested database product is not registered.
    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    /// A required attribute is missing from a node.
    #[error("Node <{node}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Name of the node being decoded.
        node: String,
        /// The missing attribute.
        attribute: &'static str,
    },

    /// A boolean attribute does not hold `true` or `false`.
    #[error("Attribute '{attribute}' expects true or false, got '{value}'")]
    InvalidBoolean {
        /// The attribute name.
        attribute: String,
        /// The rejected text.
        value: String,
    },

    /// An attribute is not part of the field mapping.
    #[error("Node <{node}> has unknown attribute '{attribute}'")]
    UnknownAttribute {
        /// Name of the node being decoded.
        node: String,
        /// The unrecognized attribute.
        attribute: String,
    },

    /// A child node is not allowed at this position.
    #[error("Node <{node}> has unexpected child <{child}>")]
    UnexpectedChild {
        /// Name of the parent node.
        node: String,
        /// Name of the rejected child.
        child: String,
    },

    /// JSON (de)serialization of a tree document failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for attribute model operations.
pub type Result<T> = std::result::Result<T, CoreError>;
