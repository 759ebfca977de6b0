//! Error types for node construction.

use thiserror::Error;

/// Raised when a node cannot be built from the supplied fields.
///
/// Only the generic [`Expression`](crate::ast::Expression) constructor can fail;
/// every other node kind is total over its field types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedNodeError {
    /// A generic expression was given an empty symbol
    #[error("malformed expression: empty symbol (with {arity} body nodes)")]
    EmptySymbol { arity: usize },
}

/// Result type for node construction.
pub type Result<T> = std::result::Result<T, MalformedNodeError>;
