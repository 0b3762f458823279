//! Error types for the model crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Identifier does not name a canonical target field.
    #[error("unknown target field: {0}")]
    UnknownField(String),
}
