//! Error taxonomy for tool dispatch.

use crate::rpc::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};

/// Errors surfaced by tools and the dispatch layer as JSON-RPC errors.
///
/// The `Display` output of each variant IS the caller-visible message, so
/// variants that carry a fully formed message render it verbatim with no
/// extra prefix.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool name was not found in the registry.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
    /// Tool arguments failed validation; the message is surfaced verbatim.
    #[error("{0}")]
    InvalidArguments(String),
    /// The server could not run the tool at all.
    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    /// JSON-RPC error code matching this failure.
    pub fn code(&self) -> i64 {
        match self {
            ToolError::ToolNotFound(_) => METHOD_NOT_FOUND,
            ToolError::InvalidArguments(_) => INVALID_PARAMS,
            ToolError::Internal(_) => INTERNAL_ERROR,
        }
    }
}
