//! Errors surfaced by the discovery tools.

use crate::search::FilterPathError;
use thiserror::Error;

/// Failure of a discovery tool call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolError {
    /// The caller supplied no identifier or out-of-range parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record matched the supplied identifiers.
    #[error("{kind} not found: {reference}")]
    NotFound {
        /// Record kind that was looked up.
        kind: &'static str,
        /// Identifier or name that failed to resolve.
        reference: String,
    },

    /// The registry holds no MCP servers at all.
    #[error("no MCP servers found in registry")]
    NoServersRegistered,

    /// A descriptor or filter could not be processed.
    #[error("failed to evaluate filters: {0}")]
    Filter(#[from] FilterPathError),
}

impl ToolError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn not_found(kind: &'static str, reference: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            reference: reference.into(),
        }
    }
}

/// Result type for discovery tool calls.
pub type ToolResult<T> = Result<T, ToolError>;
