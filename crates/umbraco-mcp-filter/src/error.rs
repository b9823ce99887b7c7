//! Error types for tool handlers.

use thiserror::Error;

/// Errors a tool handler can return.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Invalid arguments for tool.
    #[error("invalid arguments for tool {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// A pre-execution check rejected the call.
    #[error("pre-execution check failed for tool {tool}: {reason}")]
    PreconditionFailed { tool: String, reason: String },

    /// The CMS API call failed.
    #[error("API request failed: {0}")]
    Api(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
