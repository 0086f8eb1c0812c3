//! Errors raised while handling a tool invocation.
//!
//! Every variant is turned into an `"Error: <message>"` envelope by the
//! dispatcher; none of them reach the transport.

use postiz_client::ClientError;
use thiserror::Error;

use crate::tools::ToolName;

pub type ToolResult<T> = Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: ToolName,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to render response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Whether the failure was reported by the remote service.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, ToolError::Client(e) if e.is_remote())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_message() {
        let err = ToolError::UnknownTool("unknown_tool".to_string());
        assert_eq!(err.to_string(), "Unknown tool: unknown_tool");
        assert!(!err.is_remote());
    }

    #[test]
    fn test_client_error_is_transparent() {
        let err: ToolError = ClientError::api_error(500, "boom").into();
        assert_eq!(err.to_string(), "Postiz API error: 500 - boom");
        assert!(err.is_remote());
    }

    #[test]
    fn test_invalid_arguments_names_tool() {
        let source = serde_json::from_str::<crate::tools::DeletePostParams>("{}").unwrap_err();
        let err = ToolError::InvalidArguments {
            tool: ToolName::DeletePost,
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid arguments for postiz_delete_post:"));
        assert!(msg.contains("postId"));
    }
}
