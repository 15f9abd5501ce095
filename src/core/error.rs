//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! the tools domain and the transport layer.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_converts() {
        let err: Error = ToolError::duplicate_tool("analyze_architecture").into();
        assert!(matches!(err, Error::Tool(ToolError::DuplicateTool(_))));
        assert_eq!(
            err.to_string(),
            "Tool error: Duplicate tool: analyze_architecture"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        let err: Error = TransportError::init("handshake refused").into();
        assert!(matches!(err, Error::Transport(TransportError::InitError(_))));
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: handshake refused"
        );
    }
}
