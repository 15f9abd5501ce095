//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while registering or dispatching tools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A tool with the same name is already registered.
    ///
    /// Only raised while the catalog is being built; the server must not
    /// start with a corrupt catalog.
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required parameter is absent or blank.
    #[error("Missing required argument '{parameter}' for tool '{tool}'")]
    MissingArgument { tool: String, parameter: String },

    /// An argument value could not be read as the declared kind.
    #[error("Invalid argument '{parameter}': expected {expected}")]
    InvalidArgumentType {
        parameter: String,
        expected: &'static str,
    },
}

impl ToolError {
    /// Create a new "duplicate tool" error.
    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(tool: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingArgument {
            tool: tool.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a new "invalid argument type" error.
    pub fn invalid_argument_type(parameter: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidArgumentType {
            parameter: parameter.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(
            ToolError::unknown_tool("nonexistent_tool").to_string(),
            "Unknown tool: nonexistent_tool"
        );

        let err = ToolError::missing_argument("analyze_architecture", "goal");
        assert!(err.to_string().contains("'goal'"));
        assert!(err.to_string().contains("analyze_architecture"));
    }

    #[test]
    fn test_invalid_type_names_expected_kind() {
        assert_eq!(
            ToolError::invalid_argument_type("dependencies", "string").to_string(),
            "Invalid argument 'dependencies': expected string"
        );
    }
}
