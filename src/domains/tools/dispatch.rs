//! Dispatch Engine - the single entry point for tool invocations.
//!
//! A dispatch looks the tool up, resolves the arguments against its
//! parameter contract, and runs the bound generator. Dispatching touches no
//! shared mutable state, so one [`Dispatcher`] can serve any number of
//! concurrent requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::arguments::ResolvedArguments;
use super::error::ToolError;
use super::registry::ToolRegistry;

// ============================================================================
// Invocation
// ============================================================================

/// One request naming a tool and supplying its argument values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub tool_name: String,
    pub arguments: BTreeMap<String, String>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Add an argument. A repeated key replaces the earlier value.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Decode an invocation from transport-level JSON arguments.
    ///
    /// Strings pass through, `null` counts as absent and arrays of strings
    /// are joined into a comma-separated list. Anything else is rejected.
    pub fn from_json(
        tool_name: impl Into<String>,
        arguments: Option<Map<String, Value>>,
    ) -> Result<Self, ToolError> {
        let mut invocation = Self::new(tool_name);

        for (name, value) in arguments.unwrap_or_default() {
            let text = match value {
                Value::String(s) => s,
                Value::Null => continue,
                Value::Array(items) => join_string_array(&name, items)?,
                _ => return Err(ToolError::invalid_argument_type(name, "string")),
            };
            invocation.arguments.insert(name, text);
        }

        Ok(invocation)
    }
}

fn join_string_array(name: &str, items: Vec<Value>) -> Result<String, ToolError> {
    let parts = items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            _ => Err(ToolError::invalid_argument_type(name, "string")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(", "))
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Routes invocations to their generators through a read-only registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over an already populated registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Create a dispatcher over the default five-tool catalog.
    pub fn with_default_tools() -> Result<Self, ToolError> {
        Ok(Self::new(ToolRegistry::with_default_tools()?.into_shared()))
    }

    /// The registry this dispatcher reads from.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatch one invocation and return the generated text.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<String, ToolError> {
        let tool = self
            .registry
            .get(&invocation.tool_name)
            .ok_or_else(|| ToolError::unknown_tool(&invocation.tool_name))?;

        let resolved = ResolvedArguments::resolve(&tool.definition, &invocation.arguments)?;

        Ok((tool.generator)(&resolved))
    }

    /// Convenience wrapper over [`dispatch`](Self::dispatch) for borrowed pairs.
    pub fn call(&self, tool_name: &str, arguments: &[(&str, &str)]) -> Result<String, ToolError> {
        let invocation = arguments
            .iter()
            .fold(Invocation::new(tool_name), |inv, (k, v)| {
                inv.with_argument(*k, *v)
            });
        self.dispatch(&invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dispatcher() -> Dispatcher {
        Dispatcher::with_default_tools().unwrap()
    }

    fn object(value: Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn test_unknown_tool() {
        let err = dispatcher().call("nonexistent_tool", &[]).unwrap_err();
        assert_eq!(err, ToolError::unknown_tool("nonexistent_tool"));
    }

    #[test]
    fn test_missing_required_argument_is_named() {
        let err = dispatcher()
            .call("analyze_architecture", &[("projectType", "x"), ("goal", "y")])
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::missing_argument("analyze_architecture", "currentStructureDescription")
        );
    }

    #[test]
    fn test_optional_argument_may_be_absent() {
        let text = dispatcher()
            .call(
                "generate_test_template",
                &[("className", "UserService"), ("testType", "unit")],
            )
            .unwrap();
        assert!(text.contains("class UserServiceTest"));
        assert!(text.contains("subject = UserService()"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let invocation = Invocation::new("check_best_practices")
            .with_argument("codeSnippet", "val x = a!!")
            .with_argument("codeSnippet", "val x = 1");
        let text = dispatcher().dispatch(&invocation).unwrap();
        assert!(text.contains("Code looks clean"));
    }

    #[test]
    fn test_from_json_accepts_strings_and_string_arrays() {
        let invocation = Invocation::from_json(
            "suggest_cloud_solution",
            object(json!({
                "usageScenario": "CRUD API",
                "requirements": ["Serverless", "SQL"],
                "note": null,
            })),
        )
        .unwrap();

        assert_eq!(invocation.arguments["requirements"], "Serverless, SQL");
        assert!(!invocation.arguments.contains_key("note"));
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let err = Invocation::from_json("check_best_practices", object(json!({ "codeSnippet": 42 })))
            .unwrap_err();
        assert_eq!(err, ToolError::invalid_argument_type("codeSnippet", "string"));

        let err = Invocation::from_json(
            "generate_test_template",
            object(json!({ "dependencies": ["A", 1] })),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgumentType { parameter, .. } if parameter == "dependencies"));
    }

    #[test]
    fn test_from_json_without_arguments() {
        let invocation = Invocation::from_json("check_best_practices", None).unwrap();
        assert!(invocation.arguments.is_empty());

        let err = dispatcher().dispatch(&invocation).unwrap_err();
        assert_eq!(
            err,
            ToolError::missing_argument("check_best_practices", "codeSnippet")
        );
    }
}
