//! Tool Registry - the authoritative catalog of tools.
//!
//! The registry is written once while the server starts and only read
//! afterwards. It holds:
//! - Each tool's definition (name, description, parameter contract)
//! - The generator bound to each tool name

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use super::arguments::ResolvedArguments;
use super::definitions::{
    ArchitectureTool, BestPracticesTool, CloudSolutionTool, DesignPatternTool, TestTemplateTool,
    ToolGenerator, bind,
};
use super::error::ToolError;

// ============================================================================
// Parameter Contracts
// ============================================================================

/// Value kind accepted by a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    String,
}

impl ParameterKind {
    /// JSON-schema type name.
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ParameterKind,
    pub required: bool,
    pub description: String,
}

impl ParameterSpec {
    /// A required string parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::String,
            required: true,
            description: description.into(),
        }
    }

    /// An optional string parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }
}

/// Name, description and parameter contract of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Render the parameter contract as a JSON-schema object.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({
                        "type": p.kind.schema_type(),
                        "description": p.description,
                    }),
                )
            })
            .collect();

        let required: Vec<Value> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::String(p.name.clone()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Generator bound to a registered tool.
pub type GeneratorFn = fn(&ResolvedArguments) -> String;

/// A definition together with its generator.
#[derive(Clone)]
pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub generator: GeneratorFn,
}

/// Tool registry - holds every registered tool in registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry with the fixed five-tool catalog.
    pub fn with_default_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register_generator::<ArchitectureTool>()?;
        registry.register_generator::<DesignPatternTool>()?;
        registry.register_generator::<BestPracticesTool>()?;
        registry.register_generator::<TestTemplateTool>()?;
        registry.register_generator::<CloudSolutionTool>()?;
        Ok(registry)
    }

    /// Register a tool definition bound to `generator`.
    pub fn register(
        &mut self,
        definition: ToolDefinition,
        generator: GeneratorFn,
    ) -> Result<(), ToolError> {
        if self.index.contains_key(&definition.name) {
            return Err(ToolError::duplicate_tool(&definition.name));
        }

        debug!("Registering tool: {}", definition.name);
        self.index.insert(definition.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            definition,
            generator,
        });
        Ok(())
    }

    /// Register a [`ToolGenerator`] implementation.
    pub fn register_generator<T: ToolGenerator>(&mut self) -> Result<(), ToolError> {
        self.register(T::definition(), bind::<T>)
    }

    /// Look up a tool definition by name.
    pub fn lookup(&self, name: &str) -> Option<&ToolDefinition> {
        self.get(name).map(|tool| &tool.definition)
    }

    /// Look up a tool with its generator.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// All definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().map(|tool| &tool.definition)
    }

    /// All tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.definitions().map(|d| d.name.as_str()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Freeze the registry for shared read-only use.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}
