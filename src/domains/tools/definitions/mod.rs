//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - Metadata (name, description, parameters)
//! - A typed params struct built from the resolved arguments
//! - The generator producing the tool's text
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolGenerator` trait
//! 3. Export it here
//! 4. Register in `ToolRegistry::with_default_tools()`

pub mod architecture;
pub mod best_practices;
pub mod cloud_solution;
pub mod design_pattern;
pub mod test_template;

pub use architecture::{ArchitectureParams, ArchitectureTool};
pub use best_practices::{BestPracticesParams, BestPracticesTool};
pub use cloud_solution::{CloudSolutionParams, CloudSolutionTool};
pub use design_pattern::{DesignPatternParams, DesignPatternTool};
pub use test_template::{TestTemplateParams, TestTemplateTool};

use super::arguments::{FromArguments, ResolvedArguments};
use super::registry::{ParameterSpec, ToolDefinition};

/// Trait for tool definitions.
///
/// Generators are total: every input, including unrecognized discriminant
/// values, produces text.
pub trait ToolGenerator {
    /// The unique name of the tool.
    const NAME: &'static str;

    /// A description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Typed arguments of the tool.
    type Params: FromArguments;

    /// The parameters this tool accepts, in declaration order.
    fn parameters() -> Vec<ParameterSpec>;

    /// Produce the tool's text.
    fn generate(params: &Self::Params) -> String;

    /// Build the registry definition for this tool.
    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, Self::parameters())
    }
}

/// Generator entry point stored in the registry for `T`.
pub fn bind<T: ToolGenerator>(args: &ResolvedArguments) -> String {
    T::generate(&T::Params::from_arguments(args))
}
