//! Tools domain module.
//!
//! This module holds the tool registry and dispatch engine. Tools are named
//! text generators that MCP clients invoke with string arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool definitions, parameter contracts and the registry
//! - `arguments.rs` - Resolution of raw arguments into typed params
//! - `dispatch.rs` - Invocation decoding and the dispatcher
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct implementing `FromArguments`
//! 3. Implement `ToolGenerator` and export it in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::with_default_tools()`
//!
//! **No need to modify `server.rs`!** Listing and dispatch read the registry.

pub mod arguments;
pub mod definitions;
mod dispatch;
mod error;
mod registry;

pub use arguments::{FromArguments, ResolvedArguments};
pub use definitions::ToolGenerator;
pub use dispatch::{Dispatcher, Invocation};
pub use error::ToolError;
pub use registry::{GeneratorFn, ParameterKind, ParameterSpec, RegisteredTool, ToolDefinition, ToolRegistry};
