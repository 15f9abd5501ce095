//! Kotlin Senior MCP Server Library
//!
//! An MCP server exposing a fixed catalog of advisory tools for Kotlin
//! projects: architecture analysis, design pattern skeletons, best practice
//! checks, test templates and cloud recommendations.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and
//!   the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool registry, dispatch engine and the generators
//!
//! # Example
//!
//! ```rust
//! use kotlin_senior_mcp::domains::tools::{Dispatcher, Invocation};
//!
//! let dispatcher = Dispatcher::with_default_tools().unwrap();
//! let invocation = Invocation::new("generate_design_pattern")
//!     .with_argument("patternName", "singleton")
//!     .with_argument("context", "Payment Gateway");
//!
//! let text = dispatcher.dispatch(&invocation).unwrap();
//! assert!(text.contains("object PaymentGatewayManager"));
//! ```

pub mod core;
pub mod domains;

pub use crate::core::{Config, Error, McpServer, Result};
