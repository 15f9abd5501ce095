//! Transport layer for the MCP server.
//!
//! The dispatch core never sees framing; each transport decodes requests,
//! hands them to [`McpServer`](crate::core::McpServer) and encodes the reply.
//!
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: Raw TCP socket, one rmcp session per connection - feature: `tcp`
//! - **HTTP**: JSON-RPC over POST requests - feature: `http`

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
