//! OneDrive MCP Server library.
//!
//! Provides the [`server::OnedriveMcpServer`] MCP handler and the drive tool
//! pipelines, parameter types, and output records. Used by the `onedrive-mcp`
//! binary and available for integration testing.

pub mod server;
pub mod tools;
