//! Postiz MCP Server library.
//!
//! Provides the [`server::PostizMcpServer`] MCP handler, the tool
//! [`dispatch::Dispatcher`], and tool parameter/response types.
//! Used by the `postiz-mcp` binary and available for integration testing.

pub mod dispatch;
pub mod error;
pub mod server;
pub mod tools;

#[cfg(test)]
mod test_support;
