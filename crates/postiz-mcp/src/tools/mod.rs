//! MCP tools: catalog, parameter/response types, and handlers.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! All response structs derive `Serialize` for JSON output.

pub mod catalog;
pub mod operations;
pub mod params;

pub use catalog::{catalog, ToolDefinition, ToolName};
pub use params::*;
