//! Tool trait definition and metadata spec.

use async_trait::async_trait;
use confer_protocol::{ToolError, ToolResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

/// Tool metadata spec for discovery, serialized directly into `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON schema for tool arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Interface for executable tools.
#[async_trait]
pub trait Tool: Send + Sync + Debug {
    /// Return the tool name.
    fn name(&self) -> &str;
    /// Return the tool description.
    fn description(&self) -> &str;
    /// Return the JSON schema for tool arguments.
    fn args_schema(&self) -> Value;

    /// Invoke the tool with JSON arguments.
    ///
    /// `Ok` carries the caller-visible result even for failure-flagged
    /// outcomes; `Err` is reserved for conditions that become JSON-RPC
    /// errors.
    async fn call(&self, args: Value) -> Result<ToolResult, ToolError>;

    /// Build a `ToolSpec` describing this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.args_schema(),
        }
    }
}
