//! Built-in tools bundled with the confer server.

mod ask_user;

use crate::ToolRegistry;
use confer_dialog::DialogLauncher;
use confer_protocol::ToolError;
use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub use ask_user::AskUserTool;

/// Parse JSON args into a typed struct for tool calls.
pub(super) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|err| ToolError::InvalidArguments(err.to_string()))
}

/// Build a registry pre-populated with the built-in tools.
pub fn builtin_tool_registry(launcher: DialogLauncher, default_timeout: Duration) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(AskUserTool::new(launcher, default_timeout)));
    info!("registered built-in tools (count={})", registry.len());
    registry
}
