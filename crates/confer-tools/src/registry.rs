//! Registry for tool implementations.

use crate::tool::{Tool, ToolSpec};
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of tool implementations, built once at startup.
///
/// The tool set is fixed before the server starts serving, so lookups are
/// plain map reads and iteration order is deterministic.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    /// Map of tool name to implementation.
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool by name; a later tool with the same name replaces it.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        debug!("registering tool (name={})", tool.name());
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Fetch a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Return tool specs for all registered tools, in name order.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }
}
