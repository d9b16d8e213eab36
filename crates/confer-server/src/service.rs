//! JSON-RPC method dispatch for the server.

use confer_protocol::{
    MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, RpcRequest, RpcResponse, ToolError,
};
use confer_tools::ToolRegistry;
use log::{debug, warn};
use serde_json::{Value, json};

/// Server name advertised during `initialize`.
const SERVER_NAME: &str = "confer";

/// Dispatches JSON-RPC requests to the tool registry.
#[derive(Debug)]
pub struct Service {
    /// Registered tools, fixed for the server's lifetime.
    registry: ToolRegistry,
}

impl Service {
    /// Create a service around a tool registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Handle one request; notifications produce no response.
    pub async fn handle(&self, request: RpcRequest) -> Option<RpcResponse> {
        if request.is_notification() {
            debug!("notification received (method={})", request.method);
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => RpcResponse::success(
                id,
                json!({
                    "protocolVersion": MCP_PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }),
            ),
            "ping" => RpcResponse::success(id, json!({})),
            "tools/list" => RpcResponse::success(id, json!({ "tools": self.registry.specs() })),
            "tools/call" => self.handle_tool_call(id, &request.params).await,
            method => {
                warn!("unknown method (method={method})");
                RpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {method}"))
            }
        };
        Some(response)
    }

    /// Dispatch `tools/call` to the named tool.
    ///
    /// Outcomes that still carry an answer come back as tool results; only
    /// validation failures and conditions that prevented any interaction
    /// become JSON-RPC errors, with the tool's message text preserved
    /// verbatim.
    async fn handle_tool_call(&self, id: Value, params: &Value) -> RpcResponse {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let Some(tool) = self.registry.get(name) else {
            let err = ToolError::ToolNotFound(name.to_string());
            return RpcResponse::error(id, err.code(), err.to_string());
        };
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        debug!("calling tool (name={name})");
        match tool.call(arguments).await {
            Ok(result) => match serde_json::to_value(&result) {
                Ok(payload) => RpcResponse::success(id, payload),
                Err(err) => RpcResponse::error(
                    id,
                    confer_protocol::INTERNAL_ERROR,
                    format!("failed to encode tool result: {err}"),
                ),
            },
            Err(err) => RpcResponse::error(id, err.code(), err.to_string()),
        }
    }
}
