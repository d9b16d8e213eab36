//! JSON-RPC 2.0 framing for the stdio transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol revision advertised during `initialize`.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// A request line could not be parsed as JSON-RPC.
pub const PARSE_ERROR: i64 = -32700;
/// The method (or tool) name is not known to the server.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Request parameters failed validation.
pub const INVALID_PARAMS: i64 = -32602;
/// The server could not produce any result at all.
pub const INTERNAL_ERROR: i64 = -32603;

/// Incoming JSON-RPC request or notification.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Protocol marker, expected to be "2.0".
    #[serde(default)]
    pub jsonrpc: String,
    /// Request id; absent for notifications.
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name, e.g. `tools/call`.
    pub method: String,
    /// Method parameters; defaults to null when omitted.
    #[serde(default)]
    pub params: Value,
}

impl RpcRequest {
    /// Whether this message is a notification (no id, no response expected).
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outgoing JSON-RPC response.
#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    /// Protocol marker, always "2.0".
    pub jsonrpc: &'static str,
    /// Echo of the request id (null for parse errors).
    pub id: Value,
    /// Result payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error payload.
#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    /// One of the error code constants in this module.
    pub code: i64,
    /// Human-readable message, surfaced to the caller verbatim.
    pub message: String,
}

impl RpcResponse {
    /// Build a success response echoing the request id.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response echoing the request id.
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Payload returned to the caller for every completed tool invocation.
///
/// Failures that still produced a textual answer travel inside this payload
/// with `is_error` set, not as JSON-RPC errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Ordered content blocks; this server only emits text.
    pub content: Vec<ToolContent>,
    /// Present and true when the text describes a failure.
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    /// Plain text content.
    Text { text: String },
}

impl ToolResult {
    /// Build a plain success result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: None,
        }
    }

    /// Build a failure-flagged result.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: Some(true),
        }
    }

    /// Text of the first content block, for tests and logging.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ToolContent::Text { text } => text.as_str(),
        })
    }
}
