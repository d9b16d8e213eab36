//! Wire protocol types shared by the confer server and dialog front-end.

mod dialog;
mod rpc;
mod tool;

pub use dialog::{DialogRequest, DialogResult};
pub use rpc::{
    INTERNAL_ERROR, INVALID_PARAMS, MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, RpcError,
    RpcRequest, RpcResponse, ToolContent, ToolResult,
};
pub use tool::ToolError;
