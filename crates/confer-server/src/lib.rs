//! JSON-RPC stdio server exposing the `ask_user` dialog tool.

mod service;
mod stdio;

pub use service::Service;
pub use stdio::serve;
