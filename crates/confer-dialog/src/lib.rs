//! Dialog orchestration core.
//!
//! Owns the three pieces with real contracts: resolving a recommended label
//! to a choice position, parsing the dialog process's output into the user's
//! final answer, and the subprocess lifecycle (spawn, timeout, kill, exit
//! interpretation) around one dialog invocation.

mod error;
mod launcher;
mod parse;
mod recommend;

pub use error::DialogError;
pub use launcher::{DialogLauncher, DialogReply, TIMEOUT_REPLY};
pub use parse::{CANCELLED_ANSWER, parse_dialog_output};
pub use recommend::resolve_recommended_index;
