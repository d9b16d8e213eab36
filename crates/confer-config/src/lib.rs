//! Server configuration and dialog binary discovery.
//!
//! This crate owns the confer config schema, the json5 file loader, and the
//! lookup strategy for the dialog front-end binary.

mod discovery;
mod error;
mod loader;
mod model;

pub use discovery::{DIALOG_BINARY_NAME, resolve_dialog_binary};
pub use error::ConfigError;
pub use loader::{load_default, load_from_path};
pub use model::{ConferConfig, DEFAULT_TIMEOUT_SEC, DialogConfig};
