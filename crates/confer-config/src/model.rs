//! Configuration schema for the confer server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Timeout applied when a request does not specify one.
pub const DEFAULT_TIMEOUT_SEC: u64 = 60;

/// Root config for the confer server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferConfig {
    /// Default timeout in seconds for a dialog awaiting user input.
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
    /// Dialog front-end settings.
    #[serde(default)]
    pub dialog: DialogConfig,
}

impl Default for ConferConfig {
    fn default() -> Self {
        Self {
            timeout_sec: DEFAULT_TIMEOUT_SEC,
            dialog: DialogConfig::default(),
        }
    }
}

/// Settings for locating the dialog front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Explicit path to the dialog binary; discovery applies when unset.
    #[serde(default)]
    pub binary: Option<PathBuf>,
}

/// Serde default for the timeout field.
fn default_timeout_sec() -> u64 {
    DEFAULT_TIMEOUT_SEC
}

#[cfg(test)]
mod tests {
    use super::{ConferConfig, DEFAULT_TIMEOUT_SEC};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_to_empty_documents() {
        let config: ConferConfig = json5::from_str("{}").expect("config");
        assert_eq!(config.timeout_sec, DEFAULT_TIMEOUT_SEC);
        assert_eq!(config.dialog.binary, None);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: ConferConfig =
            json5::from_str(r#"{ timeout_sec: 120, dialog: { binary: "/opt/dialog" } }"#)
                .expect("config");
        assert_eq!(config.timeout_sec, 120);
        assert_eq!(
            config.dialog.binary,
            Some(std::path::PathBuf::from("/opt/dialog"))
        );
    }
}
