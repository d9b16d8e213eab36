//! Built-in tool that asks the user a question via a native dialog.

use crate::Tool;
use crate::builtins::parse_args;
use async_trait::async_trait;
use confer_dialog::{DialogLauncher, resolve_recommended_index};
use confer_protocol::{DialogRequest, ToolError, ToolResult};
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

/// Title used when the caller does not provide one.
const DEFAULT_TITLE: &str = "Action Required";

/// Tool that presents a multiple-choice question in a native dialog window
/// and reports the user's answer.
#[derive(Debug, Clone)]
pub struct AskUserTool {
    /// Launcher for the dialog front-end process.
    launcher: DialogLauncher,
    /// Timeout applied when the request does not carry one.
    default_timeout: Duration,
}

impl AskUserTool {
    /// Create the tool around a dialog launcher and a default timeout.
    pub fn new(launcher: DialogLauncher, default_timeout: Duration) -> Self {
        Self {
            launcher,
            default_timeout,
        }
    }
}

#[async_trait]
impl Tool for AskUserTool {
    fn name(&self) -> &str {
        "ask_user"
    }

    fn description(&self) -> &str {
        "Ask the user a question with several choices via a native dialog window. Supports Markdown in the body and a recommended choice."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "(Optional) A concise, high-level summary of the decision required.",
                },
                "body": {
                    "type": "string",
                    "description": "(Optional) Detailed context or explanation. Supports Markdown (code blocks, lists, etc.) to help the user make an informed choice.",
                },
                "choices": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "(Required) A list of predefined options for the user to select from.",
                },
                "recommended": {
                    "type": "string",
                    "description": "(Optional) One of the exact strings from the 'choices' array that the agent recommends. The UI will highlight this option.",
                },
                "allowCustom": {
                    "type": "boolean",
                    "description": "(Optional) Whether to provide a text area for the user to type a custom response not in the choices list. Defaults to false.",
                    "default": false,
                },
                "timeoutSec": {
                    "type": "number",
                    "description": format!(
                        "(Optional) How long to wait for a user response in seconds. Defaults to {}. If exceeded, the tool returns a timeout error.",
                        self.default_timeout.as_secs()
                    ),
                },
            },
            "required": ["choices"],
        })
    }

    async fn call(&self, args: Value) -> Result<ToolResult, ToolError> {
        let input: AskUserArgs = parse_args(args)?;
        if input.choices.is_empty() {
            return Err(ToolError::InvalidArguments(
                "choices must be a non-empty array of strings".to_string(),
            ));
        }

        let recommended_index =
            resolve_recommended_index(&input.choices, input.recommended.as_deref())
                .map_err(|err| ToolError::InvalidArguments(err.to_string()))?;

        let timeout = match input.timeout_sec {
            Some(secs) => Duration::try_from_secs_f64(secs).map_err(|_| {
                ToolError::InvalidArguments(
                    "timeoutSec must be a non-negative number of seconds".to_string(),
                )
            })?,
            None => self.default_timeout,
        };

        let request = DialogRequest {
            title: input.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: input.body.unwrap_or_default(),
            choices: input.choices,
            recommended_index,
            allow_custom: input.allow_custom,
        };
        info!(
            "asking user (choices={}, recommended_index={}, allow_custom={}, timeout_ms={})",
            request.choices.len(),
            recommended_index,
            request.allow_custom,
            timeout.as_millis()
        );

        let reply = self
            .launcher
            .run(&request, timeout)
            .await
            .map_err(|err| ToolError::Internal(err.to_string()))?;

        Ok(if reply.is_error {
            ToolResult::error(reply.text)
        } else {
            ToolResult::text(reply.text)
        })
    }
}

/// Arguments for AskUserTool, matching the published schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AskUserArgs {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    recommended: Option<String>,
    #[serde(default)]
    allow_custom: bool,
    #[serde(default)]
    timeout_sec: Option<f64>,
}
