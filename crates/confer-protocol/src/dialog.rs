//! Contracts between the server and the dialog front-end process.

use serde::{Deserialize, Serialize};

/// Input document handed to the dialog process as its `--input` argument.
///
/// Immutable once built; the front-end renders it and never writes it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRequest {
    /// Window title summarizing the decision.
    pub title: String,
    /// Markdown body with context for the decision; may be empty.
    pub body: String,
    /// Ordered choice labels; never empty for a launched dialog.
    pub choices: Vec<String>,
    /// Position of the recommended choice, or -1 for no recommendation.
    pub recommended_index: i32,
    /// Whether the front-end offers a free-text answer box.
    pub allow_custom: bool,
}

/// Result document the dialog process writes to stdout before exiting.
///
/// Every field is optional on the wire; the precedence between `custom_input`
/// and `choice` is applied by the output parser, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogResult {
    /// Label of the selected choice, if one was selected.
    #[serde(default)]
    pub choice: Option<String>,
    /// Position of the selected choice, or -1 when none.
    #[serde(default = "no_selection")]
    pub index: i32,
    /// Free-text answer, if the user typed one.
    #[serde(default)]
    pub custom_input: Option<String>,
    /// True when the user explicitly skipped the question.
    #[serde(default)]
    pub skipped: bool,
}

/// Default index when the document omits it.
fn no_selection() -> i32 {
    -1
}

#[cfg(test)]
mod tests {
    use super::{DialogRequest, DialogResult};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn dialog_request_serializes_camel_case_keys() {
        let request = DialogRequest {
            title: "Action Required".to_string(),
            body: "Pick a fruit".to_string(),
            choices: vec!["Apple".to_string(), "Banana".to_string()],
            recommended_index: 1,
            allow_custom: false,
        };
        let encoded = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            encoded,
            json!({
                "title": "Action Required",
                "body": "Pick a fruit",
                "choices": ["Apple", "Banana"],
                "recommendedIndex": 1,
                "allowCustom": false
            })
        );
    }

    #[test]
    fn dialog_result_defaults_missing_fields() {
        let result: DialogResult = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(result.choice, None);
        assert_eq!(result.index, -1);
        assert_eq!(result.custom_input, None);
        assert_eq!(result.skipped, false);
    }

    #[test]
    fn dialog_result_reads_selection_fields() {
        let result: DialogResult = serde_json::from_value(json!({
            "choice": "Banana",
            "index": 1,
            "custom_input": null
        }))
        .expect("deserialize");
        assert_eq!(result.choice.as_deref(), Some("Banana"));
        assert_eq!(result.index, 1);
    }
}
