//! Extracts the user's final answer from raw dialog process output.

use confer_protocol::DialogResult;

use crate::DialogError;

/// Answer reported when the dialog produced no result document.
pub const CANCELLED_ANSWER: &str = "user cancelled the selection";

/// Parse raw stdout captured from the dialog process into the final answer.
///
/// Lines whose trimmed content starts with `DEBUG` are diagnostic noise and
/// are dropped before parsing. Empty output means the user closed the dialog
/// without answering, which is a normal cancellation rather than an error.
/// When a result document carries both a custom answer and a selected choice,
/// the custom answer wins.
pub fn parse_dialog_output(raw: &str) -> Result<String, DialogError> {
    let cleaned = raw
        .lines()
        .filter(|line| !line.trim().starts_with("DEBUG"))
        .collect::<Vec<_>>()
        .join("\n");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(CANCELLED_ANSWER.to_string());
    }

    let result: DialogResult =
        serde_json::from_str(cleaned).map_err(|_| DialogError::ResultParse {
            raw: raw.to_string(),
        })?;

    if let Some(custom) = result.custom_input.filter(|text| !text.is_empty()) {
        return Ok(custom);
    }
    if let Some(choice) = result.choice.filter(|text| !text.is_empty()) {
        return Ok(choice);
    }
    Ok(CANCELLED_ANSWER.to_string())
}

#[cfg(test)]
mod tests {
    use super::{CANCELLED_ANSWER, parse_dialog_output};
    use pretty_assertions::assert_eq;

    #[test]
    fn selected_choice_is_returned() {
        let answer = parse_dialog_output(r#"{"choice":"Apple","index":0,"custom_input":null}"#)
            .expect("answer");
        assert_eq!(answer, "Apple");
    }

    #[test]
    fn custom_input_wins_over_choice() {
        let answer =
            parse_dialog_output(r#"{"choice":null,"index":-1,"custom_input":"My Custom"}"#)
                .expect("answer");
        assert_eq!(answer, "My Custom");

        let both = parse_dialog_output(
            r#"{"choice":"Apple","index":0,"custom_input":"Typed instead"}"#,
        )
        .expect("answer");
        assert_eq!(both, "Typed instead");
    }

    #[test]
    fn empty_fields_mean_cancellation() {
        let answer = parse_dialog_output(r#"{"choice":null,"index":-1,"custom_input":null}"#)
            .expect("answer");
        assert_eq!(answer, CANCELLED_ANSWER);

        let empty_strings =
            parse_dialog_output(r#"{"choice":"","index":-1,"custom_input":""}"#).expect("answer");
        assert_eq!(empty_strings, CANCELLED_ANSWER);
    }

    #[test]
    fn skipped_flag_folds_into_cancellation() {
        let answer = parse_dialog_output(r#"{"choice":null,"index":-1,"skipped":true}"#)
            .expect("answer");
        assert_eq!(answer, CANCELLED_ANSWER);
    }

    #[test]
    fn debug_lines_are_stripped() {
        let raw = "DEBUG: some log\n{\"choice\":\"Banana\",\"index\":1,\"custom_input\":null}\nDEBUG: another log";
        assert_eq!(parse_dialog_output(raw).expect("answer"), "Banana");
    }

    #[test]
    fn indented_debug_lines_are_stripped() {
        let raw = "  DEBUG window ready\n{\"choice\":\"Apple\",\"index\":0}";
        assert_eq!(parse_dialog_output(raw).expect("answer"), "Apple");
    }

    #[test]
    fn empty_output_is_cancellation_not_error() {
        assert_eq!(parse_dialog_output("").expect("answer"), CANCELLED_ANSWER);
        assert_eq!(
            parse_dialog_output("   \n  ").expect("answer"),
            CANCELLED_ANSWER
        );
    }

    #[test]
    fn debug_only_output_is_cancellation() {
        assert_eq!(
            parse_dialog_output("DEBUG: starting\nDEBUG: closing").expect("answer"),
            CANCELLED_ANSWER
        );
    }

    #[test]
    fn malformed_output_reports_original_raw_text() {
        let err = parse_dialog_output("not json").expect_err("parse error");
        assert_eq!(err.to_string(), "Error parsing result: not json");

        let err = parse_dialog_output("DEBUG: noise\nnot json").expect_err("parse error");
        assert_eq!(err.to_string(), "Error parsing result: DEBUG: noise\nnot json");
    }
}
