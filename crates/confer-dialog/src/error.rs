//! Error types for dialog orchestration.

use std::io;
use thiserror::Error;

/// Errors returned by the dialog core.
///
/// The `Display` output of `RecommendationMismatch` and `ResultParse` is the
/// exact caller-visible message; nothing upstream may wrap it.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Recommended label did not match any available choice.
    #[error(
        "recommended choice \"{recommended}\" does not match any available choices. Available: {available}"
    )]
    RecommendationMismatch {
        /// The recommended label as supplied, untrimmed.
        recommended: String,
        /// All choices joined by ", ", in original order.
        available: String,
    },
    /// Dialog output was not a valid result document.
    #[error("Error parsing result: {raw}")]
    ResultParse {
        /// The raw, uncleaned process output.
        raw: String,
    },
    /// Input document could not be serialized.
    #[error("failed to encode dialog input: {0}")]
    Encode(#[from] serde_json::Error),
    /// Dialog process could not be started.
    #[error("failed to launch dialog process: {0}")]
    Launch(#[source] io::Error),
    /// Reading from or waiting on the dialog process failed.
    #[error("dialog process I/O failed: {0}")]
    Io(#[source] io::Error),
}
