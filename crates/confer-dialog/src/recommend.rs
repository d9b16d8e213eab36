//! Maps a recommended label onto its position in the choice list.

use crate::DialogError;

/// Resolve a recommended label to its zero-based position in `choices`.
///
/// `None` means no recommendation and resolves to -1. Matching trims
/// surrounding whitespace on both sides but is otherwise exact and
/// case-sensitive; with duplicate labels the first position wins.
pub fn resolve_recommended_index(
    choices: &[String],
    recommended: Option<&str>,
) -> Result<i32, DialogError> {
    let Some(recommended) = recommended else {
        return Ok(-1);
    };

    let target = recommended.trim();
    if let Some(index) = choices.iter().position(|choice| choice.trim() == target) {
        return Ok(index as i32);
    }

    Err(DialogError::RecommendationMismatch {
        recommended: recommended.to_string(),
        available: choices.join(", "),
    })
}
