//! Bundled question bank.

use crate::model::{QuestionSet, QuestionSetError};

const BUILTIN_QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// Load the ten-question grammar bank shipped with the crate.
///
/// # Errors
///
/// Returns `QuestionSetError` if the bundled data fails validation.
pub fn builtin() -> Result<QuestionSet, QuestionSetError> {
    QuestionSet::from_json_str(BUILTIN_QUESTIONS_JSON)
}
