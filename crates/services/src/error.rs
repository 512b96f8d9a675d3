use thiserror::Error;

/// Rejected quiz transitions.
///
/// Every variant is returned before any state is touched, so a rejected
/// call leaves the session exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("answer already submitted for this question")]
    AlreadySubmitted,
    #[error("no option selected")]
    NothingSelected,
    #[error("answer not submitted yet")]
    NotSubmitted,
    #[error("quiz already finished")]
    Finished,
    #[error("{option:?} is not an option of the current question")]
    UnknownOption { option: String },
}
