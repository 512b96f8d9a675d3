/// Canonical mutable state of a quiz session.
///
/// Only [`QuizSession`](super::QuizSession) mutates it; everything the UI
/// shows is derived from these five fields plus the current question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) current_index: usize,
    pub(crate) selected_option: Option<String>,
    pub(crate) is_submitted: bool,
    pub(crate) score: usize,
    pub(crate) is_finished: bool,
}

impl SessionState {
    /// State at the start of every session.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }
}
