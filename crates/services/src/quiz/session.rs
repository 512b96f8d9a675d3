use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Question, QuestionSet};
use tracing::debug;

use crate::error::QuizError;
use super::progress::QuizProgress;
use super::state::SessionState;
use super::summary::QuizSummary;
use super::view::{BlankStatus, OptionView, QuizPhase, option_status};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz session controller.
///
/// Steps through a [`QuestionSet`] one question at a time. Each question goes
/// `Unanswered -> Selected -> Submitted`; advancing past the last one finishes
/// the session. The four transitions below are the only way to mutate state.
///
/// A transition whose precondition does not hold returns a [`QuizError`] and
/// leaves the session untouched, so callers may treat it as a no-op.
#[derive(Clone)]
pub struct QuizSession {
    questions: Arc<QuestionSet>,
    state: SessionState,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        Self {
            questions,
            state: SessionState::initial(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The question at `current_index`.
    ///
    /// Still the last question once the session is finished.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions.as_slice()[self.state.current_index]
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.state.is_finished {
            QuizPhase::Finished
        } else if self.state.is_submitted {
            QuizPhase::Submitted
        } else if self.state.selected_option.is_some() {
            QuizPhase::Selected
        } else {
            QuizPhase::Unanswered
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Choose `option` for the current question, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` or `QuizError::AlreadySubmitted` once the
    /// answer is locked in, and `QuizError::UnknownOption` if `option` is not
    /// one of the current question's options.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<(), QuizError> {
        if self.state.is_finished {
            return Err(QuizError::Finished);
        }
        if self.state.is_submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let option = option.into();
        if !self.current_question().has_option(&option) {
            return Err(QuizError::UnknownOption { option });
        }

        debug!(index = self.state.current_index, option = %option, "option selected");
        self.state.selected_option = Some(option);
        Ok(())
    }

    /// Lock in the current selection and credit the score if it is correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NothingSelected` without a selection and
    /// `QuizError::AlreadySubmitted` (or `Finished`) on repeated submission;
    /// the score is credited at most once per question.
    pub fn submit_answer(&mut self) -> Result<(), QuizError> {
        if self.state.is_finished {
            return Err(QuizError::Finished);
        }
        if self.state.is_submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let Some(selected) = self.state.selected_option.as_deref() else {
            return Err(QuizError::NothingSelected);
        };

        let correct = self.current_question().is_correct(selected);
        self.state.is_submitted = true;
        if correct {
            self.state.score += 1;
        }

        debug!(
            index = self.state.current_index,
            correct,
            score = self.state.score,
            "answer submitted"
        );
        Ok(())
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// Finishing keeps `current_index` on the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotSubmitted` before the answer is submitted and
    /// `QuizError::Finished` once the session is over.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.state.is_finished {
            return Err(QuizError::Finished);
        }
        if !self.state.is_submitted {
            return Err(QuizError::NotSubmitted);
        }

        if self.is_last_question() {
            self.state.is_finished = true;
            debug!(
                score = self.state.score,
                total = self.questions.len(),
                "quiz finished"
            );
        } else {
            self.state.current_index += 1;
            self.state.selected_option = None;
            self.state.is_submitted = false;
            debug!(index = self.state.current_index, "advanced to next question");
        }
        Ok(())
    }

    /// Discard all progress and start over from the first question.
    pub fn restart(&mut self) {
        self.state = SessionState::initial();
        debug!("quiz restarted");
    }

    //
    // ─── DERIVED FACTS ─────────────────────────────────────────────────────────
    //

    /// True once the answer is submitted and matches the correct answer.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.state.is_submitted
            && self
                .state
                .selected_option
                .as_deref()
                .is_some_and(|selected| self.current_question().is_correct(selected))
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.state.current_index == self.questions.last_index()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.state.current_index + 1,
            total: self.questions.len(),
        }
    }

    /// Status of every option of the current question, in order.
    #[must_use]
    pub fn options(&self) -> Vec<OptionView<'_>> {
        let question = self.current_question();
        let selected = self.state.selected_option.as_deref();
        question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionView {
                index,
                text,
                status: option_status(
                    text,
                    selected,
                    self.state.is_submitted,
                    question.correct_answer(),
                ),
            })
            .collect()
    }

    #[must_use]
    pub fn blank_status(&self) -> BlankStatus {
        match (&self.state.selected_option, self.state.is_submitted) {
            (None, _) => BlankStatus::Empty,
            (Some(_), false) => BlankStatus::Pending,
            (Some(_), true) if self.is_correct() => BlankStatus::Correct,
            (Some(_), true) => BlankStatus::Incorrect,
        }
    }

    /// Final score, available only once the session is finished.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.state.is_finished.then(|| QuizSummary {
            score: self.state.score,
            total: self.questions.len(),
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{FeedbackTier, OptionStatus};
    use quiz_core::model::{Difficulty, Explanation, QuestionDraft, QuestionId};

    fn question(id: u64, options: &[&str], answer: &str) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(id),
            sentence_parts: ("Before ".into(), " after.".into()),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct_answer: answer.into(),
            difficulty: Difficulty::Intermediate,
            category: "Test".into(),
            explanation: Explanation {
                rule: "rule".into(),
                example: "example".into(),
                analysis: "analysis".into(),
            },
        }
    }

    fn session() -> QuizSession {
        let set = QuestionSet::from_drafts(vec![
            question(1, &["Although", "Because", "Unless", "Despite"], "Although"),
            question(2, &["what", "who", "which", "whose"], "which"),
            question(3, &["Seen", "Seeing"], "Seen"),
        ])
        .unwrap();
        QuizSession::new(Arc::new(set))
    }

    #[test]
    fn starts_in_initial_state() {
        let s = session();
        assert_eq!(s.state(), &SessionState::initial());
        assert_eq!(s.phase(), QuizPhase::Unanswered);
        assert_eq!(s.current_question().id(), QuestionId::new(1));
        assert!(s.summary().is_none());
    }

    #[test]
    fn reselecting_replaces_selection() {
        let mut s = session();
        s.select_option("Because").unwrap();
        s.select_option("Unless").unwrap();
        assert_eq!(s.state().selected_option(), Some("Unless"));
        assert!(!s.state().is_submitted());
        assert_eq!(s.phase(), QuizPhase::Selected);
    }

    #[test]
    fn selecting_after_submit_is_rejected_without_change() {
        let mut s = session();
        s.select_option("Because").unwrap();
        s.submit_answer().unwrap();
        let before = s.state().clone();

        assert_eq!(s.select_option("Although"), Err(QuizError::AlreadySubmitted));
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn unknown_option_is_rejected_without_change() {
        let mut s = session();
        s.select_option("Because").unwrap();
        let err = s.select_option("although").unwrap_err();
        assert_eq!(
            err,
            QuizError::UnknownOption {
                option: "although".into()
            }
        );
        assert_eq!(s.state().selected_option(), Some("Because"));
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let mut s = session();
        assert_eq!(s.submit_answer(), Err(QuizError::NothingSelected));
        assert_eq!(s.state(), &SessionState::initial());
    }

    #[test]
    fn double_submit_credits_once() {
        let mut s = session();
        s.select_option("Although").unwrap();
        s.submit_answer().unwrap();
        assert_eq!(s.submit_answer(), Err(QuizError::AlreadySubmitted));
        assert_eq!(s.state().score(), 1);
    }

    #[test]
    fn correct_answer_scores() {
        let mut s = session();
        s.select_option("Although").unwrap();
        s.submit_answer().unwrap();
        assert!(s.state().is_submitted());
        assert!(s.is_correct());
        assert_eq!(s.state().score(), 1);
        assert_eq!(s.blank_status(), BlankStatus::Correct);
    }

    #[test]
    fn wrong_answer_marks_other_options_dimmed() {
        let mut s = session();
        s.select_option("Because").unwrap();
        s.submit_answer().unwrap();
        assert!(!s.is_correct());
        assert_eq!(s.state().score(), 0);
        assert_eq!(s.blank_status(), BlankStatus::Incorrect);

        let statuses: Vec<_> = s.options().iter().map(|o| (o.text, o.status)).collect();
        assert_eq!(
            statuses,
            vec![
                ("Although", OptionStatus::Correct),
                ("Because", OptionStatus::Incorrect),
                ("Unless", OptionStatus::Dimmed),
                ("Despite", OptionStatus::Dimmed),
            ]
        );
    }

    #[test]
    fn advance_before_submit_is_rejected() {
        let mut s = session();
        assert_eq!(s.advance(), Err(QuizError::NotSubmitted));
        s.select_option("Because").unwrap();
        assert_eq!(s.advance(), Err(QuizError::NotSubmitted));
        assert_eq!(s.state().current_index(), 0);
    }

    #[test]
    fn advance_resets_per_question_state() {
        let mut s = session();
        s.select_option("Although").unwrap();
        s.submit_answer().unwrap();
        s.advance().unwrap();

        assert_eq!(s.state().current_index(), 1);
        assert_eq!(s.state().selected_option(), None);
        assert!(!s.state().is_submitted());
        assert_eq!(s.state().score(), 1);
        assert_eq!(s.progress().position, 2);
        assert_eq!(s.blank_status(), BlankStatus::Empty);
    }

    #[test]
    fn advance_from_last_question_finishes_in_place() {
        let mut s = session();
        for answer in ["Although", "who", "Seen"] {
            s.select_option(answer).unwrap();
            s.submit_answer().unwrap();
            s.advance().unwrap();
        }

        assert!(s.state().is_finished());
        assert_eq!(s.state().current_index(), 2);
        assert_eq!(s.phase(), QuizPhase::Finished);
        assert_eq!(s.advance(), Err(QuizError::Finished));
        assert_eq!(s.select_option("Seen"), Err(QuizError::Finished));
        assert_eq!(s.submit_answer(), Err(QuizError::Finished));

        let summary = s.summary().unwrap();
        assert_eq!(summary.score, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage(), 67);
        assert_eq!(summary.tier(), FeedbackTier::Good);
    }

    #[test]
    fn restart_from_any_phase_yields_initial_state() {
        let mut s = session();
        s.restart();
        assert_eq!(s.state(), &SessionState::initial());

        s.select_option("Despite").unwrap();
        s.restart();
        assert_eq!(s.state(), &SessionState::initial());

        s.select_option("Although").unwrap();
        s.submit_answer().unwrap();
        s.advance().unwrap();
        s.select_option("which").unwrap();
        s.submit_answer().unwrap();
        s.restart();
        assert_eq!(s.state(), &SessionState::initial());

        for answer in ["Although", "which", "Seen"] {
            s.select_option(answer).unwrap();
            s.submit_answer().unwrap();
            s.advance().unwrap();
        }
        assert!(s.state().is_finished());
        s.restart();
        assert_eq!(s.state(), &SessionState::initial());
        assert_eq!(s.phase(), QuizPhase::Unanswered);
    }

    #[test]
    fn last_question_flag_tracks_index() {
        let mut s = session();
        assert!(!s.is_last_question());
        for answer in ["Although", "which"] {
            s.select_option(answer).unwrap();
            s.submit_answer().unwrap();
            s.advance().unwrap();
        }
        assert!(s.is_last_question());
    }
}
