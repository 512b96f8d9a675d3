use quiz_core::model::Difficulty;
use services::{BlankStatus, OptionStatus, QuizSession};

use super::summary_vm::SummaryVm;

const BLANK_PLACEHOLDER: &str = "______";

/// Everything the quiz page renders, derived from one session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionCardVm),
    Summary(SummaryVm),
}

impl QuizScreenVm {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        match session.summary() {
            Some(summary) => Self::Summary(SummaryVm::from_summary(&summary)),
            None => Self::Question(QuestionCardVm::from_session(session)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub position_label: String,
    pub progress_percent: usize,

    pub difficulty_label: &'static str,
    pub difficulty_tone: &'static str,
    pub category: String,

    pub before_blank: String,
    pub after_blank: String,
    pub blank_text: String,
    pub blank_tone: &'static str,

    pub options: Vec<OptionVm>,
    pub can_submit: bool,
    pub is_submitted: bool,
    pub advance_label: &'static str,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub shortcut: usize,
    pub status: OptionStatus,
    pub disabled: bool,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            OptionStatus::Idle => "quiz-option",
            OptionStatus::Selected => "quiz-option quiz-option--selected",
            OptionStatus::Correct => "quiz-option quiz-option--correct",
            OptionStatus::Incorrect => "quiz-option quiz-option--incorrect",
            OptionStatus::Dimmed => "quiz-option quiz-option--dimmed",
        }
    }

    /// Trailing marker shown after submission.
    #[must_use]
    pub fn mark(&self) -> Option<&'static str> {
        match self.status {
            OptionStatus::Correct => Some("✓"),
            OptionStatus::Incorrect => Some("✗"),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub headline: &'static str,
    pub rule: String,
    pub example: String,
    pub analysis: String,
}

impl QuestionCardVm {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let question = session.current_question();
        let state = session.state();
        let progress = session.progress();

        let options = session
            .options()
            .into_iter()
            .map(|option| OptionVm {
                text: option.text.to_string(),
                shortcut: option.index + 1,
                status: option.status,
                disabled: state.is_submitted(),
            })
            .collect();

        let feedback = state.is_submitted().then(|| {
            let explanation = question.explanation();
            let is_correct = session.is_correct();
            FeedbackVm {
                is_correct,
                headline: if is_correct { "Correct!" } else { "Not quite" },
                rule: explanation.rule.clone(),
                example: explanation.example.clone(),
                analysis: explanation.analysis.clone(),
            }
        });

        Self {
            position_label: format!("{} / {}", progress.position, progress.total),
            progress_percent: progress.percent(),
            difficulty_label: question.difficulty().label(),
            difficulty_tone: difficulty_tone(question.difficulty()),
            category: question.category().to_string(),
            before_blank: question.before_blank().to_string(),
            after_blank: question.after_blank().to_string(),
            blank_text: state
                .selected_option()
                .unwrap_or(BLANK_PLACEHOLDER)
                .to_string(),
            blank_tone: blank_tone(session.blank_status()),
            options,
            can_submit: !state.is_submitted() && state.selected_option().is_some(),
            is_submitted: state.is_submitted(),
            advance_label: if session.is_last_question() {
                "See results"
            } else {
                "Next question"
            },
            feedback,
        }
    }
}

fn difficulty_tone(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "easy",
        Difficulty::Intermediate => "medium",
        Difficulty::Advanced => "hard",
    }
}

fn blank_tone(status: BlankStatus) -> &'static str {
    match status {
        BlankStatus::Empty => "empty",
        BlankStatus::Pending => "pending",
        BlankStatus::Correct => "correct",
        BlankStatus::Incorrect => "incorrect",
    }
}
