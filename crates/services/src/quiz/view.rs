/// Presentation-agnostic status of one option of the current question.
///
/// This is intentionally **not** a UI view-model: no strings, no styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionStatus {
    /// Not chosen, answer not submitted yet.
    Idle,
    /// Currently chosen, answer not submitted yet.
    Selected,
    /// The correct answer, revealed after submission whether or not it was chosen.
    Correct,
    /// The chosen answer after submission, when it was wrong.
    Incorrect,
    /// Shown but not selected, after submission.
    Dimmed,
}

/// One option row of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub status: OptionStatus,
}

/// State of the blank in the question sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlankStatus {
    Empty,
    Pending,
    Correct,
    Incorrect,
}

/// Per-question phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    Unanswered,
    Selected,
    Submitted,
    Finished,
}

pub(crate) fn option_status(
    option: &str,
    selected: Option<&str>,
    submitted: bool,
    correct_answer: &str,
) -> OptionStatus {
    let is_selected = selected == Some(option);
    if !submitted {
        return if is_selected {
            OptionStatus::Selected
        } else {
            OptionStatus::Idle
        };
    }
    if option == correct_answer {
        OptionStatus::Correct
    } else if is_selected {
        OptionStatus::Incorrect
    } else {
        OptionStatus::Dimmed
    }
}
