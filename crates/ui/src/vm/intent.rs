use dioxus::prelude::Key;
use services::{QuizError, QuizPhase, QuizSession};
use tracing::debug;

/// User actions the quiz screen can emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Advance,
    Restart,
}

/// Forward an intent to the session controller.
///
/// Buttons for illegal actions are disabled, so a rejection here only happens
/// for stray key presses or double clicks; it is logged and dropped.
pub fn apply_intent(session: &mut QuizSession, intent: QuizIntent) {
    let result: Result<(), QuizError> = match intent {
        QuizIntent::Select(option) => session.select_option(option),
        QuizIntent::Submit => session.submit_answer(),
        QuizIntent::Advance => session.advance(),
        QuizIntent::Restart => {
            session.restart();
            Ok(())
        }
    };
    if let Err(err) = result {
        debug!(error = %err, "quiz intent ignored");
    }
}

/// Keyboard shortcuts: `1`..`9` pick an option, `Enter` submits, advances or
/// restarts depending on the phase.
#[must_use]
pub fn intent_for_key(key: &Key, session: &QuizSession) -> Option<QuizIntent> {
    let phase = session.phase();
    match key {
        Key::Enter => match phase {
            QuizPhase::Unanswered => None,
            QuizPhase::Selected => Some(QuizIntent::Submit),
            QuizPhase::Submitted => Some(QuizIntent::Advance),
            QuizPhase::Finished => Some(QuizIntent::Restart),
        },
        Key::Character(value) if matches!(phase, QuizPhase::Unanswered | QuizPhase::Selected) => {
            let shortcut = value.parse::<usize>().ok()?;
            let option = session
                .current_question()
                .options()
                .get(shortcut.checked_sub(1)?)?;
            Some(QuizIntent::Select(option.clone()))
        }
        _ => None,
    }
}
