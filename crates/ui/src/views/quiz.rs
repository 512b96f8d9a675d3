use dioxus::document::eval;
use dioxus::prelude::*;
use services::QuizPhase;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizScreenVm, apply_intent, intent_for_key};
use super::question_card::QuestionCard;
use super::summary::SummaryCard;

const ROOT_ID: &str = "quiz-root";

/// Element that should hold keyboard focus in each phase.
///
/// Key presses bubble to `#quiz-root`, so focus must stay inside it even after
/// the focused button is swapped out of the DOM.
fn focus_target_for_phase(phase: QuizPhase) -> &'static str {
    match phase {
        // Submit is disabled until something is selected.
        QuizPhase::Unanswered => ROOT_ID,
        QuizPhase::Selected => "quiz-submit",
        QuizPhase::Submitted => "quiz-advance",
        QuizPhase::Finished => "quiz-restart",
    }
}

/// Stateful quiz page. Owns the session; children only emit intents.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();
    let session = use_signal(|| ctx.start_session());
    let mut last_focus_phase = use_signal(|| None::<QuizPhase>);

    use_effect(move || {
        let phase = session.read().phase();
        if last_focus_phase() == Some(phase) {
            return;
        }
        last_focus_phase.set(Some(phase));
        let target = focus_target_for_phase(phase);
        let js = format!("document.getElementById({target:?})?.focus();");
        let _ = eval(&js);
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        apply_intent(&mut session.write(), intent);
    });

    let on_key = move |evt: KeyboardEvent| {
        let intent = intent_for_key(&evt.data.key(), &session.read());
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    };

    let screen = QuizScreenVm::from_session(&session.read());

    rsx! {
        div { class: "page quiz-page", id: ROOT_ID, tabindex: "0", onkeydown: on_key,
            match screen {
                QuizScreenVm::Question(card) => rsx! {
                    header { class: "quiz-header",
                        h1 { class: "quiz-header__title", "{title}" }
                        div { class: "quiz-header__progress",
                            span { class: "quiz-header__label", "Progress: {card.position_label}" }
                            div { class: "quiz-progress",
                                div {
                                    class: "quiz-progress__fill",
                                    style: "width: {card.progress_percent}%",
                                }
                            }
                        }
                    }
                    QuestionCard { vm: card.clone(), on_intent: dispatch_intent }
                },
                QuizScreenVm::Summary(summary) => rsx! {
                    SummaryCard { vm: summary, on_intent: dispatch_intent }
                },
            }
        }
    }
}
