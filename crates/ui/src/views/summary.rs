use dioxus::prelude::*;

use crate::vm::{QuizIntent, SummaryVm};

#[component]
pub fn SummaryCard(vm: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let score_label = vm.score_label();

    rsx! {
        section { class: "quiz-summary",
            h2 { class: "quiz-summary__title", "Practice complete" }
            p { class: "quiz-summary__subtitle", "Results of this grammar drill" }

            div { class: "quiz-summary__score",
                "{score_label}"
                span { class: "quiz-summary__percent", " ({vm.percentage}%)" }
            }
            p { class: "quiz-summary__message", "{vm.message}" }

            div { class: "quiz-summary__tips",
                h4 { "Review suggestions" }
                ul {
                    for tip in vm.tips.iter() {
                        li { "{tip}" }
                    }
                }
            }

            button {
                class: "quiz-action quiz-action--primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Practice again"
            }
        }
    }
}
