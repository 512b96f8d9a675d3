use dioxus::prelude::*;

use crate::vm::{FeedbackVm, OptionVm, QuestionCardVm, QuizIntent};

#[component]
pub fn QuestionCard(vm: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let blank_class = format!("quiz-blank quiz-blank--{}", vm.blank_tone);
    let difficulty_class = format!("quiz-tag quiz-tag--{}", vm.difficulty_tone);
    let submit_class = if vm.can_submit {
        "quiz-action quiz-action--primary"
    } else {
        "quiz-action quiz-action--disabled"
    };
    let can_submit = vm.can_submit;

    rsx! {
        section { class: "quiz-card",
            div { class: "quiz-tags",
                span { class: "{difficulty_class}", "{vm.difficulty_label}" }
                span { class: "quiz-tag quiz-tag--category", "{vm.category}" }
            }

            p { class: "quiz-sentence",
                "{vm.before_blank}"
                span { class: "{blank_class}", "{vm.blank_text}" }
                "{vm.after_blank}"
            }

            div { class: "quiz-options",
                for option in vm.options.iter().cloned() {
                    OptionButton { key: "{option.text}", option: option.clone(), on_intent: on_intent }
                }
            }

            div { class: "quiz-actions",
                if vm.is_submitted {
                    button {
                        class: "quiz-action quiz-action--primary",
                        id: "quiz-advance",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Advance),
                        "{vm.advance_label} →"
                    }
                } else {
                    button {
                        class: "{submit_class}",
                        id: "quiz-submit",
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: move |_| {
                            if can_submit {
                                on_intent.call(QuizIntent::Submit);
                            }
                        },
                        "Submit answer"
                    }
                }
            }
        }

        if let Some(feedback) = vm.feedback.clone() {
            FeedbackPanel { feedback }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let text = option.text.clone();
    let class = option.class();
    let disabled = option.disabled;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| {
                if !disabled {
                    on_intent.call(QuizIntent::Select(text.clone()));
                }
            },
            span { class: "quiz-option__shortcut", "{option.shortcut}" }
            span { class: "quiz-option__text", "{option.text}" }
            if let Some(mark) = option.mark() {
                span { class: "quiz-option__mark", "{mark}" }
            }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let tone = if feedback.is_correct {
        "quiz-feedback quiz-feedback--correct"
    } else {
        "quiz-feedback quiz-feedback--incorrect"
    };

    rsx! {
        section { class: "{tone}", role: "status",
            h3 { class: "quiz-feedback__headline", "{feedback.headline}" }
            dl { class: "quiz-feedback__body",
                dt { "Grammar rule" }
                dd { "{feedback.rule}" }

                dt { "Example" }
                dd { class: "quiz-feedback__example", "{feedback.example}" }

                dt { "Common mistakes" }
                dd { "{feedback.analysis}" }
            }
        }
    }
}
