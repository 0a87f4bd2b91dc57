use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub(super) fn NavControls(
    can_go_back: bool,
    can_check: bool,
    next_label: &'static str,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        footer { class: "quiz-controls",
            button {
                class: "btn btn-secondary",
                id: "quiz-previous",
                r#type: "button",
                disabled: !can_go_back,
                onclick: move |_| on_intent.call(QuizIntent::Previous),
                "Previous"
            }
            button {
                class: "btn btn-secondary",
                id: "quiz-check",
                r#type: "button",
                disabled: !can_check,
                onclick: move |_| on_intent.call(QuizIntent::Reveal),
                "Check answer"
            }
            button {
                class: "btn btn-primary",
                id: "quiz-next",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "{next_label}"
            }
        }
    }
}

#[component]
pub(super) fn CompletionBanner(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-complete", role: "status",
            p { "Quiz finished. You can still review and change answers." }
            button {
                class: "btn btn-primary",
                id: "quiz-summary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::ShowSummary),
                "View summary"
            }
        }
    }
}
