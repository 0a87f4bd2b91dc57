use dioxus::prelude::*;

use services::SessionProgress;

#[component]
pub(super) fn ProgressHeader(progress: SessionProgress, kind_label: &'static str) -> Element {
    let percent = progress.completion_percent;

    rsx! {
        header { class: "quiz-header",
            div { class: "quiz-header__row",
                span { class: "quiz-header__position", "Question {progress.position()} of {progress.total}" }
                span { class: "quiz-header__kind", "{kind_label}" }
                span { class: "quiz-header__answered", "{progress.answered} / {progress.total} answered" }
            }
            div {
                class: "progress-bar",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{percent}",
                div { class: "progress-bar__fill", style: "width: {percent}%" }
            }
        }
    }
}
