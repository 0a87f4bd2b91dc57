use dioxus::prelude::*;

use quiz_core::model::Answer;

use super::option_class;

#[component]
pub fn RatingWidget(
    statement: String,
    scale: u8,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let selected = match current {
        Some(Answer::Rating(value)) => Some(value),
        _ => None,
    };

    rsx! {
        div { class: "widget widget-rating",
            blockquote { class: "statement", "{statement}" }
            div { class: "options-row", role: "radiogroup",
                for value in 1..=scale {
                    button {
                        key: "{value}",
                        class: option_class(selected == Some(value)),
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| on_answer.call(Answer::Rating(value)),
                        "{value}"
                    }
                }
            }
            div { class: "rating-scale",
                span { "Not at all" }
                span { "Completely" }
            }
        }
    }
}
