use dioxus::prelude::*;

use quiz_core::model::Answer;

use super::option_class;

/// Front, then back, then an honest self-report.
///
/// The flipped side is widget-local and starts over whenever the widget is
/// remounted for another question.
#[component]
pub fn FlashcardWidget(
    front: String,
    back: String,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let remembered = match current {
        Some(Answer::Flag(value)) => Some(value),
        _ => None,
    };
    let mut flipped = use_signal(|| remembered.is_some());
    let show_back = flipped() || revealed;

    rsx! {
        div { class: "widget widget-flashcard",
            div { class: if show_back { "flashcard flashcard--flipped" } else { "flashcard" },
                p { class: "flashcard-front", "{front}" }
                if show_back {
                    p { class: "flashcard-back", "{back}" }
                }
            }
            if show_back {
                div { class: "options-row",
                    button {
                        class: option_class(remembered == Some(true)),
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| on_answer.call(Answer::Flag(true)),
                        "I remembered"
                    }
                    button {
                        class: option_class(remembered == Some(false)),
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| on_answer.call(Answer::Flag(false)),
                        "Not yet"
                    }
                }
            } else {
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| flipped.set(true),
                    "Flip card"
                }
            }
        }
    }
}
