use dioxus::prelude::*;

use quiz_core::model::Answer;

/// Free text: short answers, unscrambled words, program output, reflections.
#[component]
pub fn TextWidget(
    placeholder: &'static str,
    multiline: bool,
    min_chars: Option<usize>,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let value = match current {
        Some(Answer::Text(text)) => text,
        _ => String::new(),
    };
    let length = value.trim().chars().count();

    rsx! {
        div { class: "widget widget-text",
            if multiline {
                textarea {
                    class: "text-input",
                    rows: 4,
                    placeholder,
                    value: "{value}",
                    disabled: revealed,
                    oninput: move |evt: FormEvent| on_answer.call(Answer::Text(evt.value())),
                }
            } else {
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder,
                    value: "{value}",
                    disabled: revealed,
                    oninput: move |evt: FormEvent| on_answer.call(Answer::Text(evt.value())),
                }
            }
            if let Some(min) = min_chars {
                p {
                    class: if length >= min { "char-count char-count--ok" } else { "char-count" },
                    "{length} / {min} characters"
                }
            }
        }
    }
}
