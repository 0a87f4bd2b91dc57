use dioxus::prelude::*;

use quiz_core::model::Answer;

use super::option_class;

fn selected_index(current: Option<&Answer>) -> Option<usize> {
    match current {
        Some(Answer::Choice(index)) => Some(*index),
        _ => None,
    }
}

/// One pick from a list of options.
#[component]
pub fn ChoiceWidget(
    options: Vec<String>,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let selected = selected_index(current.as_ref());

    rsx! {
        div { class: "widget widget-choice", role: "radiogroup",
            for (index, option) in options.iter().enumerate() {
                button {
                    key: "{index}",
                    class: option_class(selected == Some(index)),
                    r#type: "button",
                    role: "radio",
                    aria_checked: selected == Some(index),
                    disabled: revealed,
                    onclick: move |_| on_answer.call(Answer::Choice(index)),
                    "{option}"
                }
            }
        }
    }
}

#[component]
pub fn TrueFalseWidget(
    statement: String,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let selected = match current {
        Some(Answer::Flag(value)) => Some(value),
        _ => None,
    };

    rsx! {
        div { class: "widget widget-true-false",
            blockquote { class: "statement", "{statement}" }
            div { class: "options-row",
                button {
                    class: option_class(selected == Some(true)),
                    r#type: "button",
                    disabled: revealed,
                    onclick: move |_| on_answer.call(Answer::Flag(true)),
                    "True"
                }
                button {
                    class: option_class(selected == Some(false)),
                    r#type: "button",
                    disabled: revealed,
                    onclick: move |_| on_answer.call(Answer::Flag(false)),
                    "False"
                }
            }
        }
    }
}

/// Pick a region of a (described) diagram.
#[component]
pub fn HotspotWidget(
    image: String,
    regions: Vec<String>,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let selected = selected_index(current.as_ref());

    rsx! {
        figure { class: "widget widget-hotspot",
            figcaption { "{image}" }
            div { class: "hotspot-grid",
                for (index, region) in regions.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if selected == Some(index) { "hotspot hotspot--selected" } else { "hotspot" },
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| on_answer.call(Answer::Choice(index)),
                        "{region}"
                    }
                }
            }
        }
    }
}
