use dioxus::prelude::*;

use quiz_core::model::Answer;

/// Any number of options; each change reports the whole selection.
#[component]
pub fn MultiSelectWidget(
    options: Vec<String>,
    numbered: bool,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let rows: Vec<(usize, String, bool, Answer)> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let checked = matches!(&current, Some(Answer::Choices(set)) if set.contains(&index));
            let toggled = Answer::toggled_choice(current.as_ref(), index);
            (index, option.clone(), checked, toggled)
        })
        .collect();

    rsx! {
        ul { class: if numbered { "widget widget-multi widget-multi--lines" } else { "widget widget-multi" },
            for (index, option, checked, toggled) in rows {
                li { key: "{index}",
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked,
                            disabled: revealed,
                            onchange: move |_| on_answer.call(toggled.clone()),
                        }
                        if numbered {
                            span { class: "line-number", "{index + 1}" }
                            code { "{option}" }
                        } else {
                            span { "{option}" }
                        }
                    }
                }
            }
        }
    }
}
