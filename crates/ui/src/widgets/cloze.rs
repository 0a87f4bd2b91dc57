use dioxus::prelude::*;

use quiz_core::model::Answer;

/// Text segments with a gap between each consecutive pair.
#[component]
pub fn ClozeWidget(
    segments: Vec<String>,
    blank_count: usize,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let mut values = match &current {
        Some(Answer::Blanks(values)) => values.clone(),
        _ => Vec::new(),
    };
    values.resize(blank_count, String::new());

    let parts: Vec<(usize, String, Option<String>, String, Option<Answer>)> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let gap = values.get(index).filter(|_| index < blank_count).cloned();
            let label = format!("Blank {}", index + 1);
            (index, segment.clone(), gap, label, current.clone())
        })
        .collect();

    rsx! {
        p { class: "widget widget-cloze",
            for (index, segment, gap, label, base) in parts {
                span { key: "{index}",
                    "{segment}"
                    if let Some(value) = gap {
                        input {
                            class: "cloze-gap",
                            r#type: "text",
                            aria_label: "{label}",
                            value: "{value}",
                            disabled: revealed,
                            oninput: move |evt: FormEvent| {
                                on_answer.call(Answer::with_blank(
                                    base.as_ref(),
                                    blank_count,
                                    index,
                                    evt.value(),
                                ));
                            },
                        }
                    }
                }
            }
        }
    }
}
