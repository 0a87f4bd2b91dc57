use dioxus::prelude::*;

use quiz_core::model::{Answer, Confidence};

use super::option_class;

/// A choice plus how sure the learner is about it.
#[component]
pub fn ConfidenceWidget(
    options: Vec<String>,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let (choice, confidence) = match &current {
        Some(Answer::Confident { choice, confidence }) => (Some(*choice), *confidence),
        _ => (None, Confidence::Unsure),
    };
    let picks: Vec<(usize, String, Answer)> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let next = Answer::with_confident_choice(current.as_ref(), index);
            (index, option.clone(), next)
        })
        .collect();
    let levels: Vec<(Confidence, bool, Option<Answer>)> = Confidence::ALL
        .into_iter()
        .map(|level| {
            let next = Answer::with_confidence(current.as_ref(), level);
            (level, next.is_some(), next)
        })
        .collect();

    rsx! {
        div { class: "widget widget-confidence",
            div { class: "widget-choice", role: "radiogroup",
                for (index, option, next) in picks {
                    button {
                        key: "{index}",
                        class: option_class(choice == Some(index)),
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| on_answer.call(next.clone()),
                        "{option}"
                    }
                }
            }
            p { class: "widget-hint", "How sure are you?" }
            div { class: "options-row",
                for (level, available, next) in levels {
                    button {
                        key: "{level.label()}",
                        class: option_class(choice.is_some() && level == confidence),
                        r#type: "button",
                        disabled: revealed || !available,
                        onclick: move |_| {
                            if let Some(next) = next.clone() {
                                on_answer.call(next);
                            }
                        },
                        "{level.label()}"
                    }
                }
            }
        }
    }
}
