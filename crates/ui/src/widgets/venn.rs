use std::collections::BTreeMap;

use dioxus::prelude::*;

use quiz_core::grading::venn_label;
use quiz_core::model::{Answer, VennData, VennRegion};

use super::option_class;

struct RegionChoice {
    label: String,
    active: bool,
    next: Answer,
}

/// Place every item into one of the four regions of a two-set diagram.
#[component]
pub fn VennWidget(
    data: VennData,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let placed = match &current {
        Some(Answer::Regions(regions)) => regions.clone(),
        _ => BTreeMap::new(),
    };
    let rows: Vec<(usize, String, Vec<RegionChoice>)> = data
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let choices = VennRegion::ALL
                .into_iter()
                .map(|region| RegionChoice {
                    label: venn_label(region, &data.left_label, &data.right_label),
                    active: placed.get(&index) == Some(&region),
                    next: Answer::with_region(current.as_ref(), index, region),
                })
                .collect();
            (index, item.clone(), choices)
        })
        .collect();

    rsx! {
        div { class: "widget widget-venn",
            div { class: "venn-legend",
                span { class: "venn-set venn-set--left", "{data.left_label}" }
                span { class: "venn-set venn-set--right", "{data.right_label}" }
            }
            for (index, item, choices) in rows {
                div { key: "{index}", class: "venn-row",
                    span { class: "venn-item", "{item}" }
                    div { class: "options-row",
                        for choice in choices {
                            button {
                                key: "{choice.label}",
                                class: option_class(choice.active),
                                r#type: "button",
                                disabled: revealed,
                                onclick: move |_| on_answer.call(choice.next.clone()),
                                "{choice.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
