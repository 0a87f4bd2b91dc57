use std::collections::BTreeMap;

use dioxus::prelude::*;

use quiz_core::model::Answer;

/// `None` for the placeholder entry or anything that is not a target index.
fn parse_target(raw: &str, target_count: usize) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|target| *target < target_count)
}

/// Assign each source to one target: matching pairs, image labels, and
/// categories all share this shape.
#[component]
pub fn PairingWidget(
    sources: Vec<String>,
    targets: Vec<String>,
    placeholder: &'static str,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let pairs = match &current {
        Some(Answer::Pairs(pairs)) => pairs.clone(),
        _ => BTreeMap::new(),
    };
    let target_count = targets.len();
    let rows: Vec<(usize, String, String, Option<Answer>)> = sources
        .iter()
        .enumerate()
        .map(|(index, source)| {
            let selected = pairs
                .get(&index)
                .map_or_else(String::new, ToString::to_string);
            (index, source.clone(), selected, current.clone())
        })
        .collect();

    rsx! {
        div { class: "widget widget-pairing",
            for (index, source, selected, base) in rows {
                div { key: "{index}", class: "pairing-row",
                    span { class: "pairing-source", "{source}" }
                    select {
                        class: "pairing-target",
                        value: "{selected}",
                        disabled: revealed,
                        onchange: move |evt: FormEvent| {
                            let target = parse_target(&evt.value(), target_count);
                            on_answer.call(Answer::with_pair(base.as_ref(), index, target));
                        },
                        option { value: "", "{placeholder}" }
                        for (target_index, target) in targets.iter().enumerate() {
                            option {
                                key: "{target_index}",
                                value: "{target_index}",
                                selected: selected == target_index.to_string(),
                                "{target}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_target;

    #[test]
    fn placeholder_and_stray_values_unmap_the_source() {
        assert_eq!(parse_target("1", 3), Some(1));
        assert_eq!(parse_target("", 3), None);
        assert_eq!(parse_target("3", 3), None);
        assert_eq!(parse_target("-1", 3), None);
    }
}
