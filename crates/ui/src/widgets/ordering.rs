use dioxus::prelude::*;

use quiz_core::model::Answer;

/// Current arrangement, falling back to bank order for anything that is not a
/// permutation of the items.
fn current_order(current: Option<&Answer>, len: usize) -> Vec<usize> {
    if let Some(Answer::Order(order)) = current {
        let mut sorted = order.clone();
        sorted.sort_unstable();
        if sorted.iter().copied().eq(0..len) {
            return order.clone();
        }
    }
    (0..len).collect()
}

/// Reorder items by swapping neighbours.
#[component]
pub fn OrderingWidget(
    items: Vec<String>,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let order = current_order(current.as_ref(), items.len());
    let rows: Vec<(usize, String, Option<Answer>, Option<Answer>)> = order
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let label = items.get(*item).cloned().unwrap_or_default();
            let up = position
                .checked_sub(1)
                .and_then(|above| Answer::swapped(&order, position, above));
            let down = Answer::swapped(&order, position, position + 1);
            (position, label, up, down)
        })
        .collect();

    rsx! {
        ol { class: "widget widget-ordering",
            for (position, label, up, down) in rows {
                li { key: "{position}", class: "ordering-row",
                    span { class: "ordering-label", "{label}" }
                    button {
                        class: "ordering-move",
                        r#type: "button",
                        aria_label: "Move up",
                        disabled: revealed || up.is_none(),
                        onclick: {
                            let up = up.clone();
                            move |_| {
                                if let Some(next) = up.clone() {
                                    on_answer.call(next);
                                }
                            }
                        },
                        "↑"
                    }
                    button {
                        class: "ordering-move",
                        r#type: "button",
                        aria_label: "Move down",
                        disabled: revealed || down.is_none(),
                        onclick: {
                            let down = down.clone();
                            move |_| {
                                if let Some(next) = down.clone() {
                                    on_answer.call(next);
                                }
                            }
                        },
                        "↓"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_identity_for_foreign_shapes() {
        assert_eq!(current_order(None, 3), vec![0, 1, 2]);
        assert_eq!(current_order(Some(&Answer::Order(vec![0, 0, 1])), 3), vec![0, 1, 2]);
        assert_eq!(current_order(Some(&Answer::Choice(1)), 2), vec![0, 1]);
    }

    #[test]
    fn keeps_a_valid_permutation() {
        assert_eq!(current_order(Some(&Answer::Order(vec![2, 0, 1])), 3), vec![2, 0, 1]);
    }
}
