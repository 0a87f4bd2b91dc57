use dioxus::prelude::*;

use crate::vm::{JumpItemVm, QuizIntent};

fn jump_class(item: &JumpItemVm) -> &'static str {
    match (item.current, item.answered) {
        (true, _) => "jump jump--current",
        (false, true) => "jump jump--answered",
        (false, false) => "jump",
    }
}

#[component]
pub(super) fn JumpStrip(items: Vec<JumpItemVm>, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        nav { class: "jump-strip", aria_label: "Questions",
            for item in items {
                button {
                    key: "{item.index}",
                    class: jump_class(&item),
                    r#type: "button",
                    aria_current: item.current,
                    onclick: move |_| on_intent.call(QuizIntent::JumpTo(item.index)),
                    "{item.label}"
                }
            }
        }
    }
}
