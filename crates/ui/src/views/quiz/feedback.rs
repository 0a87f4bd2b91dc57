use dioxus::prelude::*;

use crate::vm::{FeedbackVm, inline_markdown_to_html};

#[component]
pub(super) fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let message = feedback.message.as_deref().map(inline_markdown_to_html);

    rsx! {
        div { class: "feedback", role: "status",
            span { class: feedback.verdict_class, "{feedback.verdict_label}" }
            if let Some(html) = message {
                p { class: "feedback__message", dangerous_inner_html: "{html}" }
            }
        }
    }
}
