use dioxus::prelude::*;

use quiz_core::grading::url_is_acceptable;
use quiz_core::model::Answer;

/// A pasted link, with a live hint while the learner types.
#[component]
pub fn UrlWidget(
    hint: String,
    require_https: bool,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let value = match current {
        Some(Answer::Text(text)) => text,
        _ => String::new(),
    };
    let status = if value.trim().is_empty() {
        None
    } else if url_is_acceptable(value.trim(), require_https) {
        Some(("url-status url-status--ok", "Looks like a valid link."))
    } else if require_https {
        Some(("url-status", "Not a valid https:// link yet."))
    } else {
        Some(("url-status", "Not a valid link yet."))
    };

    rsx! {
        div { class: "widget widget-url",
            p { class: "widget-hint", "{hint}" }
            input {
                class: "text-input",
                r#type: "url",
                placeholder: if require_https { "https://" } else { "http://" },
                value: "{value}",
                disabled: revealed,
                oninput: move |evt: FormEvent| on_answer.call(Answer::Text(evt.value())),
            }
            if let Some((class, message)) = status {
                p { class, "{message}" }
            }
        }
    }
}
