use dioxus::prelude::*;

use crate::vm::{OutcomeRowVm, SummaryVm, inline_markdown_to_html};

#[component]
pub fn SummaryView(
    summary: SummaryVm,
    on_review: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "summary-page",
            h2 { "Quiz Summary" }

            // Definition list reads well for label/value pairs.
            dl { class: "summary",
                dt { "Score" }
                dd { "{summary.score_str}" }

                dt { "Started" }
                dd { "{summary.started_at_str}" }

                if let Some(completed) = summary.completed_at_str.as_deref() {
                    dt { "Completed" }
                    dd { "{completed}" }
                }
                if let Some(duration) = summary.duration_str.as_deref() {
                    dt { "Time" }
                    dd { "{duration}" }
                }

                dt { "Total" }
                dd { "{summary.total}" }

                dt { "Correct" }
                dd { "{summary.correct}" }

                dt { "Incorrect" }
                dd { "{summary.incorrect}" }

                dt { "Recorded" }
                dd { "{summary.recorded}" }

                dt { "Unanswered" }
                dd { "{summary.unanswered}" }
            }

            ol { class: "summary-rows",
                for row in summary.rows.iter() {
                    OutcomeRow { key: "{row.position}", row: row.clone() }
                }
            }

            div { class: "summary-actions",
                button {
                    class: "btn btn-secondary",
                    id: "summary-review",
                    r#type: "button",
                    onclick: move |_| on_review.call(()),
                    "Review answers"
                }
                button {
                    class: "btn btn-primary",
                    id: "summary-restart",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start over"
                }
            }
        }
    }
}

#[component]
fn OutcomeRow(row: OutcomeRowVm) -> Element {
    let title_html = inline_markdown_to_html(&row.title);
    let feedback_html = row.feedback.as_deref().map(inline_markdown_to_html);

    rsx! {
        li { class: "summary-row",
            span { class: "summary-row__position", "{row.position}. " }
            span { class: "summary-row__title", dangerous_inner_html: "{title_html}" }
            span { class: "summary-row__kind", "{row.kind_label}" }
            if !row.graded {
                span { class: "summary-row__ungraded", "not scored" }
            }
            span { class: row.verdict_class, "{row.verdict_label}" }
            if let Some(html) = feedback_html {
                p { class: "summary-row__feedback", dangerous_inner_html: "{html}" }
            }
        }
    }
}
