//! Question widgets.
//!
//! Every widget takes the question payload, the stored (or default) answer,
//! whether feedback has been revealed, and an `on_answer` handler it calls
//! with the full in-progress answer on every local change. Widgets never
//! judge answers themselves; inputs are disabled once revealed.

mod choice;
mod cloze;
mod confidence;
mod multi_select;
mod numeric;
mod ordering;
mod pairing;
mod rating;
mod recall;
mod text;
mod url;
mod venn;

use dioxus::prelude::*;

use quiz_core::model::{Answer, Question, QuestionKind};

use crate::vm::inline_markdown_to_html;

pub use choice::{ChoiceWidget, HotspotWidget, TrueFalseWidget};
pub use cloze::ClozeWidget;
pub use confidence::ConfidenceWidget;
pub use multi_select::MultiSelectWidget;
pub use numeric::{NumberWidget, SliderWidget};
pub use ordering::OrderingWidget;
pub use pairing::PairingWidget;
pub use rating::RatingWidget;
pub use recall::FlashcardWidget;
pub use text::TextWidget;
pub use url::UrlWidget;
pub use venn::VennWidget;

/// Picks the widget for the question's kind.
#[component]
pub fn QuestionWidget(
    question: Question,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    match question.kind {
        QuestionKind::MultipleChoice(data) | QuestionKind::OddOneOut(data) => rsx! {
            ChoiceWidget { options: data.options, current, revealed, on_answer }
        },
        QuestionKind::TrueFalse(data) => rsx! {
            TrueFalseWidget { statement: data.statement, current, revealed, on_answer }
        },
        QuestionKind::Scenario(data) => rsx! {
            Prompt { text: data.situation }
            ChoiceWidget { options: data.options, current, revealed, on_answer }
        },
        QuestionKind::Hotspot(data) => rsx! {
            HotspotWidget { image: data.image, regions: data.regions, current, revealed, on_answer }
        },
        QuestionKind::ConfidenceCheck(data) => rsx! {
            ConfidenceWidget { options: data.options, current, revealed, on_answer }
        },
        QuestionKind::MultiSelect(data) => rsx! {
            MultiSelectWidget { options: data.options, numbered: false, current, revealed, on_answer }
        },
        QuestionKind::ErrorSpotting(data) => rsx! {
            p { class: "widget-hint", "Select every line that contains a mistake." }
            MultiSelectWidget { options: data.lines, numbered: true, current, revealed, on_answer }
        },
        QuestionKind::Ranking(data) => rsx! {
            Prompt { text: data.criterion }
            OrderingWidget { items: data.items, current, revealed, on_answer }
        },
        QuestionKind::Sequence(data) => rsx! {
            OrderingWidget { items: data.steps, current, revealed, on_answer }
        },
        QuestionKind::Matching(data) => rsx! {
            PairingWidget {
                sources: data.left,
                targets: data.right,
                placeholder: "Match…",
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::ImageLabeling(data) => rsx! {
            figure { class: "image-placeholder", figcaption { "{data.image}" } }
            PairingWidget {
                sources: data.labels,
                targets: data.regions,
                placeholder: "Place label…",
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::Categorization(data) => rsx! {
            PairingWidget {
                sources: data.items,
                targets: data.categories,
                placeholder: "Category…",
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::VennClassification(data) => rsx! {
            VennWidget { data, current, revealed, on_answer }
        },
        QuestionKind::Cloze(data) => rsx! {
            ClozeWidget {
                segments: data.segments,
                blank_count: data.blanks.len(),
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::ShortAnswer(_) => rsx! {
            TextWidget {
                placeholder: "Type your answer",
                multiline: false,
                min_chars: None,
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::WordScramble(data) => rsx! {
            p { class: "scramble", "{data.scrambled}" }
            TextWidget {
                placeholder: "Unscrambled word",
                multiline: false,
                min_chars: None,
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::CodeOutput(data) => rsx! {
            pre { class: "code-block", "data-language": "{data.language}", code { "{data.code}" } }
            TextWidget {
                placeholder: "Expected output",
                multiline: true,
                min_chars: None,
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::Reflection(data) => rsx! {
            Prompt { text: data.prompt }
            TextWidget {
                placeholder: "Write a few sentences",
                multiline: true,
                min_chars: Some(data.min_chars),
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::NumericEstimate(data) => rsx! {
            NumberWidget { unit: data.unit, current, revealed, on_answer }
        },
        QuestionKind::TimelinePlacement(data) => rsx! {
            Prompt { text: data.event }
            SliderWidget {
                label: "Year".to_string(),
                min: f64::from(data.start_year),
                max: f64::from(data.end_year),
                step: 1.0,
                precision: 0,
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::Simulation(data) => rsx! {
            Prompt { text: data.model }
            SliderWidget {
                label: data.parameter,
                min: data.min,
                max: data.max,
                step: data.step,
                precision: if data.step.fract() == 0.0 { 0 } else { 2 },
                current,
                revealed,
                on_answer,
            }
        },
        QuestionKind::UrlSubmission(data) => rsx! {
            UrlWidget { hint: data.hint, require_https: data.require_https, current, revealed, on_answer }
        },
        QuestionKind::SelfRating(data) => rsx! {
            RatingWidget { statement: data.statement, scale: data.scale, current, revealed, on_answer }
        },
        QuestionKind::FlashcardRecall(data) => rsx! {
            FlashcardWidget { front: data.front, back: data.back, current, revealed, on_answer }
        },
    }
}

/// Kind-specific prompt text, rendered from inline markdown.
#[component]
fn Prompt(text: String) -> Element {
    let html = inline_markdown_to_html(&text);
    rsx! {
        p { class: "widget-prompt", dangerous_inner_html: "{html}" }
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "option option--selected"
    } else {
        "option"
    }
}
