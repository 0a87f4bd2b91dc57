use dioxus::prelude::*;

use quiz_core::model::Answer;

fn current_number(current: Option<&Answer>) -> Option<f64> {
    match current {
        Some(Answer::Number(value)) if value.is_finite() => Some(*value),
        _ => None,
    }
}

/// Unparseable input is reported as NaN, which the session treats as blank.
fn parse_number(raw: &str) -> Answer {
    Answer::Number(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

#[component]
pub fn NumberWidget(
    unit: String,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let value = current_number(current.as_ref()).map_or_else(String::new, |n| n.to_string());

    rsx! {
        div { class: "widget widget-number",
            input {
                class: "number-input",
                r#type: "number",
                step: "any",
                value: "{value}",
                disabled: revealed,
                oninput: move |evt: FormEvent| on_answer.call(parse_number(&evt.value())),
            }
            if !unit.is_empty() {
                span { class: "unit", "{unit}" }
            }
        }
    }
}

/// Range input for timelines and simulations.
#[component]
pub fn SliderWidget(
    label: String,
    min: f64,
    max: f64,
    step: f64,
    precision: usize,
    current: Option<Answer>,
    revealed: bool,
    on_answer: EventHandler<Answer>,
) -> Element {
    let value = current_number(current.as_ref())
        .unwrap_or(min)
        .clamp(min, max);
    let value_str = format!("{value:.precision$}");
    let min_str = format!("{min:.precision$}");
    let max_str = format!("{max:.precision$}");

    rsx! {
        div { class: "widget widget-slider",
            label { class: "slider-label",
                span { "{label}: " }
                strong { "{value_str}" }
            }
            input {
                class: "slider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                disabled: revealed,
                oninput: move |evt: FormEvent| on_answer.call(parse_number(&evt.value())),
            }
            div { class: "slider-bounds",
                span { "{min_str}" }
                span { "{max_str}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_input_becomes_blank_number() {
        assert_eq!(parse_number(" 8.5 "), Answer::Number(8.5));
        assert!(parse_number("abc").is_blank());
        assert!(parse_number("").is_blank());
    }

    #[test]
    fn non_finite_values_are_not_shown() {
        assert_eq!(current_number(Some(&Answer::Number(f64::NAN))), None);
        assert_eq!(current_number(Some(&Answer::Number(3.0))), Some(3.0));
        assert_eq!(current_number(Some(&Answer::Text("3".into()))), None);
    }
}
