//! Answer checking for every question kind.
//!
//! Checks are pure and synchronous. A missing answer, or one whose shape does
//! not belong to the question kind, evaluates to `Verdict::Unanswered`.

use std::collections::BTreeMap;

use url::Url;

use crate::model::{Answer, Question, QuestionKind, VennRegion};

/// Outcome of comparing a stored answer with the question's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Unanswered,
    Correct,
    Incorrect,
    /// Ungraded kinds (reflection, self rating) with an acceptable answer.
    Recorded,
}

impl Verdict {
    fn from_match(is_correct: bool) -> Self {
        if is_correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Unanswered => "Unanswered",
            Verdict::Correct => "Correct",
            Verdict::Incorrect => "Incorrect",
            Verdict::Recorded => "Recorded",
        }
    }
}

impl Question {
    #[must_use]
    pub fn check(&self, answer: Option<&Answer>) -> Verdict {
        self.kind.check(answer)
    }

    /// Learner-facing line shown once feedback is revealed.
    #[must_use]
    pub fn feedback(&self, verdict: Verdict) -> Option<String> {
        let base = match verdict {
            Verdict::Unanswered => return Some("Answer the question to see feedback.".to_string()),
            Verdict::Correct => "Correct!".to_string(),
            Verdict::Recorded => "Thanks, your response was recorded.".to_string(),
            Verdict::Incorrect => self.kind.reveal(),
        };
        Some(match &self.explanation {
            Some(explanation) if verdict != Verdict::Recorded => format!("{base} {explanation}"),
            _ => base,
        })
    }

    #[must_use]
    pub fn default_answer(&self) -> Option<Answer> {
        self.kind.default_answer()
    }
}

impl QuestionKind {
    #[must_use]
    pub fn check(&self, answer: Option<&Answer>) -> Verdict {
        let Some(answer) = answer else {
            return Verdict::Unanswered;
        };
        if !self.fits(answer) {
            return Verdict::Unanswered;
        }

        match (self, answer) {
            (
                Self::MultipleChoice(data) | Self::OddOneOut(data),
                Answer::Choice(choice),
            ) => Verdict::from_match(*choice == data.correct),
            (Self::ConfidenceCheck(data), Answer::Confident { choice, .. }) => {
                Verdict::from_match(*choice == data.correct)
            }
            (Self::Scenario(data), Answer::Choice(choice)) => {
                Verdict::from_match(*choice == data.best)
            }
            (Self::Hotspot(data), Answer::Choice(choice)) => {
                Verdict::from_match(*choice == data.target)
            }
            (Self::TrueFalse(data), Answer::Flag(value)) => {
                Verdict::from_match(*value == data.answer)
            }
            (Self::MultiSelect(data), Answer::Choices(selected)) => {
                Verdict::from_match(*selected == data.correct)
            }
            (Self::ErrorSpotting(data), Answer::Choices(selected)) => {
                Verdict::from_match(*selected == data.faulty)
            }
            (Self::Ranking(data), Answer::Order(order)) => {
                Verdict::from_match(*order == data.correct_order)
            }
            (Self::Sequence(data), Answer::Order(order)) => {
                Verdict::from_match(*order == data.correct_order)
            }
            (Self::Matching(data), Answer::Pairs(pairs)) => Verdict::from_match(*pairs == data.pairs),
            (Self::ImageLabeling(data), Answer::Pairs(pairs)) => {
                Verdict::from_match(*pairs == data.placements)
            }
            (Self::Categorization(data), Answer::Pairs(pairs)) => {
                Verdict::from_match(*pairs == data.assignments)
            }
            (Self::VennClassification(data), Answer::Regions(regions)) => {
                Verdict::from_match(*regions == data.regions)
            }
            (Self::Cloze(data), Answer::Blanks(filled)) => {
                if filled.iter().all(|value| value.trim().is_empty()) {
                    return Verdict::Unanswered;
                }
                let all_match = filled.len() == data.blanks.len()
                    && filled
                        .iter()
                        .zip(&data.blanks)
                        .all(|(value, accepted)| {
                            accepted.iter().any(|candidate| same_word(value, candidate))
                        });
                Verdict::from_match(all_match)
            }
            (Self::ShortAnswer(data), Answer::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Verdict::Unanswered;
                }
                let matched = data.accepted.iter().any(|candidate| {
                    if data.case_sensitive {
                        candidate.trim() == text
                    } else {
                        same_word(text, candidate)
                    }
                });
                Verdict::from_match(matched)
            }
            (Self::WordScramble(data), Answer::Text(text)) => {
                if text.trim().is_empty() {
                    return Verdict::Unanswered;
                }
                Verdict::from_match(same_word(text, &data.word))
            }
            (Self::CodeOutput(data), Answer::Text(text)) => {
                if text.trim().is_empty() {
                    return Verdict::Unanswered;
                }
                Verdict::from_match(normalize_output(text) == normalize_output(&data.expected))
            }
            (Self::Reflection(data), Answer::Text(text)) => {
                let length = text.trim().chars().count();
                if length > 0 && length >= data.min_chars {
                    Verdict::Recorded
                } else {
                    Verdict::Unanswered
                }
            }
            (Self::NumericEstimate(data), Answer::Number(value)) if value.is_finite() => {
                Verdict::from_match((value - data.answer).abs() <= data.tolerance)
            }
            (Self::TimelinePlacement(data), Answer::Number(value)) if value.is_finite() => {
                let distance = (value - f64::from(data.year)).abs();
                Verdict::from_match(distance <= f64::from(data.tolerance))
            }
            (Self::Simulation(data), Answer::Number(value)) if value.is_finite() => {
                let in_range = (data.min..=data.max).contains(value);
                Verdict::from_match(in_range && (value - data.target).abs() <= data.tolerance)
            }
            (Self::UrlSubmission(data), Answer::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Verdict::Unanswered;
                }
                Verdict::from_match(url_is_acceptable(text, data.require_https))
            }
            (Self::SelfRating(data), Answer::Rating(rating)) => {
                if (1..=data.scale).contains(rating) {
                    Verdict::Recorded
                } else {
                    Verdict::Unanswered
                }
            }
            (Self::FlashcardRecall(_), Answer::Flag(remembered)) => Verdict::from_match(*remembered),
            _ => Verdict::Unanswered,
        }
    }

    /// Whether every index and length in `answer` refers to this question's
    /// payload. Shape mismatches are left to `check`.
    fn fits(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (
                Self::MultipleChoice(data) | Self::OddOneOut(data) | Self::ConfidenceCheck(data),
                Answer::Choice(choice) | Answer::Confident { choice, .. },
            ) => *choice < data.options.len(),
            (Self::Scenario(data), Answer::Choice(choice)) => *choice < data.options.len(),
            (Self::Hotspot(data), Answer::Choice(choice)) => *choice < data.regions.len(),
            (Self::MultiSelect(data), Answer::Choices(selected)) => {
                indices_fit(selected.iter(), data.options.len())
            }
            (Self::ErrorSpotting(data), Answer::Choices(selected)) => {
                indices_fit(selected.iter(), data.lines.len())
            }
            (Self::Ranking(data), Answer::Order(order)) => order_fits(order, data.items.len()),
            (Self::Sequence(data), Answer::Order(order)) => order_fits(order, data.steps.len()),
            (Self::Matching(data), Answer::Pairs(pairs)) => {
                pairs_fit(pairs, data.left.len(), data.right.len())
            }
            (Self::ImageLabeling(data), Answer::Pairs(pairs)) => {
                pairs_fit(pairs, data.labels.len(), data.regions.len())
            }
            (Self::Categorization(data), Answer::Pairs(pairs)) => {
                pairs_fit(pairs, data.items.len(), data.categories.len())
            }
            (Self::VennClassification(data), Answer::Regions(regions)) => {
                indices_fit(regions.keys(), data.items.len())
            }
            (Self::Cloze(data), Answer::Blanks(filled)) => filled.len() == data.blanks.len(),
            _ => true,
        }
    }

    /// The payload a widget starts from before the learner touches it.
    ///
    /// Only shapes with a meaningful neutral state have one; choice-style
    /// widgets start empty.
    #[must_use]
    pub fn default_answer(&self) -> Option<Answer> {
        match self {
            Self::Ranking(data) => Some(Answer::Order((0..data.items.len()).collect())),
            Self::Sequence(data) => Some(Answer::Order((0..data.steps.len()).collect())),
            Self::Cloze(data) => Some(Answer::Blanks(vec![String::new(); data.blanks.len()])),
            Self::Simulation(data) => Some(Answer::Number(data.min)),
            Self::TimelinePlacement(data) => Some(Answer::Number(f64::from(data.start_year))),
            _ => None,
        }
    }

    fn reveal(&self) -> String {
        match self {
            Self::MultipleChoice(data) | Self::OddOneOut(data) | Self::ConfidenceCheck(data) => {
                format!("The answer is: {}.", option_text(&data.options, data.correct))
            }
            Self::Scenario(data) => {
                format!("The best choice is: {}.", option_text(&data.options, data.best))
            }
            Self::Hotspot(data) => {
                format!("Look for the {}.", option_text(&data.regions, data.target))
            }
            Self::TrueFalse(data) => {
                let truth = if data.answer { "true" } else { "false" };
                format!("The statement is {truth}.")
            }
            Self::MultiSelect(data) => format!(
                "The correct options are: {}.",
                join_indices(&data.options, data.correct.iter().copied())
            ),
            Self::ErrorSpotting(data) => format!(
                "The faulty lines are: {}.",
                data.faulty
                    .iter()
                    .map(|line| (line + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Ranking(data) => format!(
                "Correct order: {}.",
                join_indices(&data.items, data.correct_order.iter().copied())
            ),
            Self::Sequence(data) => format!(
                "Correct order: {}.",
                join_indices(&data.steps, data.correct_order.iter().copied())
            ),
            Self::Matching(data) => {
                format!("Correct pairs: {}.", join_pairs(&data.left, &data.right, &data.pairs))
            }
            Self::ImageLabeling(data) => format!(
                "Correct labels: {}.",
                join_pairs(&data.labels, &data.regions, &data.placements)
            ),
            Self::Categorization(data) => format!(
                "Correct groups: {}.",
                join_pairs(&data.items, &data.categories, &data.assignments)
            ),
            Self::VennClassification(data) => format!(
                "Correct regions: {}.",
                data.regions
                    .iter()
                    .map(|(item, region)| format!(
                        "{} → {}",
                        option_text(&data.items, *item),
                        venn_label(*region, &data.left_label, &data.right_label)
                    ))
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
            Self::Cloze(data) => format!(
                "Expected: {}.",
                data.blanks
                    .iter()
                    .map(|accepted| accepted.first().map_or("", String::as_str))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::ShortAnswer(data) => format!(
                "Accepted answer: {}.",
                data.accepted.first().map_or("", String::as_str)
            ),
            Self::WordScramble(data) => format!("The word is \"{}\".", data.word),
            Self::CodeOutput(data) => format!("The program prints: {}", data.expected.trim()),
            Self::NumericEstimate(data) => {
                let unit = if data.unit.is_empty() {
                    String::new()
                } else {
                    format!(" {}", data.unit)
                };
                format!("The answer is {}{unit} (within ±{}).", data.answer, data.tolerance)
            }
            Self::TimelinePlacement(data) => {
                format!("{} happened in {}.", data.event, data.year)
            }
            Self::Simulation(data) => format!(
                "Set {} to about {} (±{}).",
                data.parameter, data.target, data.tolerance
            ),
            Self::UrlSubmission(data) => {
                if data.require_https {
                    "Not a valid URL. Use a full https:// address.".to_string()
                } else {
                    "Not a valid URL. Use a full address such as https://example.com.".to_string()
                }
            }
            Self::FlashcardRecall(data) => format!("The answer was: {}.", data.back),
            Self::Reflection(_) | Self::SelfRating(_) => String::new(),
        }
    }
}

#[must_use]
pub fn venn_label(region: VennRegion, left: &str, right: &str) -> String {
    match region {
        VennRegion::LeftOnly => format!("{left} only"),
        VennRegion::Both => "Both".to_string(),
        VennRegion::RightOnly => format!("{right} only"),
        VennRegion::Neither => "Neither".to_string(),
    }
}

fn same_word(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

fn indices_fit<'a>(mut indices: impl Iterator<Item = &'a usize>, len: usize) -> bool {
    indices.all(|index| *index < len)
}

fn order_fits(order: &[usize], len: usize) -> bool {
    order.len() == len && indices_fit(order.iter(), len)
}

fn pairs_fit(pairs: &BTreeMap<usize, usize>, left: usize, right: usize) -> bool {
    pairs.iter().all(|(from, to)| *from < left && *to < right)
}

fn normalize_output(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Accepts absolute `http`/`https` URLs with a host; `https` only when
/// `require_https` is set.
#[must_use]
pub fn url_is_acceptable(raw: &str, require_https: bool) -> bool {
    match Url::parse(raw) {
        Ok(url) => {
            let scheme_ok = if require_https {
                url.scheme() == "https"
            } else {
                matches!(url.scheme(), "http" | "https")
            };
            scheme_ok && url.has_host()
        }
        Err(_) => false,
    }
}

fn option_text(options: &[String], index: usize) -> &str {
    options.get(index).map_or("?", String::as_str)
}

fn join_indices(options: &[String], indices: impl Iterator<Item = usize>) -> String {
    indices
        .map(|index| option_text(options, index))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_pairs(left: &[String], right: &[String], pairs: &BTreeMap<usize, usize>) -> String {
    pairs
        .iter()
        .map(|(l, r)| format!("{} → {}", option_text(left, *l), option_text(right, *r)))
        .collect::<Vec<_>>()
        .join("; ")
}
