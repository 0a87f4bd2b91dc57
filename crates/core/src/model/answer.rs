use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::VennRegion;

/// How sure the learner was, reported alongside a confidence-check choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Guessing,
    Unsure,
    Certain,
}

impl Confidence {
    pub const ALL: [Confidence; 3] = [Confidence::Guessing, Confidence::Unsure, Confidence::Certain];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Confidence::Guessing => "Guessing",
            Confidence::Unsure => "Unsure",
            Confidence::Certain => "Certain",
        }
    }
}

/// A learner's answer. The shape depends on the question kind.
///
/// Widgets report in-progress answers too, so an `Answer` is not necessarily
/// final; see `QuestionKind::check` for how each shape is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Index of the picked option.
    Choice(usize),
    Flag(bool),
    Confident {
        choice: usize,
        confidence: Confidence,
    },
    Choices(BTreeSet<usize>),
    /// Item indices in the order the learner arranged them.
    Order(Vec<usize>),
    Pairs(BTreeMap<usize, usize>),
    Regions(BTreeMap<usize, VennRegion>),
    Blanks(Vec<String>),
    Text(String),
    Number(f64),
    Rating(u8),
}

/// Answers collected during a session, keyed by question id.
pub type AnswerMap = HashMap<QuestionId, Answer>;

impl Answer {
    /// Toggle `index` in a `Choices` answer, starting from an empty set for
    /// any other shape.
    #[must_use]
    pub fn toggled_choice(current: Option<&Answer>, index: usize) -> Answer {
        let mut selected = match current {
            Some(Answer::Choices(set)) => set.clone(),
            _ => BTreeSet::new(),
        };
        if !selected.remove(&index) {
            selected.insert(index);
        }
        Answer::Choices(selected)
    }

    /// Map `source` to `target` in a `Pairs` answer, or unmap it for `None`.
    #[must_use]
    pub fn with_pair(current: Option<&Answer>, source: usize, target: Option<usize>) -> Answer {
        let mut pairs = match current {
            Some(Answer::Pairs(pairs)) => pairs.clone(),
            _ => BTreeMap::new(),
        };
        match target {
            Some(target) => pairs.insert(source, target),
            None => pairs.remove(&source),
        };
        Answer::Pairs(pairs)
    }

    /// Place item `item` into `region`, replacing any earlier placement.
    #[must_use]
    pub fn with_region(current: Option<&Answer>, item: usize, region: VennRegion) -> Answer {
        let mut regions = match current {
            Some(Answer::Regions(regions)) => regions.clone(),
            _ => BTreeMap::new(),
        };
        regions.insert(item, region);
        Answer::Regions(regions)
    }

    /// Fill gap `index` of a cloze with `blank_count` gaps.
    ///
    /// The result always has exactly `blank_count` entries; an index past the
    /// last gap leaves the values untouched.
    #[must_use]
    pub fn with_blank(
        current: Option<&Answer>,
        blank_count: usize,
        index: usize,
        value: String,
    ) -> Answer {
        let mut values = match current {
            Some(Answer::Blanks(values)) => values.clone(),
            _ => Vec::new(),
        };
        values.resize(blank_count, String::new());
        if let Some(slot) = values.get_mut(index) {
            *slot = value;
        }
        Answer::Blanks(values)
    }

    /// Pick option `choice`, keeping the confidence already given.
    #[must_use]
    pub fn with_confident_choice(current: Option<&Answer>, choice: usize) -> Answer {
        let confidence = match current {
            Some(Answer::Confident { confidence, .. }) => *confidence,
            _ => Confidence::Unsure,
        };
        Answer::Confident { choice, confidence }
    }

    /// Change the confidence of an existing pick. `None` until an option is picked.
    #[must_use]
    pub fn with_confidence(current: Option<&Answer>, confidence: Confidence) -> Option<Answer> {
        match current {
            Some(Answer::Confident { choice, .. }) => Some(Answer::Confident {
                choice: *choice,
                confidence,
            }),
            _ => None,
        }
    }

    /// True when the payload carries no input at all: empty text or sets,
    /// all-blank cloze gaps, or a number that failed to parse.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Choices(set) => set.is_empty(),
            Answer::Order(order) => order.is_empty(),
            Answer::Pairs(pairs) => pairs.is_empty(),
            Answer::Regions(regions) => regions.is_empty(),
            Answer::Blanks(values) => values.iter().all(|value| value.trim().is_empty()),
            Answer::Text(text) => text.trim().is_empty(),
            Answer::Number(value) => !value.is_finite(),
            Answer::Choice(_) | Answer::Flag(_) | Answer::Confident { .. } | Answer::Rating(_) => {
                false
            }
        }
    }

    /// Swap positions `from` and `to` of an `Order` answer.
    ///
    /// Returns `None` when either position is out of range.
    #[must_use]
    pub fn swapped(order: &[usize], from: usize, to: usize) -> Option<Answer> {
        if from >= order.len() || to >= order.len() {
            return None;
        }
        let mut next = order.to_vec();
        next.swap(from, to);
        Some(Answer::Order(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_choice_adds_then_removes() {
        let first = Answer::toggled_choice(None, 2);
        assert_eq!(first, Answer::Choices(BTreeSet::from([2])));

        let second = Answer::toggled_choice(Some(&first), 0);
        assert_eq!(second, Answer::Choices(BTreeSet::from([0, 2])));

        let third = Answer::toggled_choice(Some(&second), 2);
        assert_eq!(third, Answer::Choices(BTreeSet::from([0])));
    }

    #[test]
    fn toggled_choice_ignores_foreign_shape() {
        let answer = Answer::toggled_choice(Some(&Answer::Text("x".into())), 1);
        assert_eq!(answer, Answer::Choices(BTreeSet::from([1])));
    }

    #[test]
    fn swapped_moves_items_by_index() {
        assert_eq!(
            Answer::swapped(&[0, 1, 2], 1, 0),
            Some(Answer::Order(vec![1, 0, 2]))
        );
        assert_eq!(Answer::swapped(&[0, 1, 2], 2, 3), None);
    }

    #[test]
    fn pairs_are_set_and_cleared_per_source() {
        let first = Answer::with_pair(None, 0, Some(2));
        assert_eq!(first, Answer::Pairs(BTreeMap::from([(0, 2)])));

        let second = Answer::with_pair(Some(&first), 1, Some(0));
        assert_eq!(second, Answer::Pairs(BTreeMap::from([(0, 2), (1, 0)])));

        let moved = Answer::with_pair(Some(&second), 0, Some(1));
        assert_eq!(moved, Answer::Pairs(BTreeMap::from([(0, 1), (1, 0)])));

        let cleared = Answer::with_pair(Some(&moved), 0, None);
        assert_eq!(cleared, Answer::Pairs(BTreeMap::from([(1, 0)])));
        assert!(Answer::with_pair(Some(&cleared), 1, None).is_blank());
    }

    #[test]
    fn venn_placement_inserts_or_replaces() {
        let first = Answer::with_region(None, 1, VennRegion::Both);
        let second = Answer::with_region(Some(&first), 0, VennRegion::LeftOnly);
        let replaced = Answer::with_region(Some(&second), 1, VennRegion::Neither);
        assert_eq!(
            replaced,
            Answer::Regions(BTreeMap::from([
                (0, VennRegion::LeftOnly),
                (1, VennRegion::Neither),
            ]))
        );
        let from_other_shape = Answer::with_region(Some(&Answer::Flag(true)), 0, VennRegion::Both);
        assert_eq!(
            from_other_shape,
            Answer::Regions(BTreeMap::from([(0, VennRegion::Both)]))
        );
    }

    #[test]
    fn cloze_gaps_keep_their_count() {
        let first = Answer::with_blank(None, 3, 1, "water".into());
        assert_eq!(
            first,
            Answer::Blanks(vec![String::new(), "water".into(), String::new()])
        );

        let second = Answer::with_blank(Some(&first), 3, 0, "light".into());
        assert_eq!(
            second,
            Answer::Blanks(vec!["light".into(), "water".into(), String::new()])
        );

        let past_end = Answer::with_blank(Some(&second), 3, 7, "soil".into());
        assert_eq!(past_end, second);

        let shrunk = Answer::with_blank(Some(&second), 1, 0, "sun".into());
        assert_eq!(shrunk, Answer::Blanks(vec!["sun".into()]));
    }

    #[test]
    fn confidence_follows_the_pick() {
        assert_eq!(Answer::with_confidence(None, Confidence::Certain), None);

        let picked = Answer::with_confident_choice(None, 2);
        assert_eq!(
            picked,
            Answer::Confident {
                choice: 2,
                confidence: Confidence::Unsure
            }
        );

        let sure = Answer::with_confidence(Some(&picked), Confidence::Certain).unwrap();
        let repicked = Answer::with_confident_choice(Some(&sure), 0);
        assert_eq!(
            repicked,
            Answer::Confident {
                choice: 0,
                confidence: Confidence::Certain
            }
        );
    }

    #[test]
    fn blank_answers_are_detected() {
        assert!(Answer::Text("   ".into()).is_blank());
        assert!(Answer::Blanks(vec![String::new(), " ".into()]).is_blank());
        assert!(Answer::Number(f64::NAN).is_blank());
        assert!(Answer::Choices(BTreeSet::new()).is_blank());
        assert!(!Answer::Blanks(vec![String::new(), "x".into()]).is_blank());
        assert!(!Answer::Choice(0).is_blank());
        assert!(!Answer::Number(0.0).is_blank());
    }

    #[test]
    fn answer_serializes_with_shape_tag() {
        let json = serde_json::to_string(&Answer::Choice(3)).unwrap();
        assert_eq!(json, r#"{"shape":"choice","value":3}"#);

        let back: Answer = serde_json::from_str(r#"{"shape":"flag","value":true}"#).unwrap();
        assert_eq!(back, Answer::Flag(true));
    }
}
