use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{field} must list every index exactly once (len {len})")]
    NotAPermutation { field: &'static str, len: usize },

    #[error("cloze text has {segments} segments but {blanks} blanks")]
    BlankCountMismatch { segments: usize, blanks: usize },

    #[error("tolerance must be a finite, non-negative number")]
    InvalidTolerance,

    #[error("range {min}..={max} is empty or not finite")]
    InvalidRange { min: f64, max: f64 },

    #[error("{field} {value} lies outside {min}..={max}")]
    KeyOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("rating scale must be between 2 and 10, got {0}")]
    InvalidScale(u8),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One entry of a quiz: an id, a title, and the kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub kind: QuestionKind,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            title: title.into(),
            explanation: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Check the static payload for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the title is blank, a list is empty, an
    /// answer key points outside its list, or a numeric range is malformed.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.title.trim().is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        self.kind.validate()
    }
}

/// The 25 question kinds, serialized as `{"type": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice(ChoiceData),
    TrueFalse(TrueFalseData),
    OddOneOut(ChoiceData),
    Scenario(ScenarioData),
    Hotspot(HotspotData),
    ConfidenceCheck(ChoiceData),
    MultiSelect(MultiSelectData),
    ErrorSpotting(ErrorSpottingData),
    Ranking(RankingData),
    Sequence(SequenceData),
    Matching(MatchingData),
    ImageLabeling(LabelingData),
    Categorization(CategorizationData),
    VennClassification(VennData),
    Cloze(ClozeData),
    ShortAnswer(ShortAnswerData),
    WordScramble(ScrambleData),
    CodeOutput(CodeOutputData),
    Reflection(ReflectionData),
    NumericEstimate(NumericData),
    TimelinePlacement(TimelineData),
    Simulation(SimulationData),
    UrlSubmission(UrlData),
    SelfRating(RatingData),
    FlashcardRecall(RecallData),
}

impl QuestionKind {
    /// Short human label for the kind, used in headers and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::MultipleChoice(_) => "Multiple choice",
            Self::TrueFalse(_) => "True or false",
            Self::OddOneOut(_) => "Odd one out",
            Self::Scenario(_) => "Scenario",
            Self::Hotspot(_) => "Hotspot",
            Self::ConfidenceCheck(_) => "Confidence check",
            Self::MultiSelect(_) => "Select all that apply",
            Self::ErrorSpotting(_) => "Spot the errors",
            Self::Ranking(_) => "Ranking",
            Self::Sequence(_) => "Sequence",
            Self::Matching(_) => "Matching",
            Self::ImageLabeling(_) => "Label the image",
            Self::Categorization(_) => "Categorize",
            Self::VennClassification(_) => "Venn diagram",
            Self::Cloze(_) => "Fill in the blanks",
            Self::ShortAnswer(_) => "Short answer",
            Self::WordScramble(_) => "Word scramble",
            Self::CodeOutput(_) => "Predict the output",
            Self::Reflection(_) => "Reflection",
            Self::NumericEstimate(_) => "Estimate",
            Self::TimelinePlacement(_) => "Timeline",
            Self::Simulation(_) => "Simulation",
            Self::UrlSubmission(_) => "Share a link",
            Self::SelfRating(_) => "Self rating",
            Self::FlashcardRecall(_) => "Flashcard",
        }
    }

    /// Kinds that have no answer key; their answers are only recorded.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        !matches!(self, Self::Reflection(_) | Self::SelfRating(_))
    }

    fn validate(&self) -> Result<(), QuestionError> {
        match self {
            Self::MultipleChoice(data) | Self::OddOneOut(data) | Self::ConfidenceCheck(data) => {
                require_items("options", &data.options)?;
                require_index("correct", data.correct, data.options.len())
            }
            Self::TrueFalse(data) => require_text("statement", &data.statement),
            Self::Scenario(data) => {
                require_text("situation", &data.situation)?;
                require_items("options", &data.options)?;
                require_index("best", data.best, data.options.len())
            }
            Self::Hotspot(data) => {
                require_items("regions", &data.regions)?;
                require_index("target", data.target, data.regions.len())
            }
            Self::MultiSelect(data) => {
                require_items("options", &data.options)?;
                require_subset("correct", &data.correct, data.options.len())
            }
            Self::ErrorSpotting(data) => {
                require_items("lines", &data.lines)?;
                require_subset("faulty", &data.faulty, data.lines.len())
            }
            Self::Ranking(data) => {
                require_items("items", &data.items)?;
                require_permutation("correct_order", &data.correct_order, data.items.len())
            }
            Self::Sequence(data) => {
                require_items("steps", &data.steps)?;
                require_permutation("correct_order", &data.correct_order, data.steps.len())
            }
            Self::Matching(data) => {
                require_items("left", &data.left)?;
                require_items("right", &data.right)?;
                require_mapping("pairs", &data.pairs, data.left.len(), data.right.len())
            }
            Self::ImageLabeling(data) => {
                require_items("labels", &data.labels)?;
                require_items("regions", &data.regions)?;
                require_mapping(
                    "placements",
                    &data.placements,
                    data.labels.len(),
                    data.regions.len(),
                )
            }
            Self::Categorization(data) => {
                require_items("items", &data.items)?;
                require_items("categories", &data.categories)?;
                require_mapping(
                    "assignments",
                    &data.assignments,
                    data.items.len(),
                    data.categories.len(),
                )
            }
            Self::VennClassification(data) => {
                require_items("items", &data.items)?;
                require_keys("regions", data.regions.keys(), data.items.len())
            }
            Self::Cloze(data) => {
                require_items("blanks", &data.blanks)?;
                if data.segments.len() != data.blanks.len() + 1 {
                    return Err(QuestionError::BlankCountMismatch {
                        segments: data.segments.len(),
                        blanks: data.blanks.len(),
                    });
                }
                data.blanks
                    .iter()
                    .try_for_each(|accepted| require_items("accepted blank answers", accepted))
            }
            Self::ShortAnswer(data) => require_items("accepted", &data.accepted),
            Self::WordScramble(data) => {
                require_text("scrambled", &data.scrambled)?;
                require_text("word", &data.word)
            }
            Self::CodeOutput(data) => require_text("code", &data.code),
            Self::Reflection(data) => require_text("prompt", &data.prompt),
            Self::NumericEstimate(data) => require_tolerance(data.tolerance),
            Self::TimelinePlacement(data) => {
                if data.start_year >= data.end_year {
                    return Err(QuestionError::InvalidRange {
                        min: f64::from(data.start_year),
                        max: f64::from(data.end_year),
                    });
                }
                require_key(
                    "year",
                    f64::from(data.year),
                    f64::from(data.start_year),
                    f64::from(data.end_year),
                )
            }
            Self::Simulation(data) => {
                if !data.min.is_finite() || !data.max.is_finite() || data.min >= data.max {
                    return Err(QuestionError::InvalidRange {
                        min: data.min,
                        max: data.max,
                    });
                }
                if !data.step.is_finite() || data.step <= 0.0 {
                    return Err(QuestionError::InvalidRange {
                        min: data.step,
                        max: data.max - data.min,
                    });
                }
                require_key("step", data.step, 0.0, data.max - data.min)?;
                require_key("target", data.target, data.min, data.max)?;
                require_tolerance(data.tolerance)
            }
            Self::UrlSubmission(_) => Ok(()),
            Self::SelfRating(data) => {
                require_text("statement", &data.statement)?;
                if !(2..=10).contains(&data.scale) {
                    return Err(QuestionError::InvalidScale(data.scale));
                }
                Ok(())
            }
            Self::FlashcardRecall(data) => {
                require_text("front", &data.front)?;
                require_text("back", &data.back)
            }
        }
    }
}

//
// ─── PAYLOADS ──────────────────────────────────────────────────────────────────
//

/// Pick exactly one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceData {
    pub options: Vec<String>,
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalseData {
    pub statement: String,
    pub answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioData {
    pub situation: String,
    pub options: Vec<String>,
    pub best: usize,
}

/// Click the right region of an image. Regions are described by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotData {
    pub image: String,
    pub regions: Vec<String>,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelectData {
    pub options: Vec<String>,
    pub correct: BTreeSet<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpottingData {
    pub lines: Vec<String>,
    pub faulty: BTreeSet<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingData {
    pub criterion: String,
    pub items: Vec<String>,
    /// Item indices, best first.
    pub correct_order: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceData {
    pub steps: Vec<String>,
    pub correct_order: Vec<usize>,
}

/// Left index -> right index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingData {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub pairs: BTreeMap<usize, usize>,
}

/// Label index -> region index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelingData {
    pub image: String,
    pub labels: Vec<String>,
    pub regions: Vec<String>,
    pub placements: BTreeMap<usize, usize>,
}

/// Item index -> category index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationData {
    pub items: Vec<String>,
    pub categories: Vec<String>,
    pub assignments: BTreeMap<usize, usize>,
}

/// Region of a two-set Venn diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VennRegion {
    LeftOnly,
    Both,
    RightOnly,
    Neither,
}

impl VennRegion {
    pub const ALL: [VennRegion; 4] = [
        VennRegion::LeftOnly,
        VennRegion::Both,
        VennRegion::RightOnly,
        VennRegion::Neither,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VennData {
    pub left_label: String,
    pub right_label: String,
    pub items: Vec<String>,
    pub regions: BTreeMap<usize, VennRegion>,
}

/// Text split around the blanks: `segments.len() == blanks.len() + 1`.
///
/// Each blank lists every accepted spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozeData {
    pub segments: Vec<String>,
    pub blanks: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortAnswerData {
    pub accepted: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleData {
    pub scrambled: String,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOutputData {
    pub language: String,
    pub code: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionData {
    pub prompt: String,
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericData {
    #[serde(default)]
    pub unit: String,
    pub answer: f64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineData {
    pub event: String,
    pub start_year: i32,
    pub end_year: i32,
    pub year: i32,
    #[serde(default = "default_timeline_tolerance")]
    pub tolerance: u32,
}

/// Drive a single parameter of a small model until it hits the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationData {
    pub model: String,
    pub parameter: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub target: f64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlData {
    pub hint: String,
    #[serde(default)]
    pub require_https: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingData {
    pub statement: String,
    #[serde(default = "default_scale")]
    pub scale: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallData {
    pub front: String,
    pub back: String,
}

fn default_min_chars() -> usize {
    1
}

/// Years either side of the true date that still count as correct.
pub const DEFAULT_TIMELINE_TOLERANCE: u32 = 5;

fn default_timeline_tolerance() -> u32 {
    DEFAULT_TIMELINE_TOLERANCE
}

fn default_scale() -> u8 {
    5
}

//
// ─── VALIDATION HELPERS ────────────────────────────────────────────────────────
//

fn require_text(field: &'static str, value: &str) -> Result<(), QuestionError> {
    if value.trim().is_empty() {
        return Err(QuestionError::Empty { field });
    }
    Ok(())
}

fn require_items<T>(field: &'static str, items: &[T]) -> Result<(), QuestionError> {
    if items.is_empty() {
        return Err(QuestionError::Empty { field });
    }
    Ok(())
}

fn require_index(field: &'static str, index: usize, len: usize) -> Result<(), QuestionError> {
    if index >= len {
        return Err(QuestionError::IndexOutOfRange { field, index, len });
    }
    Ok(())
}

fn require_subset(
    field: &'static str,
    indices: &BTreeSet<usize>,
    len: usize,
) -> Result<(), QuestionError> {
    indices
        .iter()
        .try_for_each(|&index| require_index(field, index, len))
}

fn require_permutation(
    field: &'static str,
    order: &[usize],
    len: usize,
) -> Result<(), QuestionError> {
    let unique: BTreeSet<usize> = order.iter().copied().collect();
    if order.len() != len || unique.len() != len || unique.iter().any(|&index| index >= len) {
        return Err(QuestionError::NotAPermutation { field, len });
    }
    Ok(())
}

fn require_keys<'a>(
    field: &'static str,
    keys: impl Iterator<Item = &'a usize>,
    len: usize,
) -> Result<(), QuestionError> {
    let mut seen = 0;
    for &key in keys {
        require_index(field, key, len)?;
        seen += 1;
    }
    if seen != len {
        return Err(QuestionError::NotAPermutation { field, len });
    }
    Ok(())
}

fn require_mapping(
    field: &'static str,
    mapping: &BTreeMap<usize, usize>,
    key_len: usize,
    value_len: usize,
) -> Result<(), QuestionError> {
    require_keys(field, mapping.keys(), key_len)?;
    mapping
        .values()
        .try_for_each(|&value| require_index(field, value, value_len))
}

/// NaN fails the range test as well.
fn require_key(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), QuestionError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(QuestionError::KeyOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn require_tolerance(tolerance: f64) -> Result<(), QuestionError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(QuestionError::InvalidTolerance);
    }
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
