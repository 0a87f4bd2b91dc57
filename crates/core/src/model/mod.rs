mod answer;
mod ids;
mod question;
mod session;
mod summary;

pub use answer::{Answer, AnswerMap, Confidence};
pub use ids::{QuestionId, QuestionIdError, SessionId};
pub use question::{
    CategorizationData, ChoiceData, ClozeData, CodeOutputData, DEFAULT_TIMELINE_TOLERANCE,
    ErrorSpottingData, HotspotData, LabelingData, MatchingData, MultiSelectData, NumericData,
    Question, QuestionError, QuestionKind, RankingData, RatingData, RecallData, ReflectionData,
    ScenarioData, ScrambleData, SequenceData, ShortAnswerData, SimulationData, TimelineData,
    TrueFalseData, UrlData, VennData, VennRegion,
};
pub use session::{Advance, SessionState, SessionStateError};
pub use summary::{QuestionOutcome, SessionSummary};
