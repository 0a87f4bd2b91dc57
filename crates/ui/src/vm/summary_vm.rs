use quiz_core::Verdict;
use quiz_core::model::{QuestionOutcome, SessionSummary};

use crate::vm::time_fmt::{format_datetime, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRowVm {
    pub position: usize,
    pub title: String,
    pub kind_label: &'static str,
    pub graded: bool,
    pub verdict_label: &'static str,
    pub verdict_class: &'static str,
    pub feedback: Option<String>,
}

impl From<&QuestionOutcome> for OutcomeRowVm {
    fn from(outcome: &QuestionOutcome) -> Self {
        Self {
            position: outcome.index + 1,
            title: outcome.title.clone(),
            kind_label: outcome.kind_label,
            graded: outcome.graded,
            verdict_label: outcome.verdict.label(),
            verdict_class: verdict_class(outcome.verdict),
            feedback: outcome.feedback.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub started_at_str: String,
    pub completed_at_str: Option<String>,
    pub duration_str: Option<String>,
    pub score_str: String,

    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub recorded: u32,
    pub unanswered: u32,

    pub rows: Vec<OutcomeRowVm>,
}

#[must_use]
pub fn map_session_summary(summary: &SessionSummary) -> SummaryVm {
    let completed_at = summary.completed_at();
    SummaryVm {
        started_at_str: format_datetime(summary.started_at()),
        completed_at_str: completed_at.map(format_datetime),
        duration_str: completed_at.map(|done| format_elapsed(summary.started_at(), done)),
        score_str: summary
            .score_percent()
            .map_or_else(|| "No graded answers".to_string(), |score| format!("{score}%")),
        total: summary.total(),
        correct: summary.correct(),
        incorrect: summary.incorrect(),
        recorded: summary.recorded(),
        unanswered: summary.unanswered(),
        rows: summary.outcomes().iter().map(OutcomeRowVm::from).collect(),
    }
}

/// CSS modifier for a verdict badge.
#[must_use]
pub fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "verdict verdict--correct",
        Verdict::Incorrect => "verdict verdict--incorrect",
        Verdict::Recorded => "verdict verdict--recorded",
        Verdict::Unanswered => "verdict verdict--unanswered",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{
        Answer, ChoiceData, Question, QuestionId, QuestionKind, SessionId, SessionState,
    };
    use quiz_core::time::fixed_now;

    fn state() -> SessionState {
        let question = |id: &str| {
            Question::new(
                QuestionId::new(id).unwrap(),
                format!("Title {id}"),
                QuestionKind::MultipleChoice(ChoiceData {
                    options: vec!["x".into(), "y".into()],
                    correct: 1,
                }),
            )
        };
        SessionState::new(vec![question("a"), question("b")]).unwrap()
    }

    #[test]
    fn maps_counts_and_rows() {
        let mut state = state();
        state
            .upsert_answer(&QuestionId::new("a").unwrap(), Answer::Choice(1))
            .unwrap();
        let now = fixed_now();
        let summary = SessionSummary::from_state(
            SessionId::generate(),
            &state,
            now,
            Some(now + chrono::Duration::seconds(75)),
        );

        let vm = map_session_summary(&summary);
        assert_eq!(vm.total, 2);
        assert_eq!(vm.correct, 1);
        assert_eq!(vm.unanswered, 1);
        assert_eq!(vm.score_str, "100%");
        assert_eq!(vm.duration_str.as_deref(), Some("1m 15s"));
        assert_eq!(vm.rows[1].position, 2);
        assert_eq!(vm.rows[1].verdict_label, "Unanswered");
        assert_eq!(vm.rows[0].verdict_class, "verdict verdict--correct");
        assert!(vm.rows[0].graded);
    }

    #[test]
    fn open_session_has_no_completion() {
        let summary = SessionSummary::from_state(SessionId::generate(), &state(), fixed_now(), None);
        let vm = map_session_summary(&summary);
        assert_eq!(vm.completed_at_str, None);
        assert_eq!(vm.score_str, "No graded answers");
    }
}
