use chrono::{DateTime, Utc};

use crate::grading::Verdict;
use crate::model::{QuestionId, SessionId, SessionState};

/// Verdict for a single question of a finished (or abandoned) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub index: usize,
    pub id: QuestionId,
    pub title: String,
    pub kind_label: &'static str,
    /// False for kinds that are only recorded and never scored.
    pub graded: bool,
    pub verdict: Verdict,
    pub feedback: Option<String>,
}

/// Aggregate summary for a quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    correct: u32,
    incorrect: u32,
    recorded: u32,
    unanswered: u32,
    outcomes: Vec<QuestionOutcome>,
}

impl SessionSummary {
    /// Build a summary by checking every stored answer of `state`.
    #[must_use]
    pub fn from_state(
        session_id: SessionId,
        state: &SessionState,
        started_at: DateTime<Utc>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Self {
        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut recorded = 0_u32;
        let mut unanswered = 0_u32;
        let mut outcomes = Vec::with_capacity(state.len());

        for (index, (question, verdict)) in state.verdicts().enumerate() {
            match verdict {
                Verdict::Correct => correct = correct.saturating_add(1),
                Verdict::Incorrect => incorrect = incorrect.saturating_add(1),
                Verdict::Recorded => recorded = recorded.saturating_add(1),
                Verdict::Unanswered => unanswered = unanswered.saturating_add(1),
            }
            outcomes.push(QuestionOutcome {
                index,
                id: question.id.clone(),
                title: question.title.clone(),
                kind_label: question.kind.label(),
                graded: question.kind.is_graded(),
                verdict,
                feedback: question.feedback(verdict),
            });
        }

        Self {
            session_id,
            started_at,
            completed_at,
            correct,
            incorrect,
            recorded,
            unanswered,
            outcomes,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect + self.recorded + self.unanswered
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn recorded(&self) -> u32 {
        self.recorded
    }

    #[must_use]
    pub fn unanswered(&self) -> u32 {
        self.unanswered
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    /// Share of graded answers that were correct, rounded to a whole percent.
    ///
    /// `None` until at least one graded question has been answered.
    #[must_use]
    pub fn score_percent(&self) -> Option<u32> {
        let graded = self.correct + self.incorrect;
        if graded == 0 {
            return None;
        }
        Some((self.correct * 100 + graded / 2) / graded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, ChoiceData, Question, QuestionKind, RatingData};
    use crate::time::fixed_now;

    fn choice(id: &str) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            id,
            QuestionKind::MultipleChoice(ChoiceData {
                options: vec!["yes".into(), "no".into()],
                correct: 0,
            }),
        )
    }

    #[test]
    fn summary_counts_verdicts() {
        let rating = Question::new(
            QuestionId::new("rate").unwrap(),
            "Rate",
            QuestionKind::SelfRating(RatingData {
                statement: "I get it".into(),
                scale: 5,
            }),
        );
        let mut state =
            SessionState::new(vec![choice("a"), choice("b"), choice("c"), rating]).unwrap();
        let id = |value: &str| QuestionId::new(value).unwrap();
        state.upsert_answer(&id("a"), Answer::Choice(0)).unwrap();
        state.upsert_answer(&id("b"), Answer::Choice(1)).unwrap();
        state.upsert_answer(&id("rate"), Answer::Rating(3)).unwrap();

        let now = fixed_now();
        let summary = SessionSummary::from_state(SessionId::generate(), &state, now, Some(now));

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.incorrect(), 1);
        assert_eq!(summary.recorded(), 1);
        assert_eq!(summary.unanswered(), 1);
        assert_eq!(summary.score_percent(), Some(50));
        assert_eq!(summary.outcomes()[2].verdict, Verdict::Unanswered);
        assert_eq!(summary.outcomes()[3].kind_label, "Self rating");
        assert!(summary.outcomes()[0].graded);
        assert!(!summary.outcomes()[3].graded);
    }

    #[test]
    fn score_is_none_without_graded_answers() {
        let state = SessionState::new(vec![choice("a")]).unwrap();
        let summary = SessionSummary::from_state(SessionId::generate(), &state, fixed_now(), None);
        assert_eq!(summary.score_percent(), None);
        assert_eq!(summary.completed_at(), None);
    }
}
