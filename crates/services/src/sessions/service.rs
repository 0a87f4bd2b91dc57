use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, warn};

use quiz_core::Clock;
use quiz_core::model::{
    Advance, Answer, Question, QuestionId, SessionId, SessionState, SessionSummary,
};

use super::progress::SessionProgress;
use crate::error::SessionError;

/// Result of `SessionService::next`.
pub type NavOutcome = Advance;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run.
///
/// Wraps a `SessionState` with an identity and timestamps, and rejects
/// navigation or answers that would leave the state inconsistent.
pub struct SessionService {
    id: SessionId,
    clock: Clock,
    state: SessionState,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionService {
    /// Start a run over `questions` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided and
    /// `SessionError::State` when two questions share an id.
    pub fn new(questions: Vec<Question>, clock: Clock) -> Result<Self, SessionError> {
        let state = SessionState::new(questions)?;
        let id = SessionId::generate();
        let started_at = clock.now();
        info!(session = %id, questions = state.len(), "quiz session started");

        Ok(Self {
            id,
            clock,
            state,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
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
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.state.current_question()
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        self.state.current_answer()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.state.len(),
            answered: self.state.answered_count(),
            current: self.state.current_index(),
            completion_percent: self.state.completion_percent(),
            is_complete: self.state.is_complete(),
        }
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Move to the next question, or complete the run from the last one.
    pub fn next(&mut self) -> NavOutcome {
        let outcome = self.state.advance();
        match outcome {
            Advance::Moved(index) => debug!(session = %self.id, index, "next question"),
            Advance::Completed => self.mark_completed(),
        }
        outcome
    }

    /// Move back one question. No-op on the first question.
    pub fn previous(&mut self) -> bool {
        let moved = self.state.retreat();
        if moved {
            debug!(session = %self.id, index = self.state.current_index(), "previous question");
        }
        moved
    }

    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` when `index` is not a question
    /// position; the current index is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if let Err(err) = self.state.set_index(index) {
            warn!(session = %self.id, index, len = self.state.len(), "rejected jump");
            return Err(err.into());
        }
        debug!(session = %self.id, index, "jumped to question");
        Ok(())
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────────
    //

    /// Store the in-progress answer for `id`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuestion` if `id` is not part of the run.
    pub fn record_answer(&mut self, id: &QuestionId, answer: Answer) -> Result<(), SessionError> {
        match self.state.upsert_answer(id, answer) {
            Ok(previous) => {
                debug!(
                    session = %self.id,
                    question = %id,
                    replaced = previous.is_some(),
                    "answer recorded"
                );
                Ok(())
            }
            Err(err) => {
                warn!(session = %self.id, question = %id, "rejected answer for unknown question");
                Err(err.into())
            }
        }
    }

    /// Store an answer for the question currently shown.
    pub fn record_current(&mut self, answer: Answer) {
        let previous = self.state.set_current_answer(answer);
        debug!(
            session = %self.id,
            question = %self.state.current_question().id,
            replaced = previous.is_some(),
            "answer recorded"
        );
    }

    pub fn clear_answer(&mut self, id: &QuestionId) -> Option<Answer> {
        let removed = self.state.remove_answer(id);
        if removed.is_some() {
            debug!(session = %self.id, question = %id, "answer cleared");
        }
        removed
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_state(self.id, &self.state, self.started_at, self.completed_at)
    }

    /// Drop every answer and begin again from the first question.
    pub fn restart(&mut self) {
        self.state.reset();
        self.started_at = self.clock.now();
        self.completed_at = None;
        info!(session = %self.id, "quiz session restarted");
    }

    fn mark_completed(&mut self) {
        // Finishing again from review mode keeps the first completion time.
        if self.completed_at.is_some() {
            debug!(session = %self.id, "finish pressed on completed session");
            return;
        }
        let now = self.clock.now();
        self.completed_at = Some(now);
        info!(
            session = %self.id,
            answered = self.state.answered_count(),
            total = self.state.len(),
            "quiz session completed"
        );
    }

    #[cfg(test)]
    fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("id", &self.id)
            .field("questions_len", &self.state.len())
            .field("current", &self.state.current_index())
            .field("answered", &self.state.answered_count())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
