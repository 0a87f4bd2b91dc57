use std::collections::HashSet;

use thiserror::Error;

use crate::grading::Verdict;
use crate::model::{Answer, AnswerMap, Question, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("a session needs at least one question")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateQuestion(QuestionId),

    #[error("index {index} is outside 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("question {0} is not part of this session")]
    UnknownQuestion(QuestionId),
}

/// Result of stepping forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Completed,
}

/// Question order, position and collected answers for one quiz run.
///
/// Holds `0 <= current_index < questions.len()` and only stores answers for
/// questions that belong to the run.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    questions: Vec<Question>,
    current_index: usize,
    answers: AnswerMap,
    completed: bool,
}

impl SessionState {
    /// # Errors
    ///
    /// Returns `SessionStateError::Empty` for an empty list and
    /// `SessionStateError::DuplicateQuestion` when two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionStateError> {
        if questions.is_empty() {
            return Err(SessionStateError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(&question.id) {
                return Err(SessionStateError::DuplicateQuestion(question.id.clone()));
            }
        }

        Ok(Self {
            questions,
            current_index: 0,
            answers: AnswerMap::new(),
            completed: false,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&Answer> {
        self.answers.get(id)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answer_for(&self.current_question().id)
    }

    #[must_use]
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn position_of(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|question| question.id == *id)
    }

    /// Share of questions with a stored answer, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion(&self) -> f32 {
        self.answers.len() as f32 / self.questions.len() as f32
    }

    /// `completion()` as a whole percentage, rounded half up.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        let total = self.questions.len();
        let percent = (self.answers.len() * 100 + total / 2) / total;
        u8::try_from(percent).unwrap_or(100)
    }

    /// Step forward; on the last question this completes the run instead.
    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            self.completed = true;
            return Advance::Completed;
        }
        self.current_index += 1;
        Advance::Moved(self.current_index)
    }

    /// Step back. Returns false when already on the first question.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// # Errors
    ///
    /// Returns `SessionStateError::IndexOutOfRange` when `index >= len()`.
    pub fn set_index(&mut self, index: usize) -> Result<(), SessionStateError> {
        if index >= self.questions.len() {
            return Err(SessionStateError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Insert or replace the answer for `id`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::UnknownQuestion` if `id` is not in the run.
    pub fn upsert_answer(
        &mut self,
        id: &QuestionId,
        answer: Answer,
    ) -> Result<Option<Answer>, SessionStateError> {
        if self.position_of(id).is_none() {
            return Err(SessionStateError::UnknownQuestion(id.clone()));
        }
        Ok(self.answers.insert(id.clone(), answer))
    }

    /// Insert or replace the answer for the question at the current index.
    pub fn set_current_answer(&mut self, answer: Answer) -> Option<Answer> {
        let id = self.current_question().id.clone();
        self.answers.insert(id, answer)
    }

    pub fn remove_answer(&mut self, id: &QuestionId) -> Option<Answer> {
        self.answers.remove(id)
    }

    /// Back to the first question with no answers.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.completed = false;
    }

    /// Verdict for each question, in session order.
    pub fn verdicts(&self) -> impl Iterator<Item = (&Question, Verdict)> + '_ {
        self.questions
            .iter()
            .map(|question| (question, question.check(self.answers.get(&question.id))))
    }
}
