//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{QuestionError, QuestionId, SessionStateError};

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {id} is invalid: {source}")]
    Invalid {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },
    #[error("question id {0} appears more than once")]
    Duplicate(QuestionId),
    #[error("question bank has no questions")]
    Empty,
    #[error("failed to read question bank {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("question index {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error("question {0} is not part of this session")]
    UnknownQuestion(QuestionId),
    #[error(transparent)]
    State(SessionStateError),
}

impl From<SessionStateError> for SessionError {
    fn from(err: SessionStateError) -> Self {
        match err {
            SessionStateError::Empty => SessionError::Empty,
            SessionStateError::IndexOutOfRange { index, len } => {
                SessionError::OutOfRange { index, len }
            }
            SessionStateError::UnknownQuestion(id) => SessionError::UnknownQuestion(id),
            other => SessionError::State(other),
        }
    }
}
