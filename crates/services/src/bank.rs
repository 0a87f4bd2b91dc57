use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use quiz_core::model::Question;

use crate::error::BankError;

const EMBEDDED_BANK: &str = include_str!("data/question_bank.json");

#[derive(Deserialize)]
struct BankFile {
    title: String,
    questions: Vec<Question>,
}

/// A validated, ordered list of questions with a display title.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The bank compiled into the binary: one question of every kind.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the embedded JSON fails to parse or validate.
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_json(EMBEDDED_BANK)
    }

    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON, `BankError::Invalid` for
    /// a question with an inconsistent payload, `BankError::Duplicate` for a
    /// repeated id and `BankError::Empty` when no questions are present.
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let file: BankFile = serde_json::from_str(raw)?;
        Self::new(file.title, file.questions)
    }

    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read, otherwise the same
    /// errors as `from_json`.
    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "loading question bank");
        Self::from_json(&raw)
    }

    /// # Errors
    ///
    /// See `from_json`.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            question.validate().map_err(|source| BankError::Invalid {
                id: question.id.clone(),
                source,
            })?;
            if !seen.insert(question.id.clone()) {
                return Err(BankError::Duplicate(question.id.clone()));
            }
        }

        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
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
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
