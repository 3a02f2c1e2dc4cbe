use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::grading::OptionStatus;
use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Wire shape of a single quiz entry, exactly as it appears in a quiz file.
///
/// `answer` is signed so that a negative index surfaces as a validation error
/// instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub answer: i64,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(question: impl Into<String>, options: Vec<String>, answer: i64) -> Self {
        Self {
            question: question.into(),
            options,
            answer,
        }
    }

    /// Validate the draft and attach the identifier it was loaded under.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the prompt is blank.
    /// Returns `QuestionError::NoOptions` if there is nothing to choose from.
    /// Returns `QuestionError::AnswerOutOfRange` if `answer` does not index into `options`.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let len = self.options.len();
        let answer_index = usize::try_from(self.answer)
            .ok()
            .filter(|index| *index < len)
            .ok_or(QuestionError::AnswerOutOfRange {
                answer: self.answer,
                len,
            })?;

        Ok(Question {
            id,
            text: self.question,
            options: self.options,
            answer_index,
        })
    }
}

/// A validated multiple-choice question.
///
/// Invariant: `options` is non-empty and `answer_index < options.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    answer_index: usize,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    #[must_use]
    pub fn answer_text(&self) -> &str {
        &self.options[self.answer_index]
    }

    #[must_use]
    pub fn is_correct(&self, selection: Option<usize>) -> bool {
        selection == Some(self.answer_index)
    }

    /// Classify one option for display given the current selection and reveal flag.
    #[must_use]
    pub fn option_status(
        &self,
        option: usize,
        selection: Option<usize>,
        revealed: bool,
    ) -> OptionStatus {
        let selected = selection == Some(option);
        let is_answer = option == self.answer_index;
        OptionStatus {
            selected,
            revealed_correct: revealed && is_answer,
            revealed_incorrect: revealed && selected && !is_answer,
        }
    }

    /// Text of the correct option, shown once results are revealed and the
    /// selection missed (an unanswered question counts as a miss).
    #[must_use]
    pub fn hint(&self, selection: Option<usize>, revealed: bool) -> Option<&str> {
        if revealed && !self.is_correct(selection) {
            Some(self.answer_text())
        } else {
            None
        }
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("question has no options")]
    NoOptions,

    #[error("answer index {answer} is out of range for {len} options")]
    AnswerOutOfRange { answer: i64, len: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
