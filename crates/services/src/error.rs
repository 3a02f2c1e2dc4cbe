//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionId, QuizSetError};

/// Errors emitted while turning a question source into a `QuizSet`.
///
/// `Malformed` and `Invalid` both mean the input was rejected as a whole;
/// `Io` means the source could not be read at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("quiz file is not a valid JSON question list: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuizSetError),
    #[error("could not read quiz file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question with id {id} in the current quiz")]
    UnknownQuestion { id: QuestionId },
    #[error("option {option} is out of range for question {id} ({len} options)")]
    OptionOutOfRange {
        id: QuestionId,
        option: usize,
        len: usize,
    },
}
