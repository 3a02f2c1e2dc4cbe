use std::path::PathBuf;

use log::{debug, info, warn};
use quiz_core::model::{QuestionDraft, QuizSet};

use crate::error::LoadError;

/// Question list compiled into the binary, used when no file has been chosen.
pub const BUNDLED_QUIZ_JSON: &str = include_str!("../data/sample_quiz.json");

/// Where a quiz comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSource {
    /// Raw JSON text already in memory.
    Text(String),
    /// A quiz file on disk, read asynchronously.
    File(PathBuf),
    /// The question list shipped with the application.
    Bundled,
}

/// Parse a JSON question array into a validated `QuizSet`.
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the text is not a JSON array of question objects.
/// Returns `LoadError::Invalid` if any question breaks the question invariants.
pub fn parse_quiz(raw: &str) -> Result<QuizSet, LoadError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(raw).inspect_err(|err| {
        warn!("rejected quiz input: {err}");
    })?;
    debug!("parsed {} question drafts", drafts.len());

    let quiz = QuizSet::from_drafts(drafts).inspect_err(|err| {
        warn!("rejected quiz input: {err}");
    })?;
    Ok(quiz)
}

/// Parse the bundled question list.
///
/// # Errors
///
/// Returns `LoadError` if the bundled data is malformed.
pub fn bundled_quiz() -> Result<QuizSet, LoadError> {
    parse_quiz(BUNDLED_QUIZ_JSON)
}

/// Read and parse a quiz from any source.
///
/// # Errors
///
/// Returns `LoadError::Io` if a file cannot be read, otherwise the parse errors
/// of [`parse_quiz`].
pub async fn load_source(source: QuizSource) -> Result<QuizSet, LoadError> {
    let quiz = match source {
        QuizSource::Text(raw) => parse_quiz(&raw)?,
        QuizSource::Bundled => bundled_quiz()?,
        QuizSource::File(path) => {
            let raw = tokio::fs::read_to_string(&path).await.inspect_err(|err| {
                warn!("failed to read quiz file {}: {err}", path.display());
            })?;
            let quiz = parse_quiz(&raw)?;
            info!("loaded {} questions from {}", quiz.len(), path.display());
            quiz
        }
    };
    Ok(quiz)
}
