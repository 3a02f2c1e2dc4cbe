use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

/// Ordered set of validated questions.
///
/// Order is fixed once built: insertion order is both display order and
/// answer-key order. Question ids pair the set's load generation with the
/// question's position in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSet {
    generation: u64,
    questions: Vec<Question>,
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

impl QuizSet {
    /// Validate every draft and build a set, rejecting the whole batch on the
    /// first invalid entry.
    ///
    /// # Errors
    ///
    /// Returns `QuizSetError::Question` naming the offending position.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuizSetError> {
        let generation = next_generation();
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                let id = QuestionId::new(generation, index);
                draft
                    .validate(id)
                    .map_err(|source| QuizSetError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            generation,
            questions,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Question with `id`, or `None` if the id belongs to another load.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        if id.generation() != self.generation {
            return None;
        }
        self.questions.get(id.position())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSetError {
    #[error("question {} is invalid: {source}", .index + 1)]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}
