use std::fmt;

/// Identifier of a question within one loaded quiz.
///
/// Every `QuizSet` build gets a fresh `generation`, so an id taken from an
/// earlier load never matches a question of a later one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    generation: u64,
    position: usize,
}

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(generation: u64, position: usize) -> Self {
        Self {
            generation,
            position,
        }
    }

    /// Load generation the question belongs to
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Position of the question in its source file
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({}.{})", self.generation, self.position)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.generation, self.position)
    }
}
