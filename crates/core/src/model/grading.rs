use std::fmt;

/// Display classification of one option, derived from selection and reveal state.
///
/// `selected` can coincide with either revealed flag; the two revealed flags never
/// hold together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionStatus {
    pub selected: bool,
    pub revealed_correct: bool,
    pub revealed_incorrect: bool,
}

/// Number of correctly answered questions out of the quiz size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    /// Build a score, clamping `correct` to `total`.
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}", self.correct, self.total)
    }
}
