use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};
use quiz_core::model::{OptionStatus, Question, QuestionId, QuizSet, Score};

use crate::error::{LoadError, SessionError};
use crate::loader::parse_quiz;

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No quiz has been loaded yet.
    Empty,
    /// A quiz is loaded and selections can change.
    Answering,
    /// Results are shown and selections are locked until the next load.
    Reviewing,
}

/// What happened to a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded,
    /// Results are already revealed; nothing changed.
    Locked,
}

/// Aggregated view of answering progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session: the loaded questions, one optional selection per
/// question and the reveal flag.
///
/// Selections are keyed by `QuestionId`, so they can never point past the end
/// of the current quiz. Every load replaces the quiz and clears all derived state.
#[derive(Clone, Default, PartialEq)]
pub struct QuizSession {
    quiz: Option<QuizSet>,
    selections: BTreeMap<QuestionId, usize>,
    revealed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with `quiz` already loaded.
    #[must_use]
    pub fn with_quiz(quiz: QuizSet) -> Self {
        let mut session = Self::new();
        session.replace_quiz(quiz);
        session
    }

    /// Parse `raw` and load it, replacing the current quiz.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if `raw` is not a valid question list. The current
    /// quiz, selections and reveal flag are left untouched in that case.
    pub fn load_questions(&mut self, raw: &str) -> Result<(), LoadError> {
        let quiz = parse_quiz(raw)?;
        self.replace_quiz(quiz);
        Ok(())
    }

    /// Load an already validated quiz, resetting selections and the reveal flag.
    pub fn replace_quiz(&mut self, quiz: QuizSet) {
        info!("loaded quiz with {} questions", quiz.len());
        self.quiz = Some(quiz);
        self.selections.clear();
        self.revealed = false;
    }

    /// Questions of the loaded quiz in display order; empty when nothing is loaded.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        match &self.quiz {
            Some(quiz) => quiz.questions(),
            None => &[],
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions().len()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match (&self.quiz, self.revealed) {
            (None, _) => QuizPhase::Empty,
            (Some(_), false) => QuizPhase::Answering,
            (Some(_), true) => QuizPhase::Reviewing,
        }
    }

    /// Record `option` as the answer to question `id`, replacing any earlier pick.
    ///
    /// Once results are revealed this is a no-op that reports `SelectOutcome::Locked`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuestion` if `id` is not in the loaded quiz.
    /// Returns `SessionError::OptionOutOfRange` if `option` is not one of its options.
    pub fn select_answer(
        &mut self,
        id: QuestionId,
        option: usize,
    ) -> Result<SelectOutcome, SessionError> {
        if self.revealed {
            debug!("ignored selection for question {id}: results already revealed");
            return Ok(SelectOutcome::Locked);
        }

        let question = self.question(id)?;
        let len = question.option_count();
        if option >= len {
            return Err(SessionError::OptionOutOfRange { id, option, len });
        }

        self.selections.insert(id, option);
        debug!("question {id}: selected option {option}");
        Ok(SelectOutcome::Recorded)
    }

    /// Reveal results. Idempotent; does nothing while no quiz is loaded.
    ///
    /// Returns whether results are revealed afterwards.
    pub fn submit(&mut self) -> bool {
        if self.quiz.is_some() && !self.revealed {
            self.revealed = true;
            info!("quiz submitted: {}", self.score());
        }
        self.revealed
    }

    /// Selected option for question `id`, if any.
    #[must_use]
    pub fn selection(&self, id: QuestionId) -> Option<usize> {
        self.selections.get(&id).copied()
    }

    /// One entry per question in display order.
    #[must_use]
    pub fn selections(&self) -> Vec<Option<usize>> {
        self.questions()
            .iter()
            .map(|question| self.selection(question.id()))
            .collect()
    }

    /// Count of questions whose selection matches the answer key.
    #[must_use]
    pub fn score(&self) -> Score {
        let correct = self
            .questions()
            .iter()
            .filter(|question| question.is_correct(self.selection(question.id())))
            .count();
        Score::new(correct, self.total_questions())
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total_questions();
        let answered = self.selections.len();
        QuizProgress {
            total,
            answered,
            unanswered: total.saturating_sub(answered),
        }
    }

    /// Display classification of one option of question `id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if `id` or `option` is out of range.
    pub fn option_status(
        &self,
        id: QuestionId,
        option: usize,
    ) -> Result<OptionStatus, SessionError> {
        let question = self.question(id)?;
        let len = question.option_count();
        if option >= len {
            return Err(SessionError::OptionOutOfRange { id, option, len });
        }
        Ok(question.option_status(option, self.selection(id), self.revealed))
    }

    /// Correct answer text for question `id` once a revealed answer missed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuestion` if `id` is not in the loaded quiz.
    pub fn hint(&self, id: QuestionId) -> Result<Option<&str>, SessionError> {
        let question = self.question(id)?;
        Ok(question.hint(self.selection(id), self.revealed))
    }

    fn question(&self, id: QuestionId) -> Result<&Question, SessionError> {
        self.quiz
            .as_ref()
            .and_then(|quiz| quiz.get(id))
            .ok_or(SessionError::UnknownQuestion { id })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.total_questions())
            .field("selections_len", &self.selections.len())
            .field("revealed", &self.revealed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
