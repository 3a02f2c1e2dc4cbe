#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod session;

pub use error::{LoadError, SessionError};
pub use loader::{BUNDLED_QUIZ_JSON, QuizSource, bundled_quiz, load_source, parse_quiz};
pub use session::{QuizPhase, QuizProgress, QuizSession, SelectOutcome};
