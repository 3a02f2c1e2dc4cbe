mod grading;
mod ids;
mod question;
mod quiz_set;

pub use grading::{OptionStatus, Score};
pub use ids::QuestionId;
pub use question::{Question, QuestionDraft, QuestionError};
pub use quiz_set::{QuizSet, QuizSetError};
