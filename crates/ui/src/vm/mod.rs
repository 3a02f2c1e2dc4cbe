mod quiz_vm;

pub use quiz_vm::{OptionVm, QuestionVm, QuizIntent, QuizVm, map_quiz};
