use quiz_core::model::{OptionStatus, QuestionId};
use services::{QuizPhase, QuizSession, QuizSource};

/// User actions on the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select { id: QuestionId, option: usize },
    Submit,
    Load(QuizSource),
    DismissError,
}

/// Render-ready snapshot of a quiz session.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    pub phase: QuizPhase,
    pub questions: Vec<QuestionVm>,
    pub progress_label: Option<String>,
    pub score_label: Option<String>,
    pub can_submit: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub hint: Option<String>,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub status: OptionStatus,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("quiz-option");
        if self.status.selected {
            class.push_str(" quiz-option--selected");
        }
        if self.status.revealed_correct {
            class.push_str(" quiz-option--correct");
        }
        if self.status.revealed_incorrect {
            class.push_str(" quiz-option--incorrect");
        }
        class
    }
}

#[must_use]
pub fn map_quiz(session: &QuizSession) -> QuizVm {
    let revealed = session.is_revealed();
    let questions = session
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let selection = session.selection(question.id());
            let options = question
                .options()
                .iter()
                .enumerate()
                .map(|(index, label)| OptionVm {
                    index,
                    label: label.clone(),
                    status: question.option_status(index, selection, revealed),
                })
                .collect();
            QuestionVm {
                id: question.id(),
                number: position + 1,
                prompt: question.text().to_string(),
                options,
                hint: question.hint(selection, revealed).map(str::to_string),
                locked: revealed,
            }
        })
        .collect::<Vec<_>>();

    let progress = session.progress();
    let progress_label = (!revealed && progress.total > 0)
        .then(|| format!("Answered {} of {}", progress.answered, progress.total));
    let score_label = revealed.then(|| session.score().to_string());

    QuizVm {
        phase: session.phase(),
        can_submit: !revealed && !questions.is_empty(),
        questions,
        progress_label,
        score_label,
    }
}
