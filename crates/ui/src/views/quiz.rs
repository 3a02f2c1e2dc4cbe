use std::path::PathBuf;

use dioxus::prelude::*;
use log::warn;
use quiz_core::model::QuestionId;
use services::{QuizSession, QuizSource, load_source};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuestionVm, QuizIntent, map_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const EMPTY_MESSAGE: &str = "Load a quiz file to get started.";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let initial_quiz = ctx.initial_quiz();
    let session = use_signal(move || {
        initial_quiz.map_or_else(QuizSession::new, QuizSession::with_quiz)
    });

    rsx! {
        QuizPage { session, upload_enabled: ctx.upload_enabled() }
    }
}

#[component]
pub fn QuizPage(session: Signal<QuizSession>, upload_enabled: bool) -> Element {
    let mut session = session;
    let mut path = use_signal(String::new);
    let mut load_error = use_signal(|| None::<ViewError>);
    let loading = use_signal(|| false);

    let dispatch_intent = use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::Select { id, option } => select_option(session, id, option),
        QuizIntent::Submit => {
            session.write().submit();
        }
        QuizIntent::Load(source) => spawn_load(source, session, loading, load_error),
        QuizIntent::DismissError => load_error.set(None),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let vm = map_quiz(&session.read());
    let can_load_path = !loading() && !path().trim().is_empty();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
                if let Some(label) = vm.progress_label.as_ref() {
                    p { class: "view-subtitle", "{label}" }
                }
            }
            div { class: "quiz-loader",
                if upload_enabled {
                    input {
                        class: "quiz-path-input",
                        r#type: "text",
                        placeholder: "Path to a quiz .json file",
                        value: "{path()}",
                        oninput: move |evt| path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !can_load_path,
                        onclick: move |_| {
                            let source = QuizSource::File(PathBuf::from(path().trim()));
                            dispatch_intent.call(QuizIntent::Load(source));
                        },
                        "Load"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: loading(),
                    onclick: move |_| dispatch_intent.call(QuizIntent::Load(QuizSource::Bundled)),
                    "Load sample quiz"
                }
            }
            if let Some(err) = load_error() {
                div { class: "quiz-error",
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::DismissError),
                        "Dismiss"
                    }
                }
            }
            if vm.questions.is_empty() {
                p { class: "view-hint", "{EMPTY_MESSAGE}" }
            } else {
                div { class: "quiz-questions",
                    for (id, question) in vm.questions.iter().map(|q| (q.id, q.clone())) {
                        QuestionCard { key: "{id}", question, on_intent: dispatch_intent }
                    }
                }
            }
            if vm.can_submit {
                button {
                    class: "btn btn-primary quiz-submit",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                    "Submit"
                }
            }
            if let Some(label) = vm.score_label.as_ref() {
                div { class: "quiz-score",
                    h2 { "{label}" }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: Callback<QuizIntent>) -> Element {
    let id = question.id;
    let locked = question.locked;

    rsx! {
        div { class: "quiz-question",
            p { class: "quiz-question-text", "{question.number}. {question.prompt}" }
            div { class: "quiz-options",
                for option in question.options.iter().cloned() {
                    button {
                        key: "{option.index}",
                        class: "{option.class()}",
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| on_intent.call(QuizIntent::Select { id, option: option.index }),
                        "{option.label}"
                    }
                }
            }
            if let Some(hint) = question.hint.as_ref() {
                p { class: "quiz-hint", "Correct answer: {hint}" }
            }
        }
    }
}

fn select_option(mut session: Signal<QuizSession>, id: QuestionId, option: usize) {
    if let Err(err) = session.write().select_answer(id, option) {
        warn!("rejected selection: {err}");
    }
}

fn spawn_load(
    source: QuizSource,
    mut session: Signal<QuizSession>,
    mut loading: Signal<bool>,
    mut load_error: Signal<Option<ViewError>>,
) {
    loading.set(true);
    spawn(async move {
        match load_source(source).await {
            Ok(quiz) => {
                session.write().replace_quiz(quiz);
                load_error.set(None);
            }
            Err(err) => {
                warn!("quiz load failed: {err}");
                load_error.set(Some(ViewError::from(&err)));
            }
        }
        loading.set(false);
    });
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("quiz dispatch registered")
    }
}
