use services::{QuizSession, QuizSource, bundled_quiz, parse_quiz};

use crate::vm::QuizIntent;

use super::test_harness::{setup_app_harness, setup_page_harness};

const QUIZ: &str = r#"[
    {"question":"2+2?","options":["3","4","5"],"answer":1},
    {"question":"Sky color?","options":["Blue","Green"],"answer":0}
]"#;

fn loaded_session() -> QuizSession {
    QuizSession::with_quiz(parse_quiz(QUIZ).unwrap())
}

#[test]
fn quiz_view_smoke_renders_empty_prompt() {
    let mut harness = setup_app_harness(None, true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Load a quiz file to get started."), "missing prompt in {html}");
    assert!(html.contains("quiz-path-input"), "missing file loader in {html}");
    assert!(!html.contains("Submit"), "unexpected submit in {html}");
}

#[test]
fn quiz_view_smoke_renders_initial_quiz() {
    let quiz = bundled_quiz().unwrap();
    let first_prompt = quiz.questions()[0].text().to_string();
    let mut harness = setup_app_harness(Some(quiz), true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(&first_prompt), "missing {first_prompt} in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
}

#[test]
fn quiz_view_smoke_hides_loader_when_uploads_disabled() {
    let mut harness = setup_app_harness(Some(bundled_quiz().unwrap()), false);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("quiz-path-input"), "unexpected file loader in {html}");
    assert!(html.contains("Load sample quiz"), "missing sample button in {html}");
}

#[test]
fn quiz_page_smoke_renders_selection_while_answering() {
    let mut session = loaded_session();
    session.select_answer(session.questions()[0].id(), 2).unwrap();

    let mut harness = setup_page_harness(session, true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Answered 1 of 2"), "missing progress in {html}");
    assert!(html.contains("quiz-option--selected"), "missing selection in {html}");
    assert!(!html.contains("quiz-option--correct"), "answers leaked in {html}");
    assert!(!html.contains("Correct answer:"), "hint leaked in {html}");
}

#[test]
fn quiz_page_smoke_renders_results_after_submit() {
    let mut session = loaded_session();
    session.select_answer(session.questions()[0].id(), 0).unwrap();
    session.submit();

    let mut harness = setup_page_harness(session, true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("You scored 0 out of 2"), "missing score in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing incorrect mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");
    assert!(html.contains("Correct answer: 4"), "missing first hint in {html}");
    assert!(html.contains("Correct answer: Blue"), "missing second hint in {html}");
    assert!(!html.contains(">Submit<"), "submit still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_smoke_failed_load_keeps_current_quiz() {
    let mut harness = setup_page_harness(loaded_session(), true);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Load(QuizSource::Text("not json".to_string())));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("The file is not a valid quiz."), "missing banner in {html}");
    assert!(html.contains("2+2?"), "first prompt lost in {html}");
    assert!(html.contains("Sky color?"), "second prompt lost in {html}");

    dispatch.call(QuizIntent::DismissError);
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("The file is not a valid quiz."), "banner not dismissed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_smoke_select_then_submit_reveals_results() {
    let session = loaded_session();
    let first = session.questions()[0].id();
    let mut harness = setup_page_harness(session, true);
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Select { id: first, option: 0 });
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Answered 1 of 2"), "missing progress in {html}");
    assert!(html.contains("quiz-option--selected"), "missing selection in {html}");

    dispatch.call(QuizIntent::Submit);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("You scored 0 out of 2"), "missing score in {html}");
    assert!(html.contains("quiz-option--selected"), "selection lost in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing incorrect mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");
}
