use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuizSet;
use services::QuizSession;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizPage, QuizView};

#[derive(Clone)]
struct TestApp {
    initial_quiz: Option<QuizSet>,
    upload_enabled: bool,
}

impl UiApp for TestApp {
    fn initial_quiz(&self) -> Option<QuizSet> {
        self.initial_quiz.clone()
    }

    fn upload_enabled(&self) -> bool {
        self.upload_enabled
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Props, Clone)]
struct PageHarnessProps {
    session: QuizSession,
    upload_enabled: bool,
    handles: QuizTestHandles,
}

impl PartialEq for PageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PageHarness(props: PageHarnessProps) -> Element {
    let initial = props.session.clone();
    let session = use_signal(move || initial);
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    rsx! { QuizPage { session, upload_enabled: props.upload_enabled } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness rendering the full `QuizView` behind an `AppContext`.
pub fn setup_app_harness(initial_quiz: Option<QuizSet>, upload_enabled: bool) -> ViewHarness {
    let app = Arc::new(TestApp {
        initial_quiz,
        upload_enabled,
    });
    let dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { app });
    ViewHarness {
        dom,
        handles: QuizTestHandles::default(),
    }
}

/// Harness rendering `QuizPage` over a prepared session.
pub fn setup_page_harness(session: QuizSession, upload_enabled: bool) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        PageHarness,
        PageHarnessProps {
            session,
            upload_enabled,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
