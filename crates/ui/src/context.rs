use std::sync::Arc;

use quiz_core::model::QuizSet;

pub trait UiApp: Send + Sync {
    /// Quiz shown when the window opens, if any.
    fn initial_quiz(&self) -> Option<QuizSet>;
    /// Whether the user may load quiz files from disk.
    fn upload_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    initial_quiz: Option<QuizSet>,
    upload_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_quiz: app.initial_quiz(),
            upload_enabled: app.upload_enabled(),
        }
    }

    #[must_use]
    pub fn initial_quiz(&self) -> Option<QuizSet> {
        self.initial_quiz.clone()
    }

    #[must_use]
    pub fn upload_enabled(&self) -> bool {
        self.upload_enabled
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
