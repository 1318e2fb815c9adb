use std::sync::Arc;

use quiz_core::model::{QuestionSet, QuizSettings};

pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<QuestionSet>;
    fn settings(&self) -> QuizSettings;

    /// Human-readable origin of the questions, shown on the home page.
    fn source_label(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<QuestionSet>,
    settings: QuizSettings,
    source_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            settings: app.settings(),
            source_label: app.source_label(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
