use std::sync::Arc;

use quiz_core::model::QuestionSet;
use services::QuizSession;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn questions(&self) -> Arc<QuestionSet>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    questions: Arc<QuestionSet>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            questions: app.questions(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    /// Fresh session over the configured question bank.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        QuizSession::new(self.questions())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
