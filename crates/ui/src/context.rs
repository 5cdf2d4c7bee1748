use std::sync::Arc;

use quiz_core::Catalog;
use services::{QuizConfigError, QuizController, QuizSettings};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn quiz_settings(&self) -> QuizSettings;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    quiz_settings: QuizSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            quiz_settings: app.quiz_settings(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }

    /// A fresh idle controller over the shared catalog.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` if the settings cannot be satisfied by the catalog.
    pub fn new_controller(&self) -> Result<QuizController, QuizConfigError> {
        QuizController::new(self.catalog(), self.quiz_settings)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
