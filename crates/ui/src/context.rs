use std::sync::Arc;

use services::SessionLauncher;

pub trait UiApp: Send + Sync {
    fn session_launcher(&self) -> Arc<SessionLauncher>;
}

#[derive(Clone)]
pub struct AppContext {
    session_launcher: Arc<SessionLauncher>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_launcher: app.session_launcher(),
        }
    }

    #[must_use]
    pub fn session_launcher(&self) -> Arc<SessionLauncher> {
        Arc::clone(&self.session_launcher)
    }

    #[must_use]
    pub fn bank_title(&self) -> &str {
        self.session_launcher.bank().title()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.session_launcher.bank().len()
    }

    #[must_use]
    pub fn shuffles(&self) -> bool {
        self.session_launcher.shuffles()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
