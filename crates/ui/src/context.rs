use std::sync::Arc;

use services::{ImageResolver, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn images(&self) -> ImageResolver;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    images: ImageResolver,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            images: app.images(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn images(&self) -> ImageResolver {
        self.images.clone()
    }
}

// The context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
