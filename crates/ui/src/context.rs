use std::sync::{Arc, Mutex, PoisonError};

use course_core::model::CourseId;
use services::CourseService;

pub trait UiApp: Send + Sync {
    fn course_service(&self) -> Arc<CourseService>;

    /// Course to open right after launch, if the host was configured with one.
    fn start_course(&self) -> Option<CourseId>;
}

#[derive(Clone)]
pub struct AppContext {
    course_service: Arc<CourseService>,
    start_course_configured: Option<CourseId>,
    start_course_once: Arc<Mutex<Option<CourseId>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_course_configured = app.start_course();

        Self {
            course_service: app.course_service(),
            start_course_once: Arc::new(Mutex::new(start_course_configured.clone())),
            start_course_configured,
        }
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    /// One-shot: yields the configured start course the first time only.
    #[must_use]
    pub fn take_start_course(&self) -> Option<CourseId> {
        self.start_course_once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// The configured value (not the one-shot value). Useful for diagnostics/UI.
    #[must_use]
    pub fn start_course_configured(&self) -> Option<&CourseId> {
        self.start_course_configured.as_ref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::Storage;

    struct FixedApp {
        courses: Arc<CourseService>,
        start: Option<CourseId>,
    }

    impl UiApp for FixedApp {
        fn course_service(&self) -> Arc<CourseService> {
            Arc::clone(&self.courses)
        }

        fn start_course(&self) -> Option<CourseId> {
            self.start.clone()
        }
    }

    #[test]
    fn start_course_is_taken_once() {
        let app: Arc<dyn UiApp> = Arc::new(FixedApp {
            courses: Arc::new(CourseService::new(Storage::in_memory().courses)),
            start: Some(CourseId::new("1")),
        });
        let ctx = build_app_context(&app);
        let clone = ctx.clone();

        assert_eq!(clone.take_start_course(), Some(CourseId::new("1")));
        assert_eq!(ctx.take_start_course(), None);
        assert_eq!(ctx.start_course_configured(), Some(&CourseId::new("1")));
    }
}
