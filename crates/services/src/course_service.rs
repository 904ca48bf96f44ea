use std::sync::Arc;

use course_core::model::{Course, CourseId};
use storage::CourseRepository;

use crate::learning::{LearningPage, NavigateBack};

/// Presentation-agnostic listing entry for a course.
///
/// No pre-formatted strings: the UI decides how to render durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListItem {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub lesson_count: usize,
    pub exercise_count: usize,
    pub total_duration_seconds: u32,
}

impl CourseListItem {
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id().clone(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
            instructor: course.instructor().to_owned(),
            lesson_count: course.lessons().len(),
            exercise_count: course.exercises().len(),
            total_duration_seconds: course.total_duration_seconds(),
        }
    }
}

/// Facade over the content provider that hides the repository from the UI.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// Fetch a course by ID; `None` when the provider has no such course.
    #[must_use]
    pub fn lookup_course(&self, id: &CourseId) -> Option<Course> {
        let course = self.courses.lookup_course(id);
        if course.is_none() {
            tracing::debug!(course_id = %id, "course not found");
        }
        course
    }

    /// Listing entries for every course, in catalog order.
    #[must_use]
    pub fn list_courses(&self) -> Vec<CourseListItem> {
        self.courses
            .list_courses()
            .iter()
            .map(CourseListItem::from_course)
            .collect()
    }

    /// Open the learning view for a course.
    ///
    /// `navigator` is invoked once per `go_back` on the returned view.
    pub fn open_learning<N: NavigateBack>(&self, id: &CourseId, navigator: N) -> LearningPage<N> {
        LearningPage::open(self.courses.as_ref(), id, navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::Storage;

    fn service() -> CourseService {
        let storage = Storage::bundled().unwrap();
        CourseService::new(Arc::clone(&storage.courses))
    }

    #[test]
    fn list_courses_reports_counts() {
        let items = service().list_courses();
        assert_eq!(items.len(), 2);

        let python = &items[0];
        assert_eq!(python.id, CourseId::new("1"));
        assert_eq!(python.lesson_count, 5);
        assert_eq!(python.exercise_count, 4);
        assert_eq!(python.total_duration_seconds, 765 + 1110 + 1335 + 1190 + 1540);

        assert_eq!(items[1].exercise_count, 0);
    }

    #[test]
    fn lookup_course_misses_unknown_id() {
        let svc = service();
        assert!(svc.lookup_course(&CourseId::new("2")).is_some());
        assert!(svc.lookup_course(&CourseId::new("42")).is_none());
    }

    #[test]
    fn open_learning_reports_not_found() {
        let page = service().open_learning(&CourseId::new("unknown-id"), || {});
        assert!(page.is_not_found());
    }
}
