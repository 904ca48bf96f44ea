use std::fmt;

use course_core::model::{Course, CourseId, Lesson, LessonId};
use storage::CourseRepository;

use super::content::{LessonRow, TabContent};
use super::navigation::NavigateBack;
use super::progress::progress_percent;
use super::tab::LearningTab;

/// Mutable selection state of one open learning view.
///
/// `selected_lesson`, when set, always names a lesson of the open course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_lesson: Option<LessonId>,
    active_tab: LearningTab,
}

impl ViewState {
    fn for_course(course: &Course) -> Self {
        Self {
            selected_lesson: course.first_lesson().map(|lesson| lesson.id().clone()),
            active_tab: LearningTab::Content,
        }
    }

    #[must_use]
    pub fn selected_lesson(&self) -> Option<&LessonId> {
        self.selected_lesson.as_ref()
    }

    #[must_use]
    pub fn active_tab(&self) -> LearningTab {
        self.active_tab
    }
}

/// Interaction events a host can dispatch into the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearningIntent {
    SelectLesson(LessonId),
    SetTab(LearningTab),
    Back,
}

/// Learning view over one course, plus the host's back navigation.
pub struct LearningView<N> {
    course: Course,
    state: ViewState,
    navigator: N,
}

impl<N: NavigateBack> LearningView<N> {
    /// Start a view on `course`: first lesson selected, content tab active.
    #[must_use]
    pub fn new(course: Course, navigator: N) -> Self {
        let state = ViewState::for_course(&course);
        Self {
            course,
            state,
            navigator,
        }
    }

    /// Select a lesson of this course.
    ///
    /// Unknown ids leave the state untouched. Returns whether `lesson_id`
    /// was accepted.
    pub fn select_lesson(&mut self, lesson_id: &LessonId) -> bool {
        if self.course.lesson(lesson_id).is_none() {
            tracing::debug!(
                course_id = %self.course.id(),
                lesson_id = %lesson_id,
                "ignoring selection of unknown lesson"
            );
            return false;
        }
        self.state.selected_lesson = Some(lesson_id.clone());
        true
    }

    pub fn set_active_tab(&mut self, tab: LearningTab) {
        tracing::debug!(course_id = %self.course.id(), tab = %tab, "tab selected");
        self.state.active_tab = tab;
    }

    /// Ask the host to leave the view. State is left as is.
    pub fn go_back(&mut self) {
        self.navigator.navigate_back();
    }

    pub fn dispatch(&mut self, intent: LearningIntent) {
        match intent {
            LearningIntent::SelectLesson(id) => {
                self.select_lesson(&id);
            }
            LearningIntent::SetTab(tab) => self.set_active_tab(tab),
            LearningIntent::Back => self.go_back(),
        }
    }
}

impl<N> LearningView<N> {
    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn selected_lesson_id(&self) -> Option<&LessonId> {
        self.state.selected_lesson()
    }

    #[must_use]
    pub fn active_tab(&self) -> LearningTab {
        self.state.active_tab()
    }

    /// Zero-based position of the selected lesson; `None` when nothing is selected.
    #[must_use]
    pub fn current_lesson_index(&self) -> Option<usize> {
        self.state
            .selected_lesson
            .as_ref()
            .and_then(|id| self.course.lesson_index(id))
    }

    #[must_use]
    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.current_lesson_index()
            .map(|index| &self.course.lessons()[index])
    }

    /// 1-based "lesson N of M" position of the selection.
    #[must_use]
    pub fn lesson_position(&self) -> Option<(usize, usize)> {
        self.current_lesson_index()
            .map(|index| (index + 1, self.course.lessons().len()))
    }

    #[must_use]
    pub fn total_duration_seconds(&self) -> u32 {
        self.course.total_duration_seconds()
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_lesson_index(), self.course.lessons().len())
    }

    #[must_use]
    pub fn completed_exercise_count(&self) -> usize {
        self.course
            .exercises()
            .iter()
            .filter(|exercise| exercise.is_completed())
            .count()
    }

    /// Count shown on the exercises tab.
    #[must_use]
    pub fn exercise_badge_count(&self) -> usize {
        self.course.exercises().len()
    }

    /// Playlist rows in curriculum order, with the selection highlighted.
    #[must_use]
    pub fn lesson_rows(&self) -> Vec<LessonRow<'_>> {
        let selected = self.state.selected_lesson.as_ref();
        self.course
            .lessons()
            .iter()
            .enumerate()
            .map(|(index, lesson)| LessonRow {
                number: index + 1,
                lesson,
                highlighted: selected == Some(lesson.id()),
            })
            .collect()
    }

    #[must_use]
    pub fn tab_content(&self) -> TabContent<'_> {
        match self.state.active_tab {
            LearningTab::Content => TabContent::Lessons(self.lesson_rows()),
            LearningTab::Exercises => TabContent::Exercises(self.course.exercises()),
            LearningTab::Summary => TabContent::Summary(self.course.summary()),
        }
    }
}

impl<N> fmt::Debug for LearningView<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearningView")
            .field("course", self.course.id())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Result of opening the learning view for a course id.
pub enum LearningPage<N> {
    /// The content provider has no such course. Terminal: intents are ignored.
    NotFound(CourseId),
    Ready(LearningView<N>),
}

impl<N> fmt::Debug for LearningPage<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => f.debug_tuple("NotFound").field(id).finish(),
            Self::Ready(view) => f.debug_tuple("Ready").field(view).finish(),
        }
    }
}

impl<N: NavigateBack> LearningPage<N> {
    /// Look up `course_id` and, when present, open a view on it.
    pub fn open(courses: &dyn CourseRepository, course_id: &CourseId, navigator: N) -> Self {
        match courses.lookup_course(course_id) {
            Some(course) => {
                tracing::debug!(
                    course_id = %course_id,
                    lessons = course.lessons().len(),
                    "opened course"
                );
                Self::Ready(LearningView::new(course, navigator))
            }
            None => {
                tracing::debug!(course_id = %course_id, "course not found");
                Self::NotFound(course_id.clone())
            }
        }
    }

    pub fn dispatch(&mut self, intent: LearningIntent) {
        if let Self::Ready(view) = self {
            view.dispatch(intent);
        }
    }
}

impl<N> LearningPage<N> {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub fn as_ready(&self) -> Option<&LearningView<N>> {
        match self {
            Self::Ready(view) => Some(view),
            Self::NotFound(_) => None,
        }
    }

    #[must_use]
    pub fn as_ready_mut(&mut self) -> Option<&mut LearningView<N>> {
        match self {
            Self::Ready(view) => Some(view),
            Self::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use course_core::model::{
        Difficulty, Exercise, ExerciseId, ExerciseKind, LessonDuration, Summary,
    };
    use storage::InMemoryCourseRepository;

    use super::*;

    fn lesson(id: &str, duration: &str) -> Lesson {
        Lesson::new(
            LessonId::new(id),
            format!("Lesson {id}"),
            LessonDuration::parse(duration).unwrap(),
            "Dr. Sarah Anderson",
            None,
        )
    }

    fn exercise(id: &str, completed: bool) -> Exercise {
        Exercise::new(
            ExerciseId::new(id),
            format!("Exercise {id}"),
            ExerciseKind::Practical,
            Difficulty::Beginner,
            LessonDuration::from_seconds(600),
            completed,
        )
    }

    fn course(id: &str, lessons: Vec<Lesson>, exercises: Vec<Exercise>) -> Course {
        Course::new(
            CourseId::new(id),
            format!("Course {id}"),
            "",
            "Dr. Sarah Anderson",
            None,
            lessons,
            exercises,
            None,
        )
        .unwrap()
    }

    fn three_lesson_view() -> LearningView<impl FnMut()> {
        let lessons = vec![lesson("v1", "12:45"), lesson("v2", "18:30"), lesson("v3", "1:00")];
        LearningView::new(course("1", lessons, Vec::new()), || {})
    }

    #[test]
    fn new_view_selects_first_lesson_on_content_tab() {
        let view = three_lesson_view();
        assert_eq!(view.selected_lesson_id(), Some(&LessonId::new("v1")));
        assert_eq!(view.current_lesson_index(), Some(0));
        assert_eq!(view.active_tab(), LearningTab::Content);
        assert_eq!(view.lesson_position(), Some((1, 3)));
    }

    #[test]
    fn empty_course_has_no_selection() {
        let view = LearningView::new(course("e", Vec::new(), Vec::new()), || {});
        assert_eq!(view.selected_lesson_id(), None);
        assert_eq!(view.current_lesson_index(), None);
        assert!(view.current_lesson().is_none());
        assert_eq!(view.progress_percent(), 0);
        assert_eq!(view.total_duration_seconds(), 0);
        assert!(view.tab_content().is_empty());
    }

    #[test]
    fn select_lesson_moves_index() {
        let mut view = three_lesson_view();
        assert!(view.select_lesson(&LessonId::new("v3")));
        assert_eq!(view.current_lesson_index(), Some(2));
        assert_eq!(view.progress_percent(), 100);
        assert_eq!(view.current_lesson().map(Lesson::title), Some("Lesson v3"));
    }

    #[test]
    fn unknown_lesson_is_ignored() {
        let mut view = three_lesson_view();
        view.select_lesson(&LessonId::new("v2"));
        let before = view.state().clone();

        assert!(!view.select_lesson(&LessonId::new("v9")));
        assert_eq!(view.state(), &before);
    }

    #[test]
    fn total_duration_sums_lessons() {
        let lessons = vec![lesson("v1", "12:45"), lesson("v2", "18:30")];
        let view = LearningView::new(course("1", lessons, Vec::new()), || {});
        assert_eq!(view.total_duration_seconds(), 1875);
    }

    #[test]
    fn set_active_tab_is_idempotent_and_keeps_selection() {
        let mut view = three_lesson_view();
        view.select_lesson(&LessonId::new("v2"));

        view.set_active_tab(LearningTab::Summary);
        let once = view.state().clone();
        view.set_active_tab(LearningTab::Summary);
        assert_eq!(view.state(), &once);
        assert_eq!(view.selected_lesson_id(), Some(&LessonId::new("v2")));
    }

    #[test]
    fn lesson_rows_highlight_selection() {
        let mut view = three_lesson_view();
        view.select_lesson(&LessonId::new("v2"));

        let rows = view.lesson_rows();
        let numbers: Vec<usize> = rows.iter().map(|row| row.number).collect();
        let highlighted: Vec<bool> = rows.iter().map(|row| row.highlighted).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(highlighted, [false, true, false]);
    }

    #[test]
    fn tab_content_follows_active_tab() {
        let lessons = vec![lesson("v1", "1:00")];
        let exercises = vec![exercise("e1", true), exercise("e2", false)];
        let mut view = LearningView::new(course("1", lessons, exercises), || {});

        assert!(matches!(view.tab_content(), TabContent::Lessons(rows) if rows.len() == 1));

        view.set_active_tab(LearningTab::Exercises);
        assert!(matches!(view.tab_content(), TabContent::Exercises(list) if list.len() == 2));
        assert_eq!(view.exercise_badge_count(), 2);
        assert_eq!(view.completed_exercise_count(), 1);

        view.set_active_tab(LearningTab::Summary);
        assert_eq!(view.tab_content(), TabContent::Summary(None));
        assert!(view.tab_content().is_empty());
    }

    #[test]
    fn summary_tab_exposes_summary() {
        let summary = Summary::new(vec!["Point".into()], Vec::new(), None);
        let course = Course::new(
            CourseId::new("s"),
            "With summary",
            "",
            "T",
            None,
            vec![lesson("v1", "1:00")],
            Vec::new(),
            Some(summary.clone()),
        )
        .unwrap();
        let mut view = LearningView::new(course, || {});
        view.set_active_tab(LearningTab::Summary);
        assert_eq!(view.tab_content(), TabContent::Summary(Some(&summary)));
    }

    #[test]
    fn go_back_calls_navigator_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut view = LearningView::new(
            course("1", vec![lesson("v1", "1:00")], Vec::new()),
            move || counter.set(counter.get() + 1),
        );
        let before = view.state().clone();

        view.go_back();
        assert_eq!(calls.get(), 1);
        view.dispatch(LearningIntent::Back);
        assert_eq!(calls.get(), 2);
        assert_eq!(view.state(), &before);
    }

    #[test]
    fn page_open_and_dispatch() {
        let repo = InMemoryCourseRepository::from_courses(vec![course(
            "1",
            vec![lesson("v1", "1:00"), lesson("v2", "2:00")],
            Vec::new(),
        )]);

        let mut page = LearningPage::open(&repo, &CourseId::new("1"), || {});
        page.dispatch(LearningIntent::SelectLesson(LessonId::new("v2")));
        page.dispatch(LearningIntent::SetTab(LearningTab::Exercises));

        let view = page.as_ready().expect("ready");
        assert_eq!(view.current_lesson_index(), Some(1));
        assert_eq!(view.active_tab(), LearningTab::Exercises);
    }

    #[test]
    fn not_found_page_ignores_intents() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let repo = InMemoryCourseRepository::new();

        let mut page = LearningPage::open(&repo, &CourseId::new("unknown-id"), move || {
            counter.set(counter.get() + 1);
        });
        assert!(page.is_not_found());

        page.dispatch(LearningIntent::Back);
        page.dispatch(LearningIntent::SetTab(LearningTab::Summary));
        assert_eq!(calls.get(), 0);
        assert!(page.as_ready().is_none());
    }
}
