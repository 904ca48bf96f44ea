use course_core::model::{Exercise, Lesson, Summary};

/// One playlist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonRow<'a> {
    /// 1-based position in the curriculum.
    pub number: usize,
    pub lesson: &'a Lesson,
    pub highlighted: bool,
}

/// What the active tab shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent<'a> {
    Lessons(Vec<LessonRow<'a>>),
    /// Display order; empty means the empty-state message.
    Exercises(&'a [Exercise]),
    /// `None` means the empty-state message.
    Summary(Option<&'a Summary>),
}

impl TabContent<'_> {
    /// True when the tab should render its empty-state message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            TabContent::Lessons(rows) => rows.is_empty(),
            TabContent::Exercises(exercises) => exercises.is_empty(),
            TabContent::Summary(summary) => summary.is_none(),
        }
    }
}
