use std::collections::HashSet;

use thiserror::Error;

use crate::model::exercise::Exercise;
use crate::model::ids::{CourseId, LessonId};
use crate::model::lesson::Lesson;
use crate::model::summary::Summary;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id cannot be empty")]
    EmptyId,

    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("lesson id cannot be empty")]
    EmptyLessonId,

    #[error("lesson id {0} appears more than once")]
    DuplicateLessonId(LessonId),

    #[error("total lesson duration is too long")]
    DurationOverflow,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A course as served by the content provider.
///
/// Lesson order is the canonical curriculum order: it drives both the
/// playlist and "lesson N of M" numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    instructor: String,
    instructor_bio: Option<String>,
    lessons: Vec<Lesson>,
    exercises: Vec<Exercise>,
    summary: Option<Summary>,
}

impl Course {
    /// Creates a new Course.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::EmptyId` or `CourseError::EmptyTitle` for blank identity fields.
    /// Returns `CourseError::EmptyLessonId` or `CourseError::DuplicateLessonId` for
    /// bad lesson ids, and `CourseError::DurationOverflow` if the lessons together
    /// run longer than `u32::MAX` seconds.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        instructor: impl Into<String>,
        instructor_bio: Option<String>,
        lessons: Vec<Lesson>,
        exercises: Vec<Exercise>,
        summary: Option<Summary>,
    ) -> Result<Self, CourseError> {
        if id.as_str().trim().is_empty() {
            return Err(CourseError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }

        let mut seen = HashSet::with_capacity(lessons.len());
        let mut total: u32 = 0;
        for lesson in &lessons {
            if lesson.id().as_str().trim().is_empty() {
                return Err(CourseError::EmptyLessonId);
            }
            if !seen.insert(lesson.id()) {
                return Err(CourseError::DuplicateLessonId(lesson.id().clone()));
            }
            total = total
                .checked_add(lesson.duration().as_seconds())
                .ok_or(CourseError::DurationOverflow)?;
        }

        let instructor_bio = instructor_bio
            .map(|bio| bio.trim().to_owned())
            .filter(|bio| !bio.is_empty());

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into(),
            instructor: instructor.into(),
            instructor_bio,
            lessons,
            exercises,
            summary,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn instructor_bio(&self) -> Option<&str> {
        self.instructor_bio.as_deref()
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Exercises in display order; empty when the course has none.
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Zero-based position of a lesson in the curriculum.
    #[must_use]
    pub fn lesson_index(&self, id: &LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lessons.first()
    }

    /// Sum of every lesson's play length, in seconds.
    ///
    /// Cannot overflow: `Course::new` rejects totals past `u32::MAX`.
    #[must_use]
    pub fn total_duration_seconds(&self) -> u32 {
        self.lessons
            .iter()
            .map(|lesson| lesson.duration().as_seconds())
            .sum()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
