mod course;
mod duration;
mod exercise;
mod ids;
mod lesson;
mod summary;

pub use ids::{CourseId, ExerciseId, LessonId, ParseIdError};

pub use course::{Course, CourseError};
pub use duration::{DurationError, LessonDuration, format_total};
pub use exercise::{Difficulty, Exercise, ExerciseKind};
pub use lesson::{Attachment, Lesson};
pub use summary::{Summary, SummarySection};
