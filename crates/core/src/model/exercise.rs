use serde::{Deserialize, Serialize};

use crate::model::duration::LessonDuration;
use crate::model::ids::ExerciseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Video,
    Practical,
}

impl ExerciseKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Video => "Video",
            ExerciseKind::Practical => "Practical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Practice activity attached to a course.
///
/// `completed` is a snapshot from the content provider; nothing in the
/// workspace writes it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: ExerciseId,
    title: String,
    kind: ExerciseKind,
    difficulty: Difficulty,
    duration: LessonDuration,
    completed: bool,
}

impl Exercise {
    #[must_use]
    pub fn new(
        id: ExerciseId,
        title: impl Into<String>,
        kind: ExerciseKind,
        difficulty: Difficulty,
        duration: LessonDuration,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            difficulty,
            duration,
            completed,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn duration(&self) -> LessonDuration {
        self.duration
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
