//! JSON course catalog: the on-disk shape of the content provider's data.

use std::path::Path;

use course_core::model::{
    Attachment, Course, CourseId, Difficulty, Exercise, ExerciseId, ExerciseKind, Lesson,
    LessonDuration, LessonId, Summary, SummarySection,
};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Top-level catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub courses: Vec<CourseRecord>,
}

/// Persisted shape for a course.
///
/// Field names follow the catalog's camelCase JSON; conversion into the
/// domain `Course` happens in `into_course`, which is where durations and
/// lesson ids are validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub teacher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_bio: Option<String>,
    #[serde(default)]
    pub videos: Vec<LessonRecord>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub teacher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    pub difficulty: Difficulty,
    pub duration: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub sections: Vec<SummarySectionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySectionRecord {
    pub title: String,
    pub content: String,
}

impl CourseRecord {
    /// Convert the record into a domain `Course`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidRecord` when a duration is not `mm:ss` or
    /// the course fails domain validation.
    pub fn into_course(self) -> Result<Course, StorageError> {
        let course_id = self.id;
        let invalid = |reason: String| StorageError::InvalidRecord {
            course_id: course_id.clone(),
            reason,
        };

        let lessons = self
            .videos
            .into_iter()
            .map(|video| {
                let duration = LessonDuration::parse(&video.duration)
                    .map_err(|e| invalid(format!("lesson {}: {e}", video.id)))?;
                let attachment = video
                    .attachment_url
                    .map(|href| Attachment::new(href, video.attachment_name));
                Ok(Lesson::new(
                    LessonId::new(video.id),
                    video.title,
                    duration,
                    video.teacher,
                    attachment,
                ))
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        let exercises = self
            .exercises
            .into_iter()
            .map(|exercise| {
                let duration = LessonDuration::parse(&exercise.duration)
                    .map_err(|e| invalid(format!("exercise {}: {e}", exercise.id)))?;
                Ok(Exercise::new(
                    ExerciseId::new(exercise.id),
                    exercise.title,
                    exercise.kind,
                    exercise.difficulty,
                    duration,
                    exercise.completed,
                ))
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        let summary = self.summary.map(SummaryRecord::into_summary);

        Course::new(
            CourseId::new(course_id.clone()),
            self.title,
            self.description,
            self.teacher,
            self.teacher_bio,
            lessons,
            exercises,
            summary,
        )
        .map_err(|e| invalid(e.to_string()))
    }
}

impl SummaryRecord {
    fn into_summary(self) -> Summary {
        let sections = self
            .sections
            .into_iter()
            .map(|section| SummarySection::new(section.title, section.content))
            .collect();
        let download = self
            .download_url
            .map(|href| Attachment::new(href, self.download_name));
        Summary::new(self.key_points, sections, download)
    }
}

/// Validated, ordered set of courses ready to back a repository.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// The mock catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled JSON is invalid.
    pub fn bundled() -> Result<Self, StorageError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON and
    /// `StorageError::InvalidRecord` for records that fail validation,
    /// including a course id that appears twice.
    pub fn from_json_str(raw: &str) -> Result<Self, StorageError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_file(file)
    }

    /// Read a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, otherwise the
    /// same errors as `from_json_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), courses = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Validate every record of an already-parsed catalog document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidRecord` on the first record that fails.
    pub fn from_file(file: CatalogFile) -> Result<Self, StorageError> {
        let mut courses: Vec<Course> = Vec::with_capacity(file.courses.len());
        for record in file.courses {
            let course = record.into_course().inspect_err(|err| {
                tracing::warn!(error = %err, "catalog record rejected");
            })?;
            if courses.iter().any(|existing| existing.id() == course.id()) {
                return Err(StorageError::InvalidRecord {
                    course_id: course.id().to_string(),
                    reason: "course id appears more than once".into(),
                });
            }
            courses.push(course);
        }
        Ok(Self { courses })
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[must_use]
    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }
}
