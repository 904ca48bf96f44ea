use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use course_core::model::{Course, CourseId};
use thiserror::Error;

use crate::catalog::Catalog;

/// Errors surfaced while loading content into a repository.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid course record {course_id}: {reason}")]
    InvalidRecord { course_id: String, reason: String },
}

/// Read-only content provider keyed by course id.
///
/// Lookups are synchronous and always available; an unknown id is a
/// normal `None`, not an error.
pub trait CourseRepository: Send + Sync {
    /// Fetch a course by ID.
    fn lookup_course(&self, id: &CourseId) -> Option<Course>;

    /// Every course, in catalog order.
    fn list_courses(&self) -> Vec<Course>;
}

/// Simple in-memory repository, backed by an ordered course table.
#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<Vec<Course>>>,
}

impl InMemoryCourseRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(RwLock::new(courses)),
        }
    }

    /// Insert a course, replacing any course with the same id in place.
    ///
    /// Returns the replaced course, if any.
    pub fn insert(&self, course: Course) -> Option<Course> {
        let mut guard = self.courses.write().unwrap_or_else(PoisonError::into_inner);
        match guard.iter_mut().find(|existing| existing.id() == course.id()) {
            Some(slot) => Some(std::mem::replace(slot, course)),
            None => {
                guard.push(course);
                None
            }
        }
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn lookup_course(&self, id: &CourseId) -> Option<Course> {
        let guard = self.courses.read().unwrap_or_else(PoisonError::into_inner);
        guard.iter().find(|course| course.id() == id).cloned()
    }

    fn list_courses(&self) -> Vec<Course> {
        let guard = self.courses.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }
}

/// Aggregates the content repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub courses: Arc<dyn CourseRepository>,
}

impl Storage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryCourseRepository::new())
    }

    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::from_repository(InMemoryCourseRepository::from_courses(catalog.into_courses()))
    }

    /// Storage backed by the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled catalog fails validation.
    pub fn bundled() -> Result<Self, StorageError> {
        Catalog::bundled().map(Self::from_catalog)
    }

    #[must_use]
    pub fn from_repository(repo: impl CourseRepository + 'static) -> Self {
        Self {
            courses: Arc::new(repo),
        }
    }
}
