use std::path::Path;
use std::sync::Arc;

use storage::{Catalog, Storage};

use crate::course_service::CourseService;
use crate::error::AppServicesError;

/// Assembles app-facing services over a content backend.
#[derive(Clone)]
pub struct AppServices {
    course_service: Arc<CourseService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        Self {
            course_service: Arc::new(CourseService::new(Arc::clone(&storage.courses))),
        }
    }

    /// Build services over the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the bundled catalog is invalid.
    pub fn bundled() -> Result<Self, AppServicesError> {
        let storage = Storage::bundled()?;
        Ok(Self::new(&storage))
    }

    /// Build services over a catalog file on disk.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the file cannot be read or fails validation.
    pub fn from_catalog_path(path: impl AsRef<Path>) -> Result<Self, AppServicesError> {
        let catalog = Catalog::from_path(path)?;
        Ok(Self::new(&Storage::from_catalog(catalog)))
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}
