#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;

pub use catalog::{Catalog, CatalogFile, CourseRecord};
pub use repository::{CourseRepository, InMemoryCourseRepository, Storage, StorageError};
