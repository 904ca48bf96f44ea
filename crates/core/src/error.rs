use thiserror::Error;

use crate::model::{CourseError, DurationError, ParseIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Duration(#[from] DurationError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
