#![forbid(unsafe_code)]

pub mod app_services;
pub mod course_service;
pub mod error;
pub mod learning;

pub use app_services::AppServices;
pub use course_service::{CourseListItem, CourseService};
pub use error::AppServicesError;

pub use learning::{
    LearningIntent, LearningPage, LearningTab, LearningView, LessonRow, NavigateBack,
    ParseTabError, TabContent, ViewState,
};
