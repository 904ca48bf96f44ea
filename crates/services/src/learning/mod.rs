//! Course learning view: selection and tab state for one open course.
//!
//! The view is a plain state holder. Hosts dispatch interaction events into
//! it and re-render from its read accessors; every derived value is
//! recomputed on read.

mod content;
mod navigation;
mod progress;
mod tab;
mod view;

pub use content::{LessonRow, TabContent};
pub use navigation::NavigateBack;
pub use progress::progress_percent;
pub use tab::{LearningTab, ParseTabError};
pub use view::{LearningIntent, LearningPage, LearningView, ViewState};
