mod course_vm;
mod learning_vm;

pub use course_vm::{CourseCardVm, map_course_cards};
pub use learning_vm::{
    DownloadVm, ExerciseRowVm, LearningPageVm, LearningVm, LessonRowVm, NowPlayingVm,
    SummarySectionVm, SummaryVm, TabBodyVm, TabVm, map_learning_page, map_learning_view,
};
