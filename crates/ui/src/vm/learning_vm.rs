use course_core::model::{Attachment, Exercise, LessonId, Summary, format_total};
use services::{LearningPage, LearningTab, LearningView, TabContent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadVm {
    pub href: String,
    pub label: String,
}

impl DownloadVm {
    fn from_attachment(attachment: &Attachment) -> Self {
        Self {
            href: attachment.href().to_owned(),
            label: attachment.label().to_owned(),
        }
    }
}

/// Player caption and instructor card for the selected lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NowPlayingVm {
    pub title: String,
    pub instructor: String,
    pub instructor_bio: Option<String>,
    pub attachment: Option<DownloadVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub number: usize,
    pub title: String,
    pub duration_label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseRowVm {
    pub title: String,
    pub kind_label: &'static str,
    pub difficulty_label: &'static str,
    pub duration_label: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarySectionVm {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub key_points: Vec<String>,
    pub sections: Vec<SummarySectionVm>,
    pub download: Option<DownloadVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub tab: LearningTab,
    pub label: &'static str,
    pub badge: Option<usize>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabBodyVm {
    Lessons(Vec<LessonRowVm>),
    Exercises {
        rows: Vec<ExerciseRowVm>,
        completed_label: String,
    },
    Summary(SummaryVm),
    Empty(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningVm {
    pub title: String,
    pub description: String,
    pub now_playing: Option<NowPlayingVm>,
    pub position_label: Option<String>,
    pub progress_percent: u8,
    pub progress_label: String,
    pub total_duration_label: String,
    pub playlist: Vec<LessonRowVm>,
    pub tabs: Vec<TabVm>,
    pub body: TabBodyVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearningPageVm {
    NotFound { course_id: String },
    Ready(LearningVm),
}

const NO_LESSONS: &str = "This course has no lessons yet.";
const NO_EXERCISES: &str = "No exercises available for this course yet.";
const NO_SUMMARY: &str = "No summary available for this course yet.";

#[must_use]
pub fn map_learning_page<N>(page: &LearningPage<N>) -> LearningPageVm {
    match page {
        LearningPage::NotFound(course_id) => LearningPageVm::NotFound {
            course_id: course_id.to_string(),
        },
        LearningPage::Ready(view) => LearningPageVm::Ready(map_learning_view(view)),
    }
}

#[must_use]
pub fn map_learning_view<N>(view: &LearningView<N>) -> LearningVm {
    let course = view.course();

    let now_playing = view.current_lesson().map(|lesson| NowPlayingVm {
        title: lesson.title().to_owned(),
        instructor: lesson.instructor().to_owned(),
        instructor_bio: course.instructor_bio().map(str::to_owned),
        attachment: lesson.attachment().map(DownloadVm::from_attachment),
    });

    let position_label = view
        .lesson_position()
        .map(|(number, total)| format!("Lesson {number} of {total}"));

    let progress_percent = view.progress_percent();
    let active_tab = view.active_tab();
    let tabs = LearningTab::ALL
        .into_iter()
        .map(|tab| TabVm {
            tab,
            label: tab.label(),
            badge: (tab == LearningTab::Exercises).then(|| view.exercise_badge_count()),
            active: tab == active_tab,
        })
        .collect();

    let playlist = map_lesson_rows(view);
    let body = match view.tab_content() {
        TabContent::Lessons(rows) if rows.is_empty() => TabBodyVm::Empty(NO_LESSONS),
        TabContent::Lessons(_) => TabBodyVm::Lessons(playlist.clone()),
        TabContent::Exercises([]) => TabBodyVm::Empty(NO_EXERCISES),
        TabContent::Exercises(exercises) => TabBodyVm::Exercises {
            rows: exercises.iter().map(map_exercise_row).collect(),
            completed_label: format!(
                "{} of {} completed",
                view.completed_exercise_count(),
                exercises.len()
            ),
        },
        TabContent::Summary(None) => TabBodyVm::Empty(NO_SUMMARY),
        TabContent::Summary(Some(summary)) => TabBodyVm::Summary(map_summary(summary)),
    };

    LearningVm {
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        now_playing,
        position_label,
        progress_percent,
        progress_label: format!("{progress_percent}% complete"),
        total_duration_label: format!("Total {}", format_total(view.total_duration_seconds())),
        playlist,
        tabs,
        body,
    }
}

fn map_lesson_rows<N>(view: &LearningView<N>) -> Vec<LessonRowVm> {
    view.lesson_rows()
        .into_iter()
        .map(|row| LessonRowVm {
            id: row.lesson.id().clone(),
            number: row.number,
            title: row.lesson.title().to_owned(),
            duration_label: row.lesson.duration().to_string(),
            active: row.highlighted,
        })
        .collect()
}

fn map_exercise_row(exercise: &Exercise) -> ExerciseRowVm {
    ExerciseRowVm {
        title: exercise.title().to_owned(),
        kind_label: exercise.kind().label(),
        difficulty_label: exercise.difficulty().label(),
        duration_label: exercise.duration().to_string(),
        completed: exercise.is_completed(),
    }
}

fn map_summary(summary: &Summary) -> SummaryVm {
    SummaryVm {
        key_points: summary.key_points().to_vec(),
        sections: summary
            .sections()
            .iter()
            .map(|section| SummarySectionVm {
                title: section.title.clone(),
                body: section.body.clone(),
            })
            .collect(),
        download: summary.download().map(DownloadVm::from_attachment),
    }
}
