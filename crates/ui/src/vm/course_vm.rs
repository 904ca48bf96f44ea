use course_core::model::format_total;
use services::CourseListItem;

/// UI-ready representation of a course in the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub meta_label: String,
}

/// Convert listing items into card view models.
#[must_use]
pub fn map_course_cards(items: &[CourseListItem]) -> Vec<CourseCardVm> {
    items
        .iter()
        .map(|item| CourseCardVm {
            id: item.id.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            instructor: item.instructor.clone(),
            meta_label: format_meta(item.lesson_count, item.total_duration_seconds),
        })
        .collect()
}

fn format_meta(lesson_count: usize, total_seconds: u32) -> String {
    let lessons = match lesson_count {
        1 => "1 lesson".to_string(),
        n => format!("{n} lessons"),
    };
    format!("{lessons} · {}", format_total(total_seconds))
}
