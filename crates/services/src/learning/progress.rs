/// Percentage of the curriculum reached when the lesson at `index` is selected.
///
/// Computes `round(100 * (index + 1) / lesson_count)` with halves rounded up,
/// in integer arithmetic. Returns 0 when nothing is selected or the course
/// has no lessons.
#[must_use]
pub fn progress_percent(index: Option<usize>, lesson_count: usize) -> u8 {
    let Some(index) = index else {
        return 0;
    };
    if lesson_count == 0 {
        return 0;
    }
    let position = (index + 1).min(lesson_count);
    let percent = (200 * position + lesson_count) / (2 * lesson_count);
    u8::try_from(percent).unwrap_or(100)
}
