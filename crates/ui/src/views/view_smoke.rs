use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_courses() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Introduction to Python Programming",
        "Machine Learning Fundamentals",
        "5 lessons · 1h 39m",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_first_lesson() {
    let mut harness = setup_view_harness(ViewKind::Course("1"));
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Introduction to Python Programming",
        "Getting Started with Python",
        "Lesson 1 of 5",
        "20% complete",
        "intro-setup.pdf",
        "Back to Courses",
        "Control Flow and Loops",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(
        html.contains("playlist__item--active"),
        "missing active playlist row in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Course("unknown-id"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Course not found"), "missing not-found in {html}");
    assert!(!html.contains("Playlist"), "unexpected playlist in {html}");
}
