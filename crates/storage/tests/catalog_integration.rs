use std::path::PathBuf;

use course_core::model::{CourseId, LessonId};
use storage::{Catalog, CourseRepository, Storage, StorageError};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storage-catalog-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write catalog");
    path
}

#[test]
fn catalog_file_backs_storage() {
    let path = scratch_file(
        "catalog.json",
        r#"{"courses":[{
            "id":"rust-101","title":"Rust Basics","teacher":"Ferris",
            "videos":[
                {"id":"l1","title":"Ownership","duration":"9:05","teacher":"Ferris"},
                {"id":"l2","title":"Borrowing","duration":"11:55","teacher":"Ferris",
                 "attachmentUrl":"/files/borrowing.pdf"}
            ]}]}"#,
    );

    let catalog = Catalog::from_path(&path).expect("load catalog");
    let storage = Storage::from_catalog(catalog);

    let course = storage
        .courses
        .lookup_course(&CourseId::new("rust-101"))
        .expect("course present");
    assert_eq!(course.total_duration_seconds(), 545 + 715);
    assert_eq!(course.lesson_index(&LessonId::new("l2")), Some(1));
    let attachment = course.lessons()[1].attachment().expect("attachment");
    assert_eq!(attachment.label(), "Download");

    assert!(storage.courses.lookup_course(&CourseId::new("1")).is_none());
}

#[test]
fn missing_catalog_file_reports_path() {
    let path = std::env::temp_dir().join("storage-catalog-does-not-exist.json");
    let err = Catalog::from_path(&path).unwrap_err();
    match err {
        StorageError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bundled_catalog_keeps_curriculum_order() {
    let storage = Storage::bundled().expect("bundled catalog");
    let course = storage
        .courses
        .lookup_course(&CourseId::new("1"))
        .expect("python course");
    let ids: Vec<&str> = course.lessons().iter().map(|l| l.id().as_str()).collect();
    assert_eq!(ids, ["v1", "v2", "v3", "v4", "v5"]);
}
