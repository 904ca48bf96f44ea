use crate::model::duration::LessonDuration;
use crate::model::ids::LessonId;

/// Downloadable resource attached to a lesson or summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    href: String,
    name: Option<String>,
}

impl Attachment {
    #[must_use]
    pub fn new(href: impl Into<String>, name: Option<String>) -> Self {
        Self {
            href: href.into(),
            name,
        }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Text for the download affordance; unnamed attachments read "Download".
    #[must_use]
    pub fn label(&self) -> &str {
        self.name().unwrap_or("Download")
    }
}

/// One video unit in a course's ordered curriculum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    duration: LessonDuration,
    instructor: String,
    attachment: Option<Attachment>,
}

impl Lesson {
    #[must_use]
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        duration: LessonDuration,
        instructor: impl Into<String>,
        attachment: Option<Attachment>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration,
            instructor: instructor.into(),
            attachment,
        }
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration(&self) -> LessonDuration {
        self.duration
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }
}
