use crate::model::lesson::Attachment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: String,
    pub body: String,
}

impl SummarySection {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Condensed recap of a course.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    key_points: Vec<String>,
    sections: Vec<SummarySection>,
    download: Option<Attachment>,
}

impl Summary {
    #[must_use]
    pub fn new(
        key_points: Vec<String>,
        sections: Vec<SummarySection>,
        download: Option<Attachment>,
    ) -> Self {
        Self {
            key_points,
            sections,
            download,
        }
    }

    #[must_use]
    pub fn key_points(&self) -> &[String] {
        &self.key_points
    }

    #[must_use]
    pub fn sections(&self) -> &[SummarySection] {
        &self.sections
    }

    #[must_use]
    pub fn download(&self) -> Option<&Attachment> {
        self.download.as_ref()
    }
}
