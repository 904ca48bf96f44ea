use std::fmt;
use std::str::FromStr;

/// Sidebar tab of the learning view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LearningTab {
    #[default]
    Content,
    Exercises,
    Summary,
}

impl LearningTab {
    /// Tabs in strip order.
    pub const ALL: [LearningTab; 3] = [
        LearningTab::Content,
        LearningTab::Exercises,
        LearningTab::Summary,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LearningTab::Content => "content",
            LearningTab::Exercises => "exercises",
            LearningTab::Summary => "summary",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LearningTab::Content => "Content",
            LearningTab::Exercises => "Exercises",
            LearningTab::Summary => "Summary",
        }
    }
}

impl fmt::Display for LearningTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown learning tab: {0}")]
pub struct ParseTabError(String);

impl FromStr for LearningTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(LearningTab::Content),
            "exercises" => Ok(LearningTab::Exercises),
            "summary" => Ok(LearningTab::Summary),
            _ => Err(ParseTabError(s.to_owned())),
        }
    }
}
