use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationError {
    #[error("duration `{0}` is not in mm:ss form")]
    Malformed(String),

    #[error("duration `{0}` has seconds outside 00-59")]
    SecondsOutOfRange(String),

    #[error("duration `{0}` is too large")]
    Overflow(String),
}

//
// ─── LESSON DURATION ───────────────────────────────────────────────────────────
//

/// Play length of a lesson or exercise, written as `mm:ss`.
///
/// Minutes may run past 59 (`75:00` is an hour and a quarter); seconds are
/// always two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LessonDuration {
    seconds: u32,
}

impl LessonDuration {
    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Parses an `mm:ss` string.
    ///
    /// # Errors
    ///
    /// Returns `DurationError` when the input is not numeric `mm:ss`.
    pub fn parse(raw: &str) -> Result<Self, DurationError> {
        let malformed = || DurationError::Malformed(raw.to_owned());

        let (minutes, seconds) = raw.trim().split_once(':').ok_or_else(malformed)?;
        if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let minutes: u32 = minutes
            .parse()
            .map_err(|_| DurationError::Overflow(raw.to_owned()))?;
        let seconds: u32 = seconds.parse().map_err(|_| malformed())?;
        if seconds >= 60 {
            return Err(DurationError::SecondsOutOfRange(raw.to_owned()));
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_seconds)
            .ok_or_else(|| DurationError::Overflow(raw.to_owned()))
    }

    #[must_use]
    pub const fn as_seconds(self) -> u32 {
        self.seconds
    }
}

impl fmt::Display for LessonDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

impl FromStr for LessonDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LessonDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LessonDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Human label for a summed play length, e.g. `1h 39m` or `42m`.
#[must_use]
pub fn format_total(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(LessonDuration::parse("12:45").unwrap().as_seconds(), 765);
        assert_eq!(LessonDuration::parse("18:30").unwrap().as_seconds(), 1110);
        assert_eq!(LessonDuration::parse("0:07").unwrap().as_seconds(), 7);
    }

    #[test]
    fn minutes_may_exceed_an_hour() {
        assert_eq!(LessonDuration::parse("75:00").unwrap().as_seconds(), 4500);
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in ["", "12", "12:5", "ab:cd", "-1:00", "12:345", ":30", "1:2:3"] {
            assert!(
                matches!(LessonDuration::parse(raw), Err(DurationError::Malformed(_))),
                "expected malformed for {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_seconds_out_of_range() {
        assert_eq!(
            LessonDuration::parse("10:60"),
            Err(DurationError::SecondsOutOfRange("10:60".into()))
        );
    }

    #[test]
    fn rejects_overflowing_minutes() {
        assert!(matches!(
            LessonDuration::parse("99999999999:00"),
            Err(DurationError::Overflow(_))
        ));
    }

    #[test]
    fn displays_as_clock_text() {
        assert_eq!(LessonDuration::from_seconds(765).to_string(), "12:45");
        assert_eq!(LessonDuration::from_seconds(65).to_string(), "1:05");
    }

    #[test]
    fn deserializes_from_string() {
        let d: LessonDuration = serde_json::from_str("\"22:15\"").unwrap();
        assert_eq!(d.as_seconds(), 1335);
        assert!(serde_json::from_str::<LessonDuration>("\"22m\"").is_err());
    }

    #[test]
    fn formats_totals() {
        assert_eq!(format_total(1875), "31m");
        assert_eq!(format_total(5940), "1h 39m");
        assert_eq!(format_total(0), "0m");
    }
}
