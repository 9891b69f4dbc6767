use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static TWELVE_HOUR_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(1[0-2]|0?[1-9]):([0-5][0-9])\s?(AM|PM|am|pm)$").expect("valid time pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} has an invalid time format. Time must be in the format HH:MM AM|PM.")]
pub struct InvalidClockTime(pub String);

/// A 12-hour wall clock time such as `10:00 AM` or `1:30pm`.
///
/// Keeps the text it was written with so records serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    text: String,
    time: NaiveTime,
}

impl ClockTime {
    pub fn parse(raw: &str) -> Result<Self, InvalidClockTime> {
        let captures = TWELVE_HOUR_TIME
            .captures(raw)
            .ok_or_else(|| InvalidClockTime(raw.to_string()))?;
        let hour: u32 = captures[1]
            .parse()
            .map_err(|_| InvalidClockTime(raw.to_string()))?;
        let minute: u32 = captures[2]
            .parse()
            .map_err(|_| InvalidClockTime(raw.to_string()))?;
        let is_pm = captures[3].eq_ignore_ascii_case("pm");
        let hour = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| InvalidClockTime(raw.to_string()))?;
        Ok(Self {
            text: raw.to_string(),
            time,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidClockTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.text
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Field validator for payloads that carry times as plain strings.
pub fn validate_clock_time(value: &str) -> Result<(), validator::ValidationError> {
    ClockTime::parse(value).map(|_| ()).map_err(|e| {
        let mut error = validator::ValidationError::new("time_format");
        error.message = Some(e.to_string().into());
        error
    })
}
