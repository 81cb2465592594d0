// Settings module
// User-facing calendar preferences loaded from calendar.toml

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::CalendarZone;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Weekday shown in the first grid column, 0 = Sunday
    pub first_day_of_week: u8,
    /// IANA zone name; `None` uses the system zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// chrono format string for date labels
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            timezone: None,
            date_format: "%m/%d/%Y".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }

        self.zone()?;

        let format_is_broken = self.date_format.trim().is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
            || !formats_naive_dates(&self.date_format);
        if format_is_broken {
            return Err(SettingsError::InvalidDateFormat(self.date_format.clone()));
        }

        Ok(())
    }

    /// Zone that defines "local" for this calendar
    pub fn zone(&self) -> Result<CalendarZone, SettingsError> {
        CalendarZone::from_name(self.timezone.as_deref())
            .ok_or_else(|| {
                SettingsError::UnknownTimezone(self.timezone.clone().unwrap_or_default())
            })
    }
}

// Offset specifiers such as %z parse fine but fail when given a wall-clock time
fn formats_naive_dates(date_format: &str) -> bool {
    NaiveDate::from_ymd_opt(2025, 1, 31)
        .and_then(|date| date.and_hms_opt(13, 45, 0))
        .is_some_and(|sample| {
            let mut out = String::new();
            write!(out, "{}", sample.format(date_format)).is_ok()
        })
}
