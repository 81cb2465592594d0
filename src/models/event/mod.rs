// Event module
// Calendar event as supplied by the dashboard API

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::utils::date::{parse_date_value, CalendarZone};

/// Used for labels when the configured format cannot render a wall-clock time
const FALLBACK_DATE_FORMAT: &str = "%m/%d/%Y";

/// Fixed palette an event may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Blue,
    Purple,
    Emerald,
    Rose,
    Amber,
    #[default]
    Indigo,
    Slate,
}

impl EventColor {
    pub const ALL: [EventColor; 7] = [
        EventColor::Blue,
        EventColor::Purple,
        EventColor::Emerald,
        EventColor::Rose,
        EventColor::Amber,
        EventColor::Indigo,
        EventColor::Slate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Purple => "purple",
            EventColor::Emerald => "emerald",
            EventColor::Rose => "rose",
            EventColor::Amber => "amber",
            EventColor::Indigo => "indigo",
            EventColor::Slate => "slate",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown event color: {}", s))
    }
}

/// One row of the status legend shown under the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: EventColor,
}

pub const STATUS_LEGEND: [LegendEntry; 3] = [
    LegendEntry {
        label: "Delivered",
        color: EventColor::Emerald,
    },
    LegendEntry {
        label: "Pending",
        color: EventColor::Amber,
    },
    LegendEntry {
        label: "Cancelled",
        color: EventColor::Rose,
    },
];

/// Legend color for a status string, compared case-insensitively.
pub fn legend_color_for_status(status: &str) -> Option<EventColor> {
    STATUS_LEGEND
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(status.trim()))
        .map(|entry| entry.color)
}

/// Calendar event as delivered by the API.
///
/// `start_date` and `end_date` are kept as the raw strings the API sent
/// (`YYYY-MM-DD` or a full timestamp); they are interpreted only when the
/// event is indexed, so a malformed value never prevents loading the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EventColor>,
}

impl CalendarEvent {
    /// Create an event with the required fields
    ///
    /// # Examples
    /// ```
    /// use backoffice_calendar::models::event::CalendarEvent;
    ///
    /// let event = CalendarEvent::new("A", "Produce delivery", "2025-03-30", "2025-04-02");
    /// assert_eq!(event.start_date, "2025-03-30");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            status: None,
            color: None,
        }
    }

    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Color used for display; untagged events fall back to indigo.
    pub fn display_color(&self) -> EventColor {
        self.color.unwrap_or_default()
    }

    /// Parsed start and end, or `None` if either side is unparseable.
    pub fn parsed_range(&self, zone: CalendarZone) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = parse_date_value(&self.start_date, zone)?;
        let end = parse_date_value(&self.end_date, zone)?;
        Some((start, end))
    }

    /// Human readable `start – end` label using a chrono format string.
    pub fn date_range_label(&self, zone: CalendarZone, date_format: &str) -> String {
        let render = |value: &str| match parse_date_value(value, zone) {
            Some(parsed) => {
                let mut out = String::new();
                if write!(out, "{}", parsed.format(date_format)).is_err() {
                    out = parsed.format(FALLBACK_DATE_FORMAT).to_string();
                }
                out
            }
            None => "Invalid Date".to_string(),
        };
        format!("{} – {}", render(&self.start_date), render(&self.end_date))
    }
}

/// Builder for events with optional fields
#[derive(Debug, Default)]
pub struct CalendarEventBuilder {
    id: Option<String>,
    title: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    status: Option<String>,
    color: Option<EventColor>,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Single-day event: start and end are the same value
    pub fn on(self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.start_date(date.clone()).end_date(date)
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Build the event. Only presence is checked; date strings are not
    /// validated here.
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start_date = self.start_date.ok_or("Event start date is required")?;
        let end_date = self.end_date.ok_or("Event end date is required")?;

        Ok(CalendarEvent {
            id,
            title,
            start_date,
            end_date,
            status: self.status,
            color: self.color,
        })
    }
}
