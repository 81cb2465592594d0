// Calendar day module
// Grid cells produced for a navigated month

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::event::CalendarEvent;

/// Cells in a month grid: six full weeks.
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Header label for a weekday column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayName {
    pub full: &'static str,
    pub short: &'static str,
}

const DAY_NAMES: [DayName; 7] = [
    DayName { full: "Sunday", short: "Sun" },
    DayName { full: "Monday", short: "Mon" },
    DayName { full: "Tuesday", short: "Tue" },
    DayName { full: "Wednesday", short: "Wed" },
    DayName { full: "Thursday", short: "Thu" },
    DayName { full: "Friday", short: "Fri" },
    DayName { full: "Saturday", short: "Sat" },
];

/// Name of a 0-based month.
pub fn month_name(month0: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month0 as usize).copied()
}

/// Weekday headers starting from `first_day_of_week` (0 = Sunday).
pub fn day_names(first_day_of_week: u8) -> Vec<DayName> {
    let start = first_day_of_week as usize;
    (0..7).map(|i| DAY_NAMES[(start + i) % 7]).collect()
}

/// One cell of the month grid.
///
/// `month` is 0-based. `events` borrows from the index the grid was built
/// against, in the order the events were supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay<'a> {
    pub date: u32,
    pub month: u32,
    pub year: i32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> CalendarDay<'a> {
    /// Describe `date` as a cell.
    ///
    /// `is_today` compares day, month and year with `today` and does not look
    /// at `is_current_month`, so an overflow cell can be today.
    pub fn new(
        date: NaiveDate,
        is_current_month: bool,
        today: NaiveDate,
        events: Vec<&'a CalendarEvent>,
    ) -> Self {
        let is_today = date.day() == today.day()
            && date.month0() == today.month0()
            && date.year() == today.year();

        Self {
            date: date.day(),
            month: date.month0(),
            year: date.year(),
            is_current_month,
            is_today,
            events,
        }
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.date)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Whether this cell shows `date`.
    pub fn is_date(&self, date: NaiveDate) -> bool {
        self.date == date.day() && self.month == date.month0() && self.year == date.year()
    }
}

/// The 6x7 tiling of a month, overflow days included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: u8,
    cells: Vec<CalendarDay<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub(crate) fn new(
        year: i32,
        month: u32,
        first_day_of_week: u8,
        cells: Vec<CalendarDay<'a>>,
    ) -> Self {
        debug_assert_eq!(cells.len(), GRID_CELLS);
        Self {
            year,
            month,
            first_day_of_week,
            cells,
        }
    }

    pub fn cells(&self) -> &[CalendarDay<'a>] {
        &self.cells
    }

    /// Rows of seven cells, top to bottom.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay<'a>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay<'a>> {
        self.cells.iter().filter(|day| day.is_current_month)
    }

    pub fn find(&self, date: NaiveDate) -> Option<&CalendarDay<'a>> {
        self.cells.iter().find(|day| day.is_date(date))
    }

    pub fn today(&self) -> Option<&CalendarDay<'a>> {
        self.cells.iter().find(|day| day.is_today)
    }

    pub fn day_names(&self) -> Vec<DayName> {
        day_names(self.first_day_of_week)
    }

    /// Heading such as "April 2025".
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month).unwrap_or_default(), self.year)
    }
}
