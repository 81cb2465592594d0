// Month grid generation
// Lays out the fixed six-week grid for a month and fills each cell from the index

use chrono::{Datelike, NaiveDate};

use crate::models::calendar_day::{CalendarDay, MonthGrid, GRID_CELLS};
use crate::services::event_index::EventIndex;
use crate::utils::date::{days_before, first_of_month};

/// Grid for `month0` (0-based) of `year` with Sunday in the first column.
///
/// Always 42 cells: trailing days of the previous month, every day of the
/// month, then leading days of the next month until six rows are full.
pub fn generate<'a>(
    year: i32,
    month0: u32,
    index: &'a EventIndex,
    today: NaiveDate,
) -> MonthGrid<'a> {
    generate_with_week_start(year, month0, 0, index, today)
}

/// Like [`generate`], but the first column is `first_day_of_week`
/// (0 = Sunday .. 6 = Saturday).
pub fn generate_with_week_start<'a>(
    year: i32,
    month0: u32,
    first_day_of_week: u8,
    index: &'a EventIndex,
    today: NaiveDate,
) -> MonthGrid<'a> {
    let first = first_of_month(year, month0);
    let first_day_of_week = first_day_of_week % 7;
    let leading = leading_days(first, first_day_of_week);
    let grid_start = days_before(first, leading);

    let cells: Vec<CalendarDay<'a>> = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let is_current_month = date.year() == first.year() && date.month() == first.month();
            CalendarDay::new(date, is_current_month, today, index.events_on(date))
        })
        .collect();

    MonthGrid::new(first.year(), first.month0(), first_day_of_week, cells)
}

/// Overflow cells shown before the 1st of the month.
fn leading_days(first: NaiveDate, first_day_of_week: u8) -> u32 {
    (first.weekday().num_days_from_sunday() + 7 - u32::from(first_day_of_week)) % 7
}
