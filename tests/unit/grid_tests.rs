// Table-driven tests for month grid layout
#[path = "../fixtures/mod.rs"]
mod fixtures;

use backoffice_calendar::models::calendar_day::CalendarDay;
use backoffice_calendar::services::event_index::EventIndex;
use backoffice_calendar::services::month_grid::{generate, generate_with_week_start};
use fixtures::dates::{leap_day_2024, ymd};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn describe(cell: &CalendarDay<'_>) -> (i32, u32, u32, bool) {
    (cell.year, cell.month, cell.date, cell.is_current_month)
}

// Month, expected first cell and expected last cell
#[test_case(2025, 0, (2024, 11, 29, false), (2025, 1, 8, false); "january 2025")]
#[test_case(2025, 1, (2025, 0, 26, false), (2025, 2, 8, false); "february 2025")]
#[test_case(2025, 2, (2025, 1, 23, false), (2025, 3, 5, false); "march 2025")]
#[test_case(2025, 3, (2025, 2, 30, false), (2025, 4, 10, false); "april 2025")]
#[test_case(2025, 5, (2025, 5, 1, true), (2025, 6, 12, false); "june 2025 starts sunday")]
#[test_case(2026, 1, (2026, 1, 1, true), (2026, 2, 14, false); "february 2026 starts sunday")]
#[test_case(2025, 11, (2025, 10, 30, false), (2026, 0, 10, false); "december 2025")]
fn test_grid_bounds(
    year: i32,
    month0: u32,
    first: (i32, u32, u32, bool),
    last: (i32, u32, u32, bool),
) {
    let index = EventIndex::empty();
    let grid = generate(year, month0, &index, ymd(2000, 1, 1));
    let cells = grid.cells();

    assert_eq!(cells.len(), 42);
    assert_eq!(describe(&cells[0]), first);
    assert_eq!(describe(&cells[41]), last);
}

#[test_case(0, "Sun", 2; "sunday start")]
#[test_case(1, "Mon", 1; "monday start")]
#[test_case(2, "Tue", 0; "tuesday start")]
#[test_case(6, "Sat", 3; "saturday start")]
fn test_week_start_shifts_leading_days(first_day_of_week: u8, header: &str, leading: usize) {
    // April 1st 2025 is a Tuesday
    let index = EventIndex::empty();
    let grid = generate_with_week_start(2025, 3, first_day_of_week, &index, ymd(2025, 4, 1));

    assert_eq!(grid.day_names()[0].short, header);
    assert_eq!(
        grid.cells().iter().take_while(|c| !c.is_current_month).count(),
        leading
    );
    assert_eq!(grid.cells().len(), 42);
}

#[test]
fn test_leap_february() {
    let index = EventIndex::empty();
    let grid = generate(2024, 1, &index, leap_day_2024());

    assert_eq!(grid.current_month_days().count(), 29);
    let today = grid.today().expect("leap day is shown");
    assert_eq!((today.date, today.month), (29, 1));
}
