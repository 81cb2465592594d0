// Property-based tests for the event index and month grid
// Random ranges and months, checked against straightforward date arithmetic

use backoffice_calendar::models::event::CalendarEvent;
use backoffice_calendar::services::event_index::EventIndex;
use backoffice_calendar::services::month_grid;
use backoffice_calendar::utils::date::{day_key, days_in_month, CalendarZone};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use std::sync::Arc;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn date_at(offset: u32) -> NaiveDate {
    base_date() + Days::new(u64::from(offset))
}

fn index_one(start: NaiveDate, end: NaiveDate) -> EventIndex {
    let events: Arc<[CalendarEvent]> = Arc::from(vec![CalendarEvent::new(
        "P",
        "Generated",
        day_key(start),
        day_key(end),
    )]);
    EventIndex::build(events, CalendarZone::System)
}

proptest! {
    /// Property: an event is found on every day of its range and nowhere else
    #[test]
    fn prop_range_coverage(
        start_offset in 0..3000u32,
        span in 0..90u32,
        probe in 0..3200u32,
    ) {
        let start = date_at(start_offset);
        let end = date_at(start_offset + span);
        let index = index_one(start, end);
        let day = date_at(probe);

        let found = !index.events_on(day).is_empty();
        prop_assert_eq!(found, start <= day && day <= end);
        prop_assert_eq!(index.day_count() as u32, span + 1);
    }

    /// Property: a reversed range indexes the same days as the forward one
    #[test]
    fn prop_reversed_range_matches_forward(
        start_offset in 0..3000u32,
        span in 1..60u32,
    ) {
        let early = date_at(start_offset);
        let late = date_at(start_offset + span);

        let forward = index_one(early, late);
        let reversed = index_one(late, early);
        prop_assert_eq!(forward.associations(), reversed.associations());
    }

    /// Property: building twice from the same list gives the same associations
    #[test]
    fn prop_build_is_idempotent(
        ranges in prop::collection::vec((0..400u32, 0..20u32), 0..25),
    ) {
        let events: Arc<[CalendarEvent]> = ranges
            .iter()
            .enumerate()
            .map(|(i, (offset, span))| {
                CalendarEvent::new(
                    format!("E{}", i),
                    "Generated",
                    day_key(date_at(*offset)),
                    day_key(date_at(offset + span)),
                )
            })
            .collect::<Vec<_>>()
            .into();

        let first = EventIndex::build(Arc::clone(&events), CalendarZone::System);
        let second = EventIndex::build(events, CalendarZone::System);
        prop_assert_eq!(first.associations(), second.associations());
        prop_assert_eq!(first.indexed_count(), ranges.len());
    }

    /// Property: garbage dates never reach the index and never panic
    #[test]
    fn prop_garbage_is_excluded(text in "[a-z ]{0,12}") {
        let events: Arc<[CalendarEvent]> =
            Arc::from(vec![CalendarEvent::new("G", "Garbage", text.clone(), "2025-01-01")]);
        let index = EventIndex::build(events, CalendarZone::System);
        prop_assert!(index.is_empty());
        prop_assert_eq!(index.skipped_count(), 1);
    }

    /// Property: every grid has 42 cells with one contiguous current-month run
    #[test]
    fn prop_grid_cardinality(
        year in 1900..2200i32,
        month0 in 0..12u32,
        first_day_of_week in 0..7u8,
    ) {
        let index = EventIndex::empty();
        let grid = month_grid::generate_with_week_start(
            year,
            month0,
            first_day_of_week,
            &index,
            base_date(),
        );
        let flags: Vec<bool> = grid.cells().iter().map(|c| c.is_current_month).collect();

        prop_assert_eq!(flags.len(), 42);
        let first = flags.iter().position(|f| *f).unwrap();
        let run = flags[first..].iter().take_while(|f| **f).count();
        prop_assert_eq!(run as u32, days_in_month(year, month0 + 1));
        prop_assert!(flags[first + run..].iter().all(|f| !*f));
        prop_assert!(first < 7);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_date_at_offsets() {
        assert_eq!(date_at(0), base_date());
        assert_eq!(date_at(366), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    }
}
