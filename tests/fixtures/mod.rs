// Test fixtures - reusable test data
// Provides consistent events and dates across all test files
#![allow(dead_code)]

use backoffice_calendar::models::event::{CalendarEvent, EventColor};
use chrono::NaiveDate;
use std::sync::Arc;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Mid-April 2025, the "today" used by most grid tests
    pub fn april_15_2025() -> NaiveDate {
        ymd(2025, 4, 15)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Four-day delivery window spanning the March/April boundary
    pub fn delivery_window() -> CalendarEvent {
        CalendarEvent::builder()
            .id("A")
            .title("Produce delivery window")
            .start_date("2025-03-30")
            .end_date("2025-04-02")
            .status("Pending")
            .color(EventColor::Amber)
            .build()
            .unwrap()
    }

    /// Event with a start date nothing can parse
    pub fn malformed_purchase() -> CalendarEvent {
        CalendarEvent::new("B", "Purchase order", "not-a-date", "2025-05-01")
    }

    /// Single-day event given as a full UTC timestamp
    pub fn inventory_count() -> CalendarEvent {
        CalendarEvent::builder()
            .id("C")
            .title("Inventory count")
            .on("2025-04-15T14:00:00Z")
            .status("Delivered")
            .color(EventColor::Emerald)
            .build()
            .unwrap()
    }

    /// Range entered back to front
    pub fn reversed_staff_training() -> CalendarEvent {
        CalendarEvent::new("D", "Staff training", "2025-04-22", "2025-04-20")
    }

    pub fn all() -> Arc<[CalendarEvent]> {
        Arc::from(vec![
            delivery_window(),
            malformed_purchase(),
            inventory_count(),
            reversed_staff_training(),
        ])
    }
}
