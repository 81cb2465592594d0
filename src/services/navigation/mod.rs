// Navigation module
// Month paging, day selection and the open/closed state of the day's event list

use chrono::{Datelike, NaiveDate};

use crate::models::calendar_day::CalendarDay;
use crate::models::event::CalendarEvent;
use crate::services::event_index::EventIndex;
use crate::utils::date::{shift_month, Clock};

/// Which month is shown, which day is selected, and whether the day's
/// event list is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    current_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    modal_open: bool,
}

impl Navigation {
    /// Start on today's month with nothing selected.
    pub fn new(clock: &dyn Clock) -> Self {
        Self::starting_at(clock.today())
    }

    pub fn starting_at(current_date: NaiveDate) -> Self {
        Self {
            current_date,
            selected_date: None,
            modal_open: false,
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn year(&self) -> i32 {
        self.current_date.year()
    }

    /// Displayed month, 0-based
    pub fn month0(&self) -> u32 {
        self.current_date.month0()
    }

    pub fn goto_prev_month(&mut self) {
        self.current_date = shift_month(self.current_date, -1);
        log::debug!("Navigated to {}", self.current_date.format("%Y-%m"));
    }

    pub fn goto_next_month(&mut self) {
        self.current_date = shift_month(self.current_date, 1);
        log::debug!("Navigated to {}", self.current_date.format("%Y-%m"));
    }

    /// Show the month containing `date`.
    pub fn goto_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn goto_today(&mut self, clock: &dyn Clock) {
        self.current_date = clock.today();
    }

    /// Select a cell. The modal only opens when the day has events; an empty
    /// day still becomes the selection.
    pub fn select_day(&mut self, day: &CalendarDay<'_>) {
        let Some(date) = day.naive_date() else {
            return;
        };
        self.selected_date = Some(date);
        if day.has_events() {
            self.modal_open = true;
        }
    }

    /// Dismiss the modal. The selection is kept for highlighting.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn is_selected(&self, day: &CalendarDay<'_>) -> bool {
        self.selected_date.is_some_and(|date| day.is_date(date))
    }

    /// Events of the selected day, for the modal body.
    pub fn selected_events<'a>(&self, index: &'a EventIndex) -> Vec<&'a CalendarEvent> {
        self.selected_date
            .map(|date| index.events_on(date))
            .unwrap_or_default()
    }
}
