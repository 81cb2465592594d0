//! Calendar board: the owner of everything the calendar view derives.
//!
//! Holds the current event list, its day index, the navigation state and the
//! clock. The index is rebuilt only when a different event list is supplied,
//! and a grid is generated on request from the current month and today.

use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use crate::models::calendar_day::{CalendarDay, MonthGrid};
use crate::models::event::CalendarEvent;
use crate::models::settings::{Settings, SettingsError};
use crate::services::event_index::EventIndex;
use crate::services::month_grid;
use crate::services::navigation::Navigation;
use crate::utils::date::{CalendarZone, Clock, SystemClock};

pub struct CalendarBoard {
    settings: Settings,
    zone: CalendarZone,
    clock: Box<dyn Clock>,
    index: EventIndex,
    navigation: Navigation,
}

impl CalendarBoard {
    pub fn new(settings: Settings, clock: Box<dyn Clock>) -> Result<Self, SettingsError> {
        settings.validate()?;
        let zone = settings.zone()?;
        let navigation = Navigation::new(clock.as_ref());

        Ok(Self {
            settings,
            zone,
            clock,
            index: EventIndex::empty(),
            navigation,
        })
    }

    /// Board reading the real time in the settings' zone.
    pub fn with_system_clock(settings: Settings) -> Result<Self, SettingsError> {
        let zone = settings.zone()?;
        Self::new(settings, Box::new(SystemClock::new(zone)))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn zone(&self) -> CalendarZone {
        self.zone
    }

    /// Replace the event list. Returns whether the index was rebuilt; handing
    /// back the list the index already covers is a no-op.
    pub fn set_events(&mut self, events: Arc<[CalendarEvent]>) -> bool {
        if self.index.is_built_from(&events) {
            return false;
        }
        self.index = EventIndex::build(events, self.zone);
        true
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Grid of the month currently navigated to.
    pub fn grid(&self) -> MonthGrid<'_> {
        month_grid::generate_with_week_start(
            self.navigation.year(),
            self.navigation.month0(),
            self.settings.first_day_of_week,
            &self.index,
            self.today(),
        )
    }

    pub fn events_for_date(&self, day: u32, month0: u32, year: i32) -> Vec<&CalendarEvent> {
        self.index.events_for_date(day, month0, year)
    }

    pub fn goto_prev_month(&mut self) {
        self.navigation.goto_prev_month();
    }

    pub fn goto_next_month(&mut self) {
        self.navigation.goto_next_month();
    }

    pub fn goto_today(&mut self) {
        self.navigation.goto_today(self.clock.as_ref());
    }

    /// Jump to the month containing `date`.
    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.navigation.goto_date(date);
    }

    /// Select `date` as if its cell had been clicked.
    pub fn select_date(&mut self, date: NaiveDate) {
        let today = self.today();
        let shown_month = (self.navigation.year(), self.navigation.month0());
        let day = CalendarDay::new(
            date,
            shown_month == (date.year(), date.month0()),
            today,
            self.index.events_on(date),
        );
        self.navigation.select_day(&day);
    }

    pub fn close_modal(&mut self) {
        self.navigation.close_modal();
    }

    pub fn is_modal_open(&self) -> bool {
        self.navigation.is_modal_open()
    }

    pub fn selected_events(&self) -> Vec<&CalendarEvent> {
        self.navigation.selected_events(&self.index)
    }
}
