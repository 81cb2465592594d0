//! Per-day event index.
//!
//! Expands every event's inclusive date range once, so that month grids and
//! day lookups are plain map reads instead of a scan over all events per cell.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::models::event::CalendarEvent;
use crate::utils::date::{day_key, days_between, end_of_day, start_of_day, CalendarZone};

/// Day key -> events active on that day.
///
/// Buckets hold positions into the shared event list, in the order the events
/// were supplied. An index is never modified after [`EventIndex::build`]
/// returns; a changed event list means building a new one.
#[derive(Debug, Clone)]
pub struct EventIndex {
    events: Arc<[CalendarEvent]>,
    buckets: HashMap<String, Vec<usize>>,
    indexed: usize,
    skipped: usize,
}

impl EventIndex {
    /// Index `events` using `zone` as the local calendar.
    ///
    /// Events whose start or end cannot be parsed are left out without error.
    /// A range given backwards is indexed as if its ends were swapped. Cost is
    /// proportional to the total number of days covered by all events.
    pub fn build(events: Arc<[CalendarEvent]>, zone: CalendarZone) -> Self {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
        let mut indexed = 0;
        let mut skipped = 0;

        for (position, event) in events.iter().enumerate() {
            let Some((raw_start, raw_end)) = event.parsed_range(zone) else {
                log::trace!(
                    "Skipping event {} with unparseable range {:?} - {:?}",
                    event.id,
                    event.start_date,
                    event.end_date
                );
                skipped += 1;
                continue;
            };

            let s0 = start_of_day(raw_start);
            let e0 = end_of_day(raw_end);
            let (first, last) = if s0 <= e0 {
                (s0, e0)
            } else {
                (start_of_day(raw_end), end_of_day(raw_start))
            };

            for day in days_between(first.date(), last.date()) {
                buckets.entry(day_key(day)).or_default().push(position);
            }
            indexed += 1;
        }

        log::debug!(
            "Indexed {} events across {} days ({} skipped)",
            indexed,
            buckets.len(),
            skipped
        );

        Self {
            events,
            buckets,
            indexed,
            skipped,
        }
    }

    /// An index over no events.
    pub fn empty() -> Self {
        Self::build(Arc::from(Vec::new()), CalendarZone::System)
    }

    /// True when `events` is the very list (same allocation) this index covers.
    pub fn is_built_from(&self, events: &Arc<[CalendarEvent]>) -> bool {
        Arc::ptr_eq(&self.events, events)
    }

    /// Events for a day key; empty for keys with no events.
    pub fn get(&self, key: &str) -> Vec<&CalendarEvent> {
        self.buckets
            .get(key)
            .map(|positions| positions.iter().map(|&p| &self.events[p]).collect())
            .unwrap_or_default()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.get(&day_key(date))
    }

    /// Events on day `day` of 0-based `month0` in `year`.
    /// Returns nothing for a day that does not exist.
    pub fn events_for_date(&self, day: u32, month0: u32, year: i32) -> Vec<&CalendarEvent> {
        NaiveDate::from_ymd_opt(year, month0.saturating_add(1), day)
            .map(|date| self.events_on(date))
            .unwrap_or_default()
    }

    /// Sorted day key -> event ids view, handy for comparing two indexes.
    pub fn associations(&self) -> BTreeMap<&str, Vec<&str>> {
        self.buckets
            .iter()
            .map(|(key, positions)| {
                let ids = positions
                    .iter()
                    .map(|&p| self.events[p].id.as_str())
                    .collect();
                (key.as_str(), ids)
            })
            .collect()
    }

    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    /// Events that made it into the index
    pub fn indexed_count(&self) -> usize {
        self.indexed
    }

    /// Events left out because a date could not be parsed
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Default for EventIndex {
    fn default() -> Self {
        Self::empty()
    }
}
