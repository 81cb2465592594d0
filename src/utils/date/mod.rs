// Date utility functions
// Local calendar-day semantics shared by parsing, day keys and grid arithmetic

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc,
};
use chrono_tz::Tz;
use std::fmt;

/// Naive timestamp layouts accepted after RFC 3339 / RFC 2822 have been tried.
/// These carry no offset and are read as local wall time.
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The zone that defines what "local" means for a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarZone {
    /// Whatever the host reports as its local zone.
    #[default]
    System,
    /// A fixed IANA zone, independent of the host.
    Named(Tz),
}

impl CalendarZone {
    /// Resolve an optional IANA zone name. `None` means the system zone.
    pub fn from_name(name: Option<&str>) -> Option<Self> {
        match name.map(str::trim) {
            None | Some("") => Some(Self::System),
            Some(name) => name.parse::<Tz>().ok().map(Self::Named),
        }
    }

    /// Convert an absolute instant into wall-clock time in this zone.
    pub fn localize(&self, instant: DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            Self::System => instant.with_timezone(&Local).naive_local(),
            Self::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System => Local::now().naive_local(),
            Self::Named(tz) => Utc::now().with_timezone(tz).naive_local(),
        }
    }
}

impl fmt::Display for CalendarZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Source of "now" for anything that needs today's date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the real time in the configured zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: CalendarZone,
}

impl SystemClock {
    pub fn new(zone: CalendarZone) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        self.zone.now()
    }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Pin the clock to local midnight of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parse an event date value into local wall-clock time.
///
/// A bare `YYYY-MM-DD` value is taken as local midnight of that calendar day
/// and never goes through an offset conversion, so it cannot drift to the
/// neighbouring day. Anything else is tried as a full timestamp. Returns `None`
/// when the value cannot be understood; callers decide what to do with that.
pub fn parse_date_value(value: &str, zone: CalendarZone) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_date_only_shape(trimmed) {
        return parse_date_only(trimmed).map(|date| date.and_time(NaiveTime::MIN));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(zone.localize(instant));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(zone.localize(instant));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Canonical `YYYY-MM-DD` key for a local calendar day.
pub fn day_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Inverse of [`day_key`].
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    if has_date_only_shape(key) {
        parse_date_only(key)
    } else {
        None
    }
}

pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// Last representable millisecond of the day.
pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(last_millisecond())
}

/// Every calendar day from `first` through `last`, inclusive.
///
/// Steps by calendar day rather than by 24 hours, so DST transitions never
/// skip or repeat a day.
pub fn days_between(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    first.iter_days().take_while(move |day| *day <= last)
}

/// Number of days in `month` (1-12) of `year`; zero for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// First day of the month identified by `year` and a 0-based `month0`.
///
/// `month0` values past December carry into the following years, and years
/// outside chrono's range are clamped, so this always yields a date.
pub fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    let year = year.saturating_add((month0 / 12) as i32);
    let year = year.clamp(NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1);
    NaiveDate::from_ymd_opt(year, month0 % 12 + 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Move `current` by `delta_months`, landing on day 1 of the target month.
///
/// Pinning to the 1st keeps e.g. Jan 31 + 1 month from overflowing into March.
pub fn shift_month(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + current.month0() as i32 + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(new_year, new_month, 1).unwrap_or(current)
}

/// Step `date` back by `count` days, saturating at the earliest date.
pub fn days_before(date: NaiveDate, count: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(count)))
        .unwrap_or(NaiveDate::MIN)
}

fn last_millisecond() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

fn has_date_only_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit())
}

fn parse_date_only(value: &str) -> Option<NaiveDate> {
    let year: i32 = value[0..4].parse().ok()?;
    let month: u32 = value[5..7].parse().ok()?;
    let day: u32 = value[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
