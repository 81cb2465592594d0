//! Command line front end: prints a month grid, and optionally a day's
//! events, for an event file exported from the dashboard.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use serde::Serialize;

use crate::models::calendar_day::{CalendarDay, MonthGrid};
use crate::models::event::{CalendarEvent, STATUS_LEGEND};
use crate::services::calendar::CalendarBoard;
use crate::services::event::load_events;
use crate::services::settings::SettingsService;
use crate::utils::date::{parse_day_key, FixedClock, SystemClock};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "backoffice-calendar",
    version,
    about = "Month grid and per-day event listing for back-office calendar events"
)]
pub struct Cli {
    /// JSON file with an array of events (or an object with an `events` array)
    #[arg(long = "events")]
    pub events: Option<PathBuf>,

    /// Month to show, as YYYY-MM (defaults to the current month)
    #[arg(long = "month", value_parser = parse_month_arg)]
    pub month: Option<NaiveDate>,

    /// Treat this date as today, as YYYY-MM-DD
    #[arg(long = "today", value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,

    /// Step back this many months from the shown month
    #[arg(long = "prev", default_value_t = 0)]
    pub prev: u32,

    /// Step forward this many months from the shown month
    #[arg(long = "next", default_value_t = 0)]
    pub next: u32,

    /// Select a day, as YYYY-MM-DD, and list its events
    #[arg(long = "day", value_parser = parse_date_arg)]
    pub day: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long = "json")]
    pub json: bool,

    /// Settings file (calendar.toml)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn parse_month_arg(value: &str) -> Result<NaiveDate, String> {
    parse_day_key(&format!("{}-01", value.trim()))
        .ok_or_else(|| format!("expected YYYY-MM, got: {}", value))
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_day_key(value.trim()).ok_or_else(|| format!("expected YYYY-MM-DD, got: {}", value))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    title: String,
    grid: &'a MonthGrid<'a>,
    selected_date: Option<String>,
    modal_open: bool,
    selected_events: Vec<&'a CalendarEvent>,
}

/// Initialise logging the way the binary does; `RUST_LOG` still wins.
pub fn init_logging(cli: &Cli) {
    let _ = env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .try_init();
}

/// Parse `args`, build the board and return the rendered output.
pub fn run<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    init_logging(&cli);
    render(&cli)
}

pub fn render(cli: &Cli) -> Result<String> {
    let settings = SettingsService::discover(cli.config.as_deref()).get()?;
    let zone = settings
        .zone()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    let date_format = settings.date_format.clone();

    let mut board = match cli.today {
        Some(today) => CalendarBoard::new(settings, Box::new(FixedClock::on(today))),
        None => CalendarBoard::new(settings, Box::new(SystemClock::new(zone))),
    }
    .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    if let Some(path) = cli.events.as_deref() {
        let events = load_events(path).context("failed to load calendar events")?;
        board.set_events(events);
    }

    if let Some(month) = cli.month {
        board.show_month_of(month);
    }
    for _ in 0..cli.prev {
        board.goto_prev_month();
    }
    for _ in 0..cli.next {
        board.goto_next_month();
    }
    if let Some(day) = cli.day {
        board.select_date(day);
    }

    let grid = board.grid();
    let selected_events = if board.is_modal_open() {
        board.selected_events()
    } else {
        Vec::new()
    };

    if cli.json {
        let report = Report {
            title: grid.title(),
            grid: &grid,
            selected_date: board
                .navigation()
                .selected_date()
                .map(crate::utils::date::day_key),
            modal_open: board.is_modal_open(),
            selected_events,
        };
        return serde_json::to_string_pretty(&report).context("failed to serialize report");
    }

    let mut out = render_grid(&grid, board.navigation().selected_date());
    let modal_date = board
        .navigation()
        .selected_date()
        .filter(|_| board.is_modal_open());
    if let Some(selected) = modal_date {
        out.push('\n');
        out.push_str(&render_day_events(
            selected,
            &selected_events,
            board.zone(),
            &date_format,
        ));
    }
    Ok(out)
}

/// Text grid. Cells show the day number, `*` for today, `'` for overflow days
/// and the number of events in parentheses; the selected day is bracketed.
pub fn render_grid(grid: &MonthGrid<'_>, selected: Option<NaiveDate>) -> String {
    const CELL_WIDTH: usize = 9;
    let mut out = String::new();
    let title = grid.title();
    let row_width = CELL_WIDTH * 7;
    let _ = writeln!(out, "{:^width$}", title, width = row_width);

    for name in grid.day_names() {
        let _ = write!(out, "{:<width$}", name.short, width = CELL_WIDTH);
    }
    out.push('\n');

    for week in grid.weeks() {
        let line: String = week
            .iter()
            .map(|day| format!("{:<width$}", cell_label(day, selected), width = CELL_WIDTH))
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out.push('\n');
    let legend: Vec<String> = STATUS_LEGEND
        .iter()
        .map(|entry| format!("{} = {}", entry.color, entry.label))
        .collect();
    let _ = writeln!(out, "Legend: {}", legend.join(", "));
    out
}

fn cell_label(day: &CalendarDay<'_>, selected: Option<NaiveDate>) -> String {
    let mut label = day.date.to_string();
    if day.is_today {
        label.push('*');
    }
    if !day.is_current_month {
        label.push('\'');
    }
    if day.has_events() {
        let _ = write!(label, "({})", day.events.len());
    }
    match selected {
        Some(date) if day.is_date(date) => format!("[{}]", label),
        _ => label,
    }
}

/// Modal contents for the selected day.
pub fn render_day_events(
    date: NaiveDate,
    events: &[&CalendarEvent],
    zone: crate::utils::date::CalendarZone,
    date_format: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Events for {}", date.format("%B %-d, %Y"));
    if events.is_empty() {
        let _ = writeln!(out, "  No events for this day");
        return out;
    }
    for event in events {
        let _ = writeln!(
            out,
            "  [{}] {}  {}",
            event.display_color(),
            event.title,
            event.date_range_label(zone, date_format)
        );
        if let Some(status) = &event.status {
            let _ = writeln!(out, "      Status: {}", status);
        }
    }
    out
}
