//! Loading event lists handed over by the dashboard API.
//!
//! Accepts either a bare JSON array of events or an object with an `events`
//! array, which is how the purchasing and sales endpoints wrap their payloads.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::event::CalendarEvent;

#[derive(Deserialize)]
#[serde(untagged)]
enum EventPayload {
    Bare(Vec<CalendarEvent>),
    Wrapped { events: Vec<CalendarEvent> },
}

impl From<EventPayload> for Vec<CalendarEvent> {
    fn from(payload: EventPayload) -> Self {
        match payload {
            EventPayload::Bare(events) | EventPayload::Wrapped { events } => events,
        }
    }
}

pub fn parse_events(json: &str) -> Result<Vec<CalendarEvent>> {
    let payload: EventPayload =
        serde_json::from_str(json).context("failed to parse calendar events")?;
    Ok(payload.into())
}

pub fn load_events(path: &Path) -> Result<Arc<[CalendarEvent]>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = parse_events(&data)
        .with_context(|| format!("failed to load events from {}", path.display()))?;

    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(Arc::from(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_bare_array() {
        let events = parse_events(
            r#"[{"id":"A","title":"x","startDate":"2025-03-30","endDate":"2025-04-02"}]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].end_date, "2025-04-02");
    }

    #[test]
    fn test_parse_wrapped_object() {
        let events = parse_events(
            r#"{"events":[
                {"id":"A","title":"x","startDate":"2025-03-30","endDate":"2025-04-02"},
                {"id":"B","title":"y","startDate":"not-a-date","endDate":"2025-05-01"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].start_date, "not-a-date");
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = parse_events(r#"[{"id":"A","title":"x"}]"#).unwrap_err();
        assert!(err.to_string().contains("failed to parse calendar events"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"A","title":"x","startDate":"2025-03-30","endDate":"2025-04-02","color":"rose"}}]"#
        )
        .unwrap();

        let events = load_events(file.path()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "A");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_events(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read events"));
    }
}
