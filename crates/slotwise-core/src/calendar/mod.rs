//! Calendar event sources.
//!
//! The planner never talks to a calendar service directly; it takes a
//! [`CalendarSource`] and asks it for the events of a day. Vendor-backed
//! implementations plug in behind the same trait. This crate ships two
//! sources: an in-memory one and a JSON-export reader.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::interval::{BusyList, TimeInterval};

/// A calendar event fetched from a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<String>,
        summary: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            start,
            end,
        }
    }
}

/// Every calendar backend implements this trait. Sources are stateless
/// between calls; the busy list is fetched fresh per invocation and
/// nothing is cached here.
pub trait CalendarSource: Send + Sync {
    /// Events intersecting the `[start, end)` range.
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    /// Busy intervals for the range. Zero-length and inverted events are
    /// dropped; events crossing the range edge are kept as-is.
    fn busy_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<BusyList, CalendarError> {
        let events = self.events_between(start, end)?;
        let busy = events
            .into_iter()
            .filter_map(|e| TimeInterval::new(e.start, e.end).ok())
            .collect();
        Ok(busy)
    }
}

fn events_in_range(
    events: &[CalendarEvent],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|e| e.start < end && e.end > start)
        .cloned()
        .collect()
}

/// In-memory calendar source.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    events: Vec<CalendarEvent>,
}

impl StaticCalendar {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

impl CalendarSource for StaticCalendar {
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        Ok(events_in_range(&self.events, start, end))
    }
}

/// Calendar source backed by a JSON export file: an array of events with
/// RFC 3339 `start`/`end` timestamps.
#[derive(Debug, Clone)]
pub struct JsonCalendar {
    path: PathBuf,
    events: Vec<CalendarEvent>,
}

impl JsonCalendar {
    /// Load and validate an export file.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ReadFailed`] if the file cannot be read,
    /// [`CalendarError::Malformed`] if it does not parse as an event list,
    /// and [`CalendarError::InvalidEvent`] for an event with inverted or
    /// zero-length times.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CalendarError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| {
            CalendarError::ReadFailed {
                path: path.clone(),
                source,
            }
        })?;

        let events: Vec<CalendarEvent> = serde_json::from_str(&content)
            .map_err(|e| CalendarError::Malformed(e.to_string()))?;

        for event in &events {
            if event.start >= event.end {
                return Err(CalendarError::InvalidEvent {
                    id: event.id.clone(),
                    message: format!("start {} is not before end {}", event.start, event.end),
                });
            }
        }

        Ok(Self { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CalendarSource for JsonCalendar {
    fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        Ok(events_in_range(&self.events, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn static_source_filters_by_range() {
        let source = StaticCalendar::new(vec![
            CalendarEvent::new("1", "standup", at(9, 0), at(9, 30)),
            CalendarEvent::new("2", "lunch", at(12, 0), at(13, 0)),
            CalendarEvent::new("3", "retro", at(19, 0), at(20, 0)),
        ]);

        let events = source.events_between(at(9, 0), at(18, 0)).unwrap();
        assert_eq!(events.len(), 2);

        // Event crossing the range edge is included.
        let events = source.events_between(at(9, 15), at(12, 30)).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn busy_between_maps_events_to_intervals() {
        let source = StaticCalendar::new(vec![
            CalendarEvent::new("1", "standup", at(9, 0), at(9, 30)),
            // Zero-length events are dropped, not an error.
            CalendarEvent::new("2", "marker", at(10, 0), at(10, 0)),
        ]);

        let busy = source.busy_between(at(9, 0), at(18, 0)).unwrap();
        assert_eq!(busy.len(), 1);
        assert_eq!(busy[0].duration_minutes(), 30);
    }

    #[test]
    fn json_calendar_loads_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","summary":"standup",
                "start":"2025-06-02T09:00:00Z","end":"2025-06-02T09:30:00Z"}}]"#
        )
        .unwrap();

        let calendar = JsonCalendar::load(file.path()).unwrap();
        assert_eq!(calendar.len(), 1);

        let busy = calendar.busy_between(at(0, 0), at(23, 59)).unwrap();
        assert_eq!(busy[0].start(), at(9, 0));
    }

    #[test]
    fn json_calendar_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            JsonCalendar::load(file.path()),
            Err(CalendarError::Malformed(_))
        ));
    }

    #[test]
    fn json_calendar_rejects_inverted_event() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"bad","start":"2025-06-02T10:00:00Z","end":"2025-06-02T09:00:00Z"}}]"#
        )
        .unwrap();
        assert!(matches!(
            JsonCalendar::load(file.path()),
            Err(CalendarError::InvalidEvent { .. })
        ));
    }

    #[test]
    fn missing_file_is_read_failed() {
        assert!(matches!(
            JsonCalendar::load("/nonexistent/export.json"),
            Err(CalendarError::ReadFailed { .. })
        ));
    }
}
