//! Time intervals and working windows.
//!
//! All instants are timezone-aware UTC timestamps. Local wall-clock
//! bounds only appear at construction, when a working window is resolved
//! for a specific day in an IANA timezone.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A half-open time range `[start, end)`.
///
/// The constructor enforces `start < end`, so every value of this type
/// is a non-empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntervalSpan")]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Raw mirror of [`TimeInterval`] used to validate deserialized input.
#[derive(Debug, Clone, Copy, Deserialize)]
struct IntervalSpan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<IntervalSpan> for TimeInterval {
    type Error = ValidationError;

    fn try_from(span: IntervalSpan) -> Result<Self, Self::Error> {
        TimeInterval::new(span.start, span.end)
    }
}

impl TimeInterval {
    /// Create a new interval.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether an instant falls inside the interval (`start <= t < end`).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Check if this interval overlaps with another (half-open rule).
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Busy intervals for a day. Order-irrelevant; overlaps are allowed and
/// are not deduplicated.
pub type BusyList = Vec<TimeInterval>;

/// The daily bounds during which meetings may be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow(TimeInterval);

impl WorkingWindow {
    /// Create a window from explicit UTC bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        Ok(Self(TimeInterval::new(start, end)?))
    }

    /// Resolve a window for one local day.
    ///
    /// `open` and `close` are wall-clock times in `tz` on `date`;
    /// both are converted to UTC. Times that are skipped or ambiguous on
    /// a DST transition day are rejected rather than guessed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] for an unresolvable local
    /// time, or [`ValidationError::InvalidTimeRange`] if `open >= close`.
    pub fn for_local_day(
        date: NaiveDate,
        tz: Tz,
        open: NaiveTime,
        close: NaiveTime,
    ) -> Result<Self, ValidationError> {
        let start = resolve_local(date, open, tz, "open")?;
        let end = resolve_local(date, close, tz, "close")?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.0.start()
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.0.end()
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.0
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        self.0.duration_minutes()
    }
}

fn resolve_local(
    date: NaiveDate,
    time: NaiveTime,
    tz: Tz,
    field: &str,
) -> Result<DateTime<Utc>, ValidationError> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(_, _) => Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("{time} on {date} is ambiguous in {tz}"),
        }),
        LocalResult::None => Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("{time} on {date} does not exist in {tz}"),
        }),
    }
}
