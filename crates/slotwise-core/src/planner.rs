//! Day planning over a calendar source.
//!
//! Composes the pieces for the "find me a slot today" workflows: resolve
//! the working window for a local date, fetch that day's busy intervals
//! from an injected [`CalendarSource`], and run the slot scan. The
//! planner holds no calendar state of its own; busy intervals are
//! fetched fresh on every call.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::calendar::CalendarSource;
use crate::error::{ConfigError, Result};
use crate::slot::{SlotRequest, SlotResult, SlotSuggestion};
use crate::storage::Config;

/// Planner for a single day's meetings.
pub struct DayPlanner<'a> {
    source: &'a dyn CalendarSource,
    config: Config,
}

impl<'a> DayPlanner<'a> {
    /// Create a planner over a calendar source with the given settings.
    pub fn new(source: &'a dyn CalendarSource, config: Config) -> Self {
        Self { source, config }
    }

    /// The timezone the planner's working hours are expressed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured timezone name is unknown.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.config.timezone()
    }

    /// Default slot request from the planner's settings.
    pub fn default_request(&self) -> SlotRequest {
        self.config.slot_request()
    }

    /// Find the earliest free slot of `duration_minutes` on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid settings or a failing calendar
    /// source. A full day is the `NotFound` value, not an error.
    pub fn plan_day(&self, date: NaiveDate, duration_minutes: u32) -> Result<SlotResult> {
        let window = self.config.working_window(date)?;
        let busy = self.source.busy_between(window.start(), window.end())?;
        let result = self
            .config
            .slot_finder()
            .find(&busy, duration_minutes, &window)?;
        Ok(result)
    }

    /// Propose a slot for a named task or appointment on `date`.
    ///
    /// Returns `None` when no slot is available.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`plan_day`](Self::plan_day).
    pub fn suggest(
        &self,
        title: &str,
        duration_minutes: u32,
        date: NaiveDate,
    ) -> Result<Option<SlotSuggestion>> {
        let suggestion = self
            .plan_day(date, duration_minutes)?
            .found()
            .map(|slot| SlotSuggestion::new(title, *slot));
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarEvent, StaticCalendar};
    use chrono::{DateTime, Utc};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    /// Local IST wall-clock time on the test day, as UTC.
    fn ist(h: u32, m: u32) -> DateTime<Utc> {
        date()
            .and_hms_opt(h, m, 0)
            .unwrap()
            .and_utc()
            - chrono::Duration::minutes(5 * 60 + 30)
    }

    #[test]
    fn empty_day_opens_at_window_start() {
        let source = StaticCalendar::default();
        let planner = DayPlanner::new(&source, Config::default());

        let result = planner.plan_day(date(), 60).unwrap();
        let slot = result.found().unwrap();
        assert_eq!(slot.start(), ist(9, 0));
        assert_eq!(slot.end(), ist(10, 0));
    }

    #[test]
    fn busy_morning_pushes_slot_back() {
        let source = StaticCalendar::new(vec![CalendarEvent::new(
            "1",
            "standup",
            ist(9, 0),
            ist(10, 0),
        )]);
        let planner = DayPlanner::new(&source, Config::default());

        let result = planner.plan_day(date(), 60).unwrap();
        assert_eq!(result.found().unwrap().start(), ist(10, 0));
    }

    #[test]
    fn packed_day_returns_not_found() {
        let source = StaticCalendar::new(vec![CalendarEvent::new(
            "1",
            "offsite",
            ist(9, 0),
            ist(18, 0),
        )]);
        let planner = DayPlanner::new(&source, Config::default());

        let result = planner.plan_day(date(), 60).unwrap();
        assert_eq!(result, SlotResult::NotFound);
    }

    #[test]
    fn events_outside_window_are_ignored() {
        let source = StaticCalendar::new(vec![CalendarEvent::new(
            "1",
            "late dinner",
            ist(20, 0),
            ist(21, 0),
        )]);
        let planner = DayPlanner::new(&source, Config::default());

        let result = planner.plan_day(date(), 60).unwrap();
        assert_eq!(result.found().unwrap().start(), ist(9, 0));
    }

    #[test]
    fn suggestion_carries_title_and_local_label() {
        let source = StaticCalendar::default();
        let planner = DayPlanner::new(&source, Config::default());

        let suggestion = planner
            .suggest("Doctor Appointment", 30, date())
            .unwrap()
            .unwrap();
        assert_eq!(suggestion.title, "Doctor Appointment");

        let tz = planner.timezone().unwrap();
        assert_eq!(suggestion.local_label(tz), "09:00 AM - 09:30 AM");
    }

    #[test]
    fn suggestion_is_none_when_day_is_full() {
        let source = StaticCalendar::new(vec![CalendarEvent::new(
            "1",
            "offsite",
            ist(9, 0),
            ist(18, 0),
        )]);
        let planner = DayPlanner::new(&source, Config::default());

        assert!(planner.suggest("Review", 60, date()).unwrap().is_none());
    }
}
