//! End-to-end planner tests over a JSON calendar export.

use std::io::Write;

use chrono::NaiveDate;
use slotwise_core::{Config, DayPlanner, JsonCalendar, SlotResult};

fn export_with(events: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp export");
    write!(file, "{events}").expect("write temp export");
    file
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn plan_day_over_json_export() {
    // Two meetings in IST (UTC+05:30): 09:00-10:00 and 10:30-11:00 local.
    let file = export_with(
        r#"[
            {"id": "1", "summary": "standup",
             "start": "2025-06-02T03:30:00Z", "end": "2025-06-02T04:30:00Z"},
            {"id": "2", "summary": "1:1",
             "start": "2025-06-02T05:00:00Z", "end": "2025-06-02T05:30:00Z"}
        ]"#,
    );

    let calendar = JsonCalendar::load(file.path()).unwrap();
    let planner = DayPlanner::new(&calendar, Config::default());

    // The 10:00-10:30 local gap is too small for an hour; the first fit
    // starts at 11:00 local = 05:30 UTC.
    let result = planner.plan_day(test_date(), 60).unwrap();
    let slot = result.found().unwrap();
    assert_eq!(slot.start().to_rfc3339(), "2025-06-02T05:30:00+00:00");

    // A half hour fits right after the standup, at 10:00 local.
    let result = planner.plan_day(test_date(), 30).unwrap();
    let slot = result.found().unwrap();
    assert_eq!(slot.start().to_rfc3339(), "2025-06-02T04:30:00+00:00");
}

#[test]
fn empty_export_yields_window_start() {
    let file = export_with("[]");
    let calendar = JsonCalendar::load(file.path()).unwrap();
    let planner = DayPlanner::new(&calendar, Config::default());

    let slot = planner
        .plan_day(test_date(), 60)
        .unwrap()
        .found()
        .copied()
        .unwrap();
    // Window opens 09:00 IST = 03:30 UTC.
    assert_eq!(slot.start().to_rfc3339(), "2025-06-02T03:30:00+00:00");
}

#[test]
fn fully_booked_day_is_not_found() {
    let file = export_with(
        r#"[{"id": "1", "summary": "offsite",
             "start": "2025-06-02T03:30:00Z", "end": "2025-06-02T12:30:00Z"}]"#,
    );
    let calendar = JsonCalendar::load(file.path()).unwrap();
    let planner = DayPlanner::new(&calendar, Config::default());

    assert_eq!(
        planner.plan_day(test_date(), 15).unwrap(),
        SlotResult::NotFound
    );
}

#[test]
fn suggestion_formats_local_times() {
    let file = export_with("[]");
    let calendar = JsonCalendar::load(file.path()).unwrap();
    let planner = DayPlanner::new(&calendar, Config::default());

    let suggestion = planner
        .suggest("Doctor Appointment", 60, test_date())
        .unwrap()
        .expect("empty day has a slot");
    let tz = planner.timezone().unwrap();
    assert_eq!(suggestion.local_label(tz), "09:00 AM - 10:00 AM");
}

#[test]
fn custom_hours_change_the_window() {
    let file = export_with("[]");
    let calendar = JsonCalendar::load(file.path()).unwrap();

    let mut config = Config::default();
    config.hours.open = "10:00".to_string();
    config.hours.close = "12:00".to_string();
    config.hours.timezone = "UTC".to_string();
    let planner = DayPlanner::new(&calendar, config);

    let slot = planner
        .plan_day(test_date(), 120)
        .unwrap()
        .found()
        .copied()
        .unwrap();
    assert_eq!(slot.start().to_rfc3339(), "2025-06-02T10:00:00+00:00");
    assert_eq!(slot.end().to_rfc3339(), "2025-06-02T12:00:00+00:00");

    // Anything longer than the window cannot fit.
    let mut config = Config::default();
    config.hours.open = "10:00".to_string();
    config.hours.close = "12:00".to_string();
    config.hours.timezone = "UTC".to_string();
    let planner = DayPlanner::new(&calendar, config);
    assert_eq!(
        planner.plan_day(test_date(), 121).unwrap(),
        SlotResult::NotFound
    );
}
