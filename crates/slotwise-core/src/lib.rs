//! # Slotwise Core Library
//!
//! This library provides the core logic for slotwise, a small scheduling
//! assistant that finds free meeting slots in a working day. All
//! operations are available via a standalone CLI binary, which is a thin
//! layer over this library.
//!
//! ## Architecture
//!
//! - **Slot search**: A fixed-step scan that returns the earliest slot of
//!   a requested duration inside a working window, avoiding busy
//!   intervals
//! - **Calendar sources**: A trait seam for event backends, with
//!   in-memory and JSON-export implementations
//! - **Planner**: Day-level workflows that resolve a local date to a
//!   working window and drive the scan over fetched events
//! - **Storage**: TOML-based configuration for hours, timezone, and
//!   search defaults
//!
//! ## Key Components
//!
//! - [`SlotFinder`]: The free-slot scan
//! - [`DayPlanner`]: Calendar-backed day planning
//! - [`CalendarSource`]: Trait for event backends
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod error;
pub mod interval;
pub mod planner;
pub mod slot;
pub mod storage;

pub use calendar::{CalendarEvent, CalendarSource, JsonCalendar, StaticCalendar};
pub use error::{CalendarError, ConfigError, CoreError, ValidationError};
pub use interval::{BusyList, TimeInterval, WorkingWindow};
pub use planner::DayPlanner;
pub use slot::{find_free_slot, OverlapRule, SlotFinder, SlotRequest, SlotResult, SlotSuggestion};
pub use storage::Config;
