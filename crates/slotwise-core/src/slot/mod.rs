//! Free-slot search.
//!
//! This module provides:
//! - The fixed-step scan that finds the earliest open slot in a working
//!   window
//! - Slot request/result types
//! - Human-readable slot suggestions

mod finder;
mod suggestion;

pub use finder::{find_free_slot, OverlapRule, SlotFinder, SlotRequest, SlotResult};
pub use suggestion::SlotSuggestion;
