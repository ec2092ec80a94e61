//! Earliest-free-slot scan over a working window.
//!
//! Candidate start times advance from the window start in fixed steps;
//! the first candidate whose slot conflicts with no busy interval wins.
//! The scan is a pure function of its inputs and performs no I/O.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::interval::{TimeInterval, WorkingWindow};

/// How candidate slots are tested against busy intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapRule {
    /// General half-open overlap test: a candidate conflicts with a busy
    /// interval when the two ranges share any instant.
    #[default]
    Strict,
    /// Endpoint-only test: a candidate conflicts when its start falls
    /// inside a busy interval or its end lands inside one. Misses busy
    /// intervals strictly contained in the candidate. Kept selectable for
    /// callers that rely on the lenient behavior.
    Legacy,
}

/// Requested slot parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// Length of the slot to find, in minutes.
    pub duration_minutes: u32,
    /// Scan granularity, in minutes.
    pub step_minutes: u32,
}

impl Default for SlotRequest {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            step_minutes: 15,
        }
    }
}

/// Outcome of a slot search.
///
/// `NotFound` is an ordinary result, not an error: it means the day is
/// full under the current constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SlotResult {
    Found { slot: TimeInterval },
    NotFound,
}

impl SlotResult {
    pub fn found(&self) -> Option<&TimeInterval> {
        match self {
            Self::Found { slot } => Some(slot),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Finder for the earliest open slot in a working window.
#[derive(Debug, Clone, Copy)]
pub struct SlotFinder {
    /// Scan granularity in minutes.
    step_minutes: u32,
    rule: OverlapRule,
}

impl SlotFinder {
    /// Create a new finder with default settings (15 min step, strict rule).
    pub fn new() -> Self {
        Self {
            step_minutes: 15,
            rule: OverlapRule::default(),
        }
    }

    /// Create a finder from a request's scan step.
    pub fn for_request(request: &SlotRequest) -> Self {
        Self::new().with_step(request.step_minutes)
    }

    /// Set the scan step.
    pub fn with_step(mut self, minutes: u32) -> Self {
        self.step_minutes = minutes;
        self
    }

    /// Set the overlap rule.
    pub fn with_rule(mut self, rule: OverlapRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    pub fn rule(&self) -> OverlapRule {
        self.rule
    }

    /// Find the earliest slot of `duration_minutes` inside `window` that
    /// conflicts with no interval in `busy`.
    ///
    /// Always returns the earliest-starting valid slot under the scan
    /// order; identical inputs produce identical output.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] if the duration or the
    /// scan step is zero.
    pub fn find(
        &self,
        busy: &[TimeInterval],
        duration_minutes: u32,
        window: &WorkingWindow,
    ) -> Result<SlotResult, ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_minutes".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.step_minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "step_minutes".to_string(),
                message: "must be positive".to_string(),
            });
        }

        let duration = Duration::minutes(duration_minutes as i64);
        let step = Duration::minutes(self.step_minutes as i64);

        let mut candidate = window.start();
        while candidate + duration <= window.end() {
            let candidate_end = candidate + duration;

            let conflict = busy.iter().any(|b| match self.rule {
                OverlapRule::Strict => candidate < b.end() && b.start() < candidate_end,
                OverlapRule::Legacy => {
                    (b.start() <= candidate && candidate < b.end())
                        || (b.start() < candidate_end && candidate_end <= b.end())
                }
            });

            if !conflict {
                let slot = TimeInterval::new(candidate, candidate_end)?;
                return Ok(SlotResult::Found { slot });
            }

            candidate += step;
        }

        Ok(SlotResult::NotFound)
    }
}

impl Default for SlotFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to find a slot with the default (strict) rule.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] if the duration or step is zero.
pub fn find_free_slot(
    busy: &[TimeInterval],
    duration_minutes: u32,
    window: &WorkingWindow,
    step_minutes: u32,
) -> Result<SlotResult, ValidationError> {
    SlotFinder::new()
        .with_step(step_minutes)
        .find(busy, duration_minutes, window)
}
