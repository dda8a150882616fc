//! Repetition scheduling over a user's interval registry.

pub mod ladder;

use crate::types::{Outcome, RepeatSchedule};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub use ladder::{ForgottenPolicy, IntervalLadder};

/// Result of scheduling an item after a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingResult {
    pub previous: RepeatSchedule,
    pub schedule: RepeatSchedule,
}

impl SchedulingResult {
    pub fn next_repeat_date(&self) -> NaiveDate {
        self.schedule.next_repeat_date()
    }
}

/// Trait for repetition algorithms.
pub trait RepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the schedule after a repetition on `today`.
    ///
    /// `registered` is the owner's interval registry; the returned interval is
    /// always one of its members.
    fn schedule(
        &self,
        state: &RepeatSchedule,
        outcome: Outcome,
        registered: &BTreeSet<i64>,
        today: NaiveDate,
    ) -> SchedulingResult;
}
