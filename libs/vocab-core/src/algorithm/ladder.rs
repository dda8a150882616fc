//! Interval ladder: items climb the user's registered intervals one rung at a time.

use super::{RepetitionAlgorithm, SchedulingResult};
use crate::registry::{next_interval, shortest_interval};
use crate::types::{Outcome, RepeatSchedule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a forgotten repetition does to the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForgottenPolicy {
    /// Drop back to the shortest registered interval.
    #[default]
    ResetToShortest,
    /// Keep the interval; only the repeat date moves.
    KeepInterval,
}

impl ForgottenPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResetToShortest => "reset",
            Self::KeepInterval => "keep",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reset" => Some(Self::ResetToShortest),
            "keep" => Some(Self::KeepInterval),
            _ => None,
        }
    }
}

/// Promotes remembered items to the next larger registered interval.
///
/// An item already at the largest registered interval stays there.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalLadder {
    pub on_forgotten: ForgottenPolicy,
}

impl IntervalLadder {
    pub fn new(on_forgotten: ForgottenPolicy) -> Self {
        Self { on_forgotten }
    }
}

impl RepetitionAlgorithm for IntervalLadder {
    fn name(&self) -> &'static str {
        "ladder"
    }

    fn schedule(
        &self,
        state: &RepeatSchedule,
        outcome: Outcome,
        registered: &BTreeSet<i64>,
        today: NaiveDate,
    ) -> SchedulingResult {
        let interval = match (outcome, self.on_forgotten) {
            (Outcome::Remembered, _) => next_interval(registered, state.interval),
            (Outcome::Forgotten, ForgottenPolicy::ResetToShortest) => {
                shortest_interval(registered)
            }
            (Outcome::Forgotten, ForgottenPolicy::KeepInterval) => None,
        }
        .unwrap_or(state.interval);

        SchedulingResult {
            previous: *state,
            schedule: RepeatSchedule::new(interval, today),
        }
    }
}
