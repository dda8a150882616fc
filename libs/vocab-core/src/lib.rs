//! Core vocabulary-trainer library.
//!
//! Provides:
//! - Bounded edit distance for approximate dictionary lookup
//! - Interval registry rules (validation, replace planning, promotion)
//! - Interval-ladder repetition algorithm
//! - Shared types (Item, RepeatSchedule, Direction, Outcome, etc.)
//! - Injectable clock

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod matching;
pub mod registry;
pub mod types;

pub use algorithm::{ForgottenPolicy, IntervalLadder, RepetitionAlgorithm, SchedulingResult};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, VocabError};
pub use matching::{bounded_distance, checked_distance, NO_MATCH};
pub use registry::{ReplacePlan, MIN_INTERVAL};
pub use types::{Direction, Item, ItemKind, Outcome, Page, RepeatSchedule, SimilarItem, User};
