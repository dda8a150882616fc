//! Test fixtures and factory functions for creating test data.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// The date every test context is pinned to.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

/// `today()` shifted by `offset` days.
pub fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

pub fn registry(values: &[i64]) -> BTreeSet<i64> {
    values.iter().copied().collect()
}

/// Sample dictionary used by lookup tests.
pub const DICTIONARY: &[&str] = &["broom", "dog", "fog", "frog", "frogs", "grog"];
