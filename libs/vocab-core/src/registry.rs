//! Rules for a user's interval registry.
//!
//! Persistence lives elsewhere; this module decides what an edit means so the
//! store only has to execute it inside a transaction.

use std::collections::BTreeSet;

use crate::error::{Result, VocabError};

/// Shortest allowed interval, in days.
pub const MIN_INTERVAL: i64 = 1;

/// Reject intervals shorter than [`MIN_INTERVAL`].
pub fn validate_interval(interval: i64) -> Result<i64> {
    if interval < MIN_INTERVAL {
        return Err(VocabError::InvalidParameter(format!(
            "interval must be >= {MIN_INTERVAL}, got {interval}"
        )));
    }
    Ok(interval)
}

/// Validate every interval of a batch before anything is written.
///
/// Duplicates are left to the store's unique constraint.
pub fn validate_batch(intervals: &[i64]) -> Result<()> {
    intervals
        .iter()
        .try_for_each(|&interval| validate_interval(interval).map(drop))
}

/// What `replace(old, new)` does to the registry once schedules are repointed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacePlan {
    /// `old == new`: nothing is touched.
    Unchanged,
    /// `new` is not registered yet: the `old` entry is renamed in place.
    Rename { from: i64, to: i64 },
    /// `new` is already registered: the `old` entry is dropped.
    Merge { from: i64, into: i64 },
}

impl ReplacePlan {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Decide how to replace `old` with `new` in `registered`.
pub fn plan_replace(registered: &BTreeSet<i64>, old: i64, new: i64) -> Result<ReplacePlan> {
    validate_interval(new)?;
    if !registered.contains(&old) {
        return Err(VocabError::InvalidParameter(format!(
            "interval {old} is not registered"
        )));
    }

    Ok(if old == new {
        ReplacePlan::Unchanged
    } else if registered.contains(&new) {
        ReplacePlan::Merge {
            from: old,
            into: new,
        }
    } else {
        ReplacePlan::Rename { from: old, to: new }
    })
}

/// Smallest registered interval strictly greater than `current`.
pub fn next_interval(registered: &BTreeSet<i64>, current: i64) -> Option<i64> {
    registered.range(current.saturating_add(1)..).next().copied()
}

/// Smallest registered interval, used for new items and reset schedules.
pub fn shortest_interval(registered: &BTreeSet<i64>) -> Option<i64> {
    registered.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(values: &[i64]) -> BTreeSet<i64> {
        values.iter().copied().collect()
    }

    #[test]
    fn validate_rejects_non_positive() {
        assert!(validate_interval(1).is_ok());
        assert!(matches!(validate_interval(0), Err(VocabError::InvalidParameter(_))));
        assert!(matches!(validate_interval(-3), Err(VocabError::InvalidParameter(_))));
    }

    #[test]
    fn validate_batch_fails_on_any_invalid_member() {
        assert!(validate_batch(&[]).is_ok());
        assert!(validate_batch(&[1, 3, 5]).is_ok());
        assert!(validate_batch(&[1, 0, 5]).is_err());
    }

    #[test]
    fn plan_rename_when_new_is_free() {
        let plan = plan_replace(&registry(&[1, 3, 5, 10]), 10, 30).unwrap();
        assert_eq!(plan, ReplacePlan::Rename { from: 10, to: 30 });
    }

    #[test]
    fn plan_merge_when_new_is_taken() {
        let plan = plan_replace(&registry(&[1, 3, 5, 10]), 10, 5).unwrap();
        assert_eq!(plan, ReplacePlan::Merge { from: 10, into: 5 });
    }

    #[test]
    fn plan_unchanged_for_same_value() {
        let plan = plan_replace(&registry(&[1, 3]), 3, 3).unwrap();
        assert!(plan.is_unchanged());
    }

    #[test]
    fn plan_rejects_unregistered_old_and_invalid_new() {
        let reg = registry(&[1, 3]);
        assert!(matches!(plan_replace(&reg, 4, 8), Err(VocabError::InvalidParameter(_))));
        assert!(matches!(plan_replace(&reg, 4, 4), Err(VocabError::InvalidParameter(_))));
        assert!(matches!(plan_replace(&reg, 3, 0), Err(VocabError::InvalidParameter(_))));
    }

    #[test]
    fn next_interval_is_strictly_greater() {
        let reg = registry(&[1, 3, 5, 11]);
        assert_eq!(next_interval(&reg, 3), Some(5));
        assert_eq!(next_interval(&reg, 4), Some(5));
        assert_eq!(next_interval(&reg, 11), None);
        assert_eq!(next_interval(&reg, i64::MAX), None);
    }

    #[test]
    fn shortest_interval_of_empty_registry() {
        assert_eq!(shortest_interval(&registry(&[])), None);
        assert_eq!(shortest_interval(&registry(&[7, 2, 9])), Some(2));
    }
}
