//! Registry housekeeping across all users.

use crate::db::{DbError, IntervalRepository, SqliteRepository, UserRepository};

/// Outcome of a pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub users: usize,
    pub removed: usize,
}

/// Remove unreferenced intervals from every user's registry.
///
/// Each user is pruned in its own statement, so a failure leaves earlier
/// users pruned and later ones untouched.
pub fn prune_unused_intervals(repo: &SqliteRepository) -> Result<PruneReport, DbError> {
    let mut report = PruneReport::default();
    for user_id in repo.list_user_ids()? {
        report.removed += repo.remove_unused_intervals(user_id)?;
        report.users += 1;
    }

    tracing::info!(users = report.users, removed = report.removed, "pruned unused intervals");
    Ok(report)
}
