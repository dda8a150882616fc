//! Interval registry store and the schedule cascade.

use crate::db::error::DbError;
use crate::db::repository::{
    interval_column, load_intervals, table, IntervalRepository, Result, SqliteRepository,
};
use rusqlite::params;
use std::collections::BTreeSet;
use vocab_core::registry::{plan_replace, validate_batch, validate_interval, ReplacePlan};
use vocab_core::types::{Direction, ItemKind};

fn insert_error(err: rusqlite::Error, user_id: i64, interval: i64) -> DbError {
    DbError::from_integrity(
        err,
        &format!("interval {interval} for user {user_id}"),
        &format!("user {user_id}"),
    )
}

impl IntervalRepository for SqliteRepository {
    fn add_interval(&self, user_id: i64, interval: i64) -> Result<()> {
        validate_interval(interval)?;
        self.conn
            .execute(
                "INSERT INTO intervals (user_id, days) VALUES (?1, ?2)",
                params![user_id, interval],
            )
            .map_err(|err| insert_error(err, user_id, interval))?;

        tracing::info!(user_id, interval, "registered interval");
        Ok(())
    }

    fn add_intervals(&self, user_id: i64, intervals: &[i64]) -> Result<()> {
        validate_batch(intervals)?;

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO intervals (user_id, days) VALUES (?1, ?2)")?;
            for &interval in intervals {
                stmt.execute(params![user_id, interval])
                    .map_err(|err| insert_error(err, user_id, interval))?;
            }
        }
        tx.commit()?;

        tracing::info!(user_id, count = intervals.len(), "registered interval batch");
        Ok(())
    }

    fn replace_interval(&self, user_id: i64, old: i64, new: i64) -> Result<()> {
        validate_interval(new)?;

        let tx = self.conn.unchecked_transaction()?;
        let registered = load_intervals(&tx, user_id)?;
        let plan = plan_replace(&registered, old, new)?;
        if plan.is_unchanged() {
            return Ok(());
        }

        let mut rewritten = 0;
        for kind in ItemKind::ALL {
            for direction in Direction::ALL {
                let column = interval_column(direction);
                let sql = format!(
                    "UPDATE {} SET {column} = ?1 WHERE user_id = ?2 AND {column} = ?3",
                    table(kind)
                );
                rewritten += tx.execute(&sql, params![new, user_id, old])?;
            }
        }

        match plan {
            ReplacePlan::Rename { from, to } => {
                tx.execute(
                    "UPDATE intervals SET days = ?1 WHERE user_id = ?2 AND days = ?3",
                    params![to, user_id, from],
                )?;
            }
            ReplacePlan::Merge { from, .. } => {
                tx.execute(
                    "DELETE FROM intervals WHERE user_id = ?1 AND days = ?2",
                    params![user_id, from],
                )?;
            }
            ReplacePlan::Unchanged => {}
        }

        tx.commit().map_err(|err| insert_error(err, user_id, new))?;

        tracing::info!(user_id, old, new, ?plan, rewritten, "replaced interval");
        Ok(())
    }

    fn find_intervals(&self, user_id: i64) -> Result<BTreeSet<i64>> {
        load_intervals(&self.conn, user_id)
    }

    fn remove_unused_intervals(&self, user_id: i64) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM intervals
             WHERE user_id = ?1
               AND days NOT IN (
                   SELECT foreign_to_native_interval FROM words WHERE user_id = ?1
                   UNION SELECT native_to_foreign_interval FROM words WHERE user_id = ?1
                   UNION SELECT foreign_to_native_interval FROM expressions WHERE user_id = ?1
                   UNION SELECT native_to_foreign_interval FROM expressions WHERE user_id = ?1
               )",
            params![user_id],
        )?;

        if removed > 0 {
            tracing::info!(user_id, removed, "removed unused intervals");
        }
        Ok(removed)
    }
}
