//! User store.

use crate::db::error::DbError;
use crate::db::repository::{Result, SqliteRepository, UserRepository};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use vocab_core::registry::validate_batch;
use vocab_core::{User, VocabError};

impl UserRepository for SqliteRepository {
    fn create_user(&self, name: &str, intervals: &[i64]) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VocabError::InvalidParameter("user name must not be blank".to_string()).into());
        }
        validate_batch(intervals)?;

        let created_at = Utc::now();
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO users (name, created_at) VALUES (?1, ?2)",
            params![name, created_at],
        )
        .map_err(|err| DbError::from_integrity(err, &format!("user '{name}'"), "user"))?;
        let id = tx.last_insert_rowid();

        for &interval in intervals {
            tx.execute(
                "INSERT INTO intervals (user_id, days) VALUES (?1, ?2)",
                params![id, interval],
            )
            .map_err(|err| {
                DbError::from_integrity(
                    err,
                    &format!("interval {interval} for user {id}"),
                    &format!("user {id}"),
                )
            })?;
        }
        tx.commit()?;

        tracing::info!(user_id = id, intervals = intervals.len(), "created user");
        Ok(User {
            id,
            name: name.to_string(),
            created_at,
        })
    }

    fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .query_row(
                "SELECT id, name, created_at FROM users WHERE id = ?1",
                params![id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    fn delete_user(&self, id: i64) -> Result<bool> {
        let tx = self.conn.unchecked_transaction()?;
        let count = tx.execute("DELETE FROM users WHERE id = ?1", params![id])?;
        tx.commit()?;

        if count > 0 {
            tracing::info!(user_id = id, "deleted user with registry and items");
        }
        Ok(count > 0)
    }

    fn list_user_ids(&self) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare("SELECT id FROM users ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ids)
    }
}
