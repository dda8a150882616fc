//! Word and expression store.

use crate::db::error::DbError;
use crate::db::functions::EDIT_DISTANCE;
use crate::db::repository::{
    interval_column, last_repeat_column, load_intervals, row_to_item, table, user_exists,
    ItemRepository, Result, SqliteRepository, ITEM_COLUMNS,
};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use vocab_core::algorithm::{RepetitionAlgorithm, SchedulingResult};
use vocab_core::registry::shortest_interval;
use vocab_core::types::{Direction, Item, ItemKind, Outcome, Page, RepeatSchedule, SimilarItem};
use vocab_core::VocabError;

impl ItemRepository for SqliteRepository {
    fn create_item(
        &self,
        kind: ItemKind,
        user_id: i64,
        value: &str,
        note: Option<&str>,
        today: NaiveDate,
    ) -> Result<Item> {
        let value = value.trim();
        if value.is_empty() {
            return Err(VocabError::InvalidParameter(format!(
                "{} value must not be blank",
                kind.as_str()
            ))
            .into());
        }

        let tx = self.conn.unchecked_transaction()?;
        let registered = load_intervals(&tx, user_id)?;
        let Some(initial) = shortest_interval(&registered) else {
            let err = if user_exists(&tx, user_id)? {
                VocabError::InvalidParameter(format!("user {user_id} has no registered intervals"))
            } else {
                VocabError::UnknownEntity(format!("user {user_id}"))
            };
            return Err(err.into());
        };

        let sql = format!(
            "INSERT INTO {} (user_id, value, note,
                foreign_to_native_interval, foreign_to_native_last_repeat,
                native_to_foreign_interval, native_to_foreign_last_repeat)
             VALUES (?1, ?2, ?3, ?4, ?5, ?4, ?5)",
            table(kind)
        );
        tx.execute(&sql, params![user_id, value, note, initial, today])
            .map_err(|err| {
                DbError::from_integrity(
                    err,
                    &format!("{} '{value}' for user {user_id}", kind.as_str()),
                    &format!("user {user_id}"),
                )
            })?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::debug!(user_id, id, kind = kind.as_str(), "created item");
        let schedule = RepeatSchedule::new(initial, today);
        Ok(Item {
            id,
            kind,
            user_id,
            value: value.to_string(),
            note: note.map(str::to_string),
            foreign_to_native: schedule,
            native_to_foreign: schedule,
        })
    }

    fn get_item(&self, kind: ItemKind, id: i64) -> Result<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM {} WHERE id = ?1", table(kind));
        self.conn
            .query_row(&sql, params![id], |row| row_to_item(kind, row))
            .optional()
            .map_err(Into::into)
    }

    fn delete_item(&self, kind: ItemKind, id: i64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", table(kind));
        let count = self.conn.execute(&sql, params![id])?;
        Ok(count > 0)
    }

    fn find_due_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        direction: Direction,
        today: NaiveDate,
        page: Page,
    ) -> Result<Vec<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM {}
             WHERE user_id = ?1 AND date({}, '+' || {} || ' days') <= ?2
             ORDER BY value ASC, id ASC
             LIMIT ?3 OFFSET ?4",
            table(kind),
            last_repeat_column(direction),
            interval_column(direction),
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let items = stmt
            .query_map(params![user_id, today, page.limit, page.offset], |row| {
                row_to_item(kind, row)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(
            user_id,
            kind = kind.as_str(),
            direction = direction.as_str(),
            count = items.len(),
            "loaded due items"
        );
        Ok(items)
    }

    fn count_due_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        direction: Direction,
        today: NaiveDate,
    ) -> Result<usize> {
        let sql = format!(
            "SELECT COUNT(*) FROM {}
             WHERE user_id = ?1 AND date({}, '+' || {} || ' days') <= ?2",
            table(kind),
            last_repeat_column(direction),
            interval_column(direction),
        );
        let count: i64 = self
            .conn
            .query_row(&sql, params![user_id, today], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn find_similar_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Result<Vec<SimilarItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS}, distance FROM (
                 SELECT {ITEM_COLUMNS}, {EDIT_DISTANCE}(value, ?2, ?3) AS distance
                 FROM {} WHERE user_id = ?1
             )
             WHERE distance >= 0
             ORDER BY distance ASC, value ASC
             LIMIT ?4",
            table(kind)
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let items = stmt
            .query_map(params![user_id, query, max_distance, limit], |row| {
                Ok(SimilarItem {
                    item: row_to_item(kind, row)?,
                    distance: row.get::<_, i64>(8)? as usize,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn record_repetition(
        &self,
        kind: ItemKind,
        id: i64,
        direction: Direction,
        outcome: Outcome,
        algorithm: &dyn RepetitionAlgorithm,
        today: NaiveDate,
    ) -> Result<SchedulingResult> {
        let tx = self.conn.unchecked_transaction()?;

        let sql = format!("SELECT {ITEM_COLUMNS} FROM {} WHERE id = ?1", table(kind));
        let item = tx
            .query_row(&sql, params![id], |row| row_to_item(kind, row))
            .optional()?
            .ok_or_else(|| VocabError::UnknownEntity(format!("{} {id}", kind.as_str())))?;

        let registered = load_intervals(&tx, item.user_id)?;
        let result = algorithm.schedule(item.schedule(direction), outcome, &registered, today);

        let sql = format!(
            "UPDATE {} SET {} = ?1, {} = ?2 WHERE id = ?3",
            table(kind),
            interval_column(direction),
            last_repeat_column(direction),
        );
        tx.execute(
            &sql,
            params![result.schedule.interval, result.schedule.last_repeat_date, id],
        )?;
        tx.commit()?;

        tracing::debug!(
            id,
            kind = kind.as_str(),
            direction = direction.as_str(),
            ?outcome,
            from = result.previous.interval,
            to = result.schedule.interval,
            "recorded repetition"
        );
        Ok(result)
    }
}
