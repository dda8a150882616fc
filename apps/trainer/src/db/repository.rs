//! Repository pattern for database access.

use crate::db::error::DbError;
use crate::db::{functions, schema};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::path::Path;
use vocab_core::algorithm::{RepetitionAlgorithm, SchedulingResult};
use vocab_core::types::{Direction, Item, ItemKind, Outcome, Page, RepeatSchedule, SimilarItem, User};

pub type Result<T> = std::result::Result<T, DbError>;

/// Repository for user operations.
pub trait UserRepository {
    /// Create a user and register `intervals` for it in one transaction.
    fn create_user(&self, name: &str, intervals: &[i64]) -> Result<User>;
    fn get_user(&self, id: i64) -> Result<Option<User>>;
    /// Delete a user together with its registry and items.
    fn delete_user(&self, id: i64) -> Result<bool>;
    fn list_user_ids(&self) -> Result<Vec<i64>>;
}

/// Repository for a user's interval registry.
pub trait IntervalRepository {
    fn add_interval(&self, user_id: i64, interval: i64) -> Result<()>;
    /// Register a batch; nothing is persisted unless every member is accepted.
    fn add_intervals(&self, user_id: i64, intervals: &[i64]) -> Result<()>;
    /// Replace `old` with `new` and repoint every schedule that used `old`.
    fn replace_interval(&self, user_id: i64, old: i64, new: i64) -> Result<()>;
    fn find_intervals(&self, user_id: i64) -> Result<BTreeSet<i64>>;
    /// Drop registered intervals no schedule refers to; returns how many were removed.
    fn remove_unused_intervals(&self, user_id: i64) -> Result<usize>;
}

/// Repository for words and expressions.
pub trait ItemRepository {
    fn create_item(
        &self,
        kind: ItemKind,
        user_id: i64,
        value: &str,
        note: Option<&str>,
        today: NaiveDate,
    ) -> Result<Item>;
    fn get_item(&self, kind: ItemKind, id: i64) -> Result<Option<Item>>;
    fn delete_item(&self, kind: ItemKind, id: i64) -> Result<bool>;
    fn find_due_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        direction: Direction,
        today: NaiveDate,
        page: Page,
    ) -> Result<Vec<Item>>;
    fn count_due_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        direction: Direction,
        today: NaiveDate,
    ) -> Result<usize>;
    fn find_similar_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Result<Vec<SimilarItem>>;
    fn record_repetition(
        &self,
        kind: ItemKind,
        id: i64,
        direction: Direction,
        outcome: Outcome,
        algorithm: &dyn RepetitionAlgorithm,
        today: NaiveDate,
    ) -> Result<SchedulingResult>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    pub(crate) conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Underlying connection, for maintenance and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        functions::register(&self.conn)?;

        let version: i32 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version > schema::SCHEMA_VERSION {
            return Err(DbError::InvalidData(format!(
                "database schema version {version} is newer than supported {}",
                schema::SCHEMA_VERSION
            )));
        }

        self.conn.execute_batch(schema::SCHEMA)?;
        self.conn
            .pragma_update(None, "user_version", schema::SCHEMA_VERSION)?;
        Ok(())
    }
}

// === Shared helpers ===

pub(crate) const ITEM_COLUMNS: &str = "id, user_id, value, note, \
    foreign_to_native_interval, foreign_to_native_last_repeat, \
    native_to_foreign_interval, native_to_foreign_last_repeat";

pub(crate) fn table(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Word => "words",
        ItemKind::Expression => "expressions",
    }
}

pub(crate) fn interval_column(direction: Direction) -> &'static str {
    match direction {
        Direction::ForeignToNative => "foreign_to_native_interval",
        Direction::NativeToForeign => "native_to_foreign_interval",
    }
}

pub(crate) fn last_repeat_column(direction: Direction) -> &'static str {
    match direction {
        Direction::ForeignToNative => "foreign_to_native_last_repeat",
        Direction::NativeToForeign => "native_to_foreign_last_repeat",
    }
}

/// Map a row selected with [`ITEM_COLUMNS`].
pub(crate) fn row_to_item(kind: ItemKind, row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        kind,
        user_id: row.get(1)?,
        value: row.get(2)?,
        note: row.get(3)?,
        foreign_to_native: RepeatSchedule::new(row.get(4)?, row.get(5)?),
        native_to_foreign: RepeatSchedule::new(row.get(6)?, row.get(7)?),
    })
}

pub(crate) fn load_intervals(conn: &Connection, user_id: i64) -> Result<BTreeSet<i64>> {
    let mut stmt = conn.prepare("SELECT days FROM intervals WHERE user_id = ?1")?;
    let intervals = stmt
        .query_map(params![user_id], |row| row.get(0))?
        .collect::<rusqlite::Result<BTreeSet<i64>>>()?;
    Ok(intervals)
}

pub(crate) fn user_exists(conn: &Connection, user_id: i64) -> Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM users WHERE id = ?1", params![user_id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}
