//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext over an in-memory database and a fixed clock
//! - Helpers for arranging items at given intervals and dates

#![allow(dead_code)]

pub mod fixtures;

use chrono::NaiveDate;
use rusqlite::params;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

use vocab_core::algorithm::{ForgottenPolicy, IntervalLadder};
use vocab_core::clock::FixedClock;
use vocab_core::types::{Direction, Item, ItemKind};
use vocab_trainer::db::{ItemRepository, SqliteRepository, UserRepository};
use vocab_trainer::services::StudyService;

/// Test context containing an isolated database and a pinned clock.
pub struct TestContext {
    pub repo: SqliteRepository,
    pub clock: FixedClock,
    pub algorithm: IntervalLadder,
}

impl TestContext {
    /// Create a new context dated [`fixtures::today`].
    pub fn new() -> Self {
        Self::with_policy(ForgottenPolicy::default())
    }

    pub fn with_policy(policy: ForgottenPolicy) -> Self {
        let repo = SqliteRepository::open_in_memory().expect("Failed to open test database");
        Self {
            repo,
            clock: FixedClock(fixtures::today()),
            algorithm: IntervalLadder::new(policy),
        }
    }

    pub fn study(&self) -> StudyService<'_> {
        StudyService::new(&self.repo, &self.clock, &self.algorithm)
    }

    /// Create a user with the given registry and return its ID.
    pub fn create_user(&self, name: &str, intervals: &[i64]) -> i64 {
        self.repo
            .create_user(name, intervals)
            .expect("Failed to create test user")
            .id
    }

    pub fn create_item(&self, kind: ItemKind, user_id: i64, value: &str) -> Item {
        self.study()
            .add_item(kind, user_id, value, None)
            .expect("Failed to create test item")
    }

    /// Create an item and move its schedule in `direction` to `interval`, last repeated on `last_repeat`.
    pub fn create_item_at(
        &self,
        kind: ItemKind,
        user_id: i64,
        value: &str,
        direction: Direction,
        interval: i64,
        last_repeat: NaiveDate,
    ) -> Item {
        let item = self.create_item(kind, user_id, value);
        self.place(kind, item.id, direction, interval, last_repeat);
        self.item(kind, item.id)
    }

    /// Overwrite one schedule directly; `interval` must be registered for the owner.
    pub fn place(
        &self,
        kind: ItemKind,
        id: i64,
        direction: Direction,
        interval: i64,
        last_repeat: NaiveDate,
    ) {
        let (interval_column, last_repeat_column) = match direction {
            Direction::ForeignToNative => {
                ("foreign_to_native_interval", "foreign_to_native_last_repeat")
            }
            Direction::NativeToForeign => {
                ("native_to_foreign_interval", "native_to_foreign_last_repeat")
            }
        };
        let sql = format!(
            "UPDATE {} SET {interval_column} = ?1, {last_repeat_column} = ?2 WHERE id = ?3",
            table(kind)
        );
        self.repo
            .connection()
            .execute(&sql, params![interval, last_repeat, id])
            .expect("Failed to place item schedule");
    }

    pub fn item(&self, kind: ItemKind, id: i64) -> Item {
        self.repo
            .get_item(kind, id)
            .expect("Failed to load item")
            .expect("Item should exist")
    }

    /// Both schedule intervals of an item: (foreign→native, native→foreign).
    pub fn intervals_of(&self, kind: ItemKind, id: i64) -> (i64, i64) {
        let item = self.item(kind, id);
        (item.foreign_to_native.interval, item.native_to_foreign.interval)
    }

    pub fn count_rows(&self, table: &str, user_id: i64) -> i64 {
        self.repo
            .connection()
            .query_row(
                &format!("SELECT COUNT(*) FROM {table} WHERE user_id = ?1"),
                params![user_id],
                |row| row.get(0),
            )
            .expect("Failed to count rows")
    }
}

pub fn table(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Word => "words",
        ItemKind::Expression => "expressions",
    }
}

/// Log sink shared between a test and its subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with an INFO-level subscriber and return everything it logged.
pub fn capture_info_logs<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().expect("log buffer poisoned").clone();
    String::from_utf8(bytes).expect("logs are UTF-8")
}
