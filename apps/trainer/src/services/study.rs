//! Study session operations bound to a clock and a repetition algorithm.

use crate::db::{DbError, ItemRepository, SqliteRepository};
use chrono::NaiveDate;
use serde::Serialize;
use vocab_core::algorithm::RepetitionAlgorithm;
use vocab_core::clock::Clock;
use vocab_core::types::{Direction, Item, ItemKind, Outcome, Page, RepeatSchedule, SimilarItem};

type Result<T> = std::result::Result<T, DbError>;

/// Due words and expressions for one direction.
#[derive(Debug, Clone, Serialize)]
pub struct RepetitionQueue {
    pub direction: Direction,
    pub words: Vec<Item>,
    pub expressions: Vec<Item>,
    pub words_due: usize,
    pub expressions_due: usize,
}

pub struct StudyService<'a> {
    repo: &'a SqliteRepository,
    clock: &'a dyn Clock,
    algorithm: &'a dyn RepetitionAlgorithm,
}

impl<'a> StudyService<'a> {
    pub fn new(
        repo: &'a SqliteRepository,
        clock: &'a dyn Clock,
        algorithm: &'a dyn RepetitionAlgorithm,
    ) -> Self {
        Self {
            repo,
            clock,
            algorithm,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Add a word or expression scheduled from today at the shortest interval.
    pub fn add_item(
        &self,
        kind: ItemKind,
        user_id: i64,
        value: &str,
        note: Option<&str>,
    ) -> Result<Item> {
        self.repo.create_item(kind, user_id, value, note, self.today())
    }

    /// Record a repetition and return the item's new schedule for `direction`.
    pub fn repeat(
        &self,
        kind: ItemKind,
        id: i64,
        direction: Direction,
        remembered: bool,
    ) -> Result<RepeatSchedule> {
        let result = self.repo.record_repetition(
            kind,
            id,
            direction,
            Outcome::from_remembered(remembered),
            self.algorithm,
            self.today(),
        )?;
        Ok(result.schedule)
    }

    pub fn due_items(
        &self,
        kind: ItemKind,
        user_id: i64,
        direction: Direction,
        page: Page,
    ) -> Result<Vec<Item>> {
        self.repo
            .find_due_items(kind, user_id, direction, self.today(), page)
    }

    pub fn count_due(&self, kind: ItemKind, user_id: i64, direction: Direction) -> Result<usize> {
        self.repo.count_due_items(kind, user_id, direction, self.today())
    }

    /// Build the repetition queue for a user, one page per item kind.
    pub fn queue(&self, user_id: i64, direction: Direction, page: Page) -> Result<RepetitionQueue> {
        Ok(RepetitionQueue {
            direction,
            words: self.due_items(ItemKind::Word, user_id, direction, page)?,
            expressions: self.due_items(ItemKind::Expression, user_id, direction, page)?,
            words_due: self.count_due(ItemKind::Word, user_id, direction)?,
            expressions_due: self.count_due(ItemKind::Expression, user_id, direction)?,
        })
    }

    /// Items spelled within `max_distance` edits of `query`, closest first.
    pub fn lookup(
        &self,
        kind: ItemKind,
        user_id: i64,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Result<Vec<SimilarItem>> {
        self.repo
            .find_similar_items(kind, user_id, query.trim(), max_distance, limit)
    }
}
