//! Core types for the vocabulary trainer.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of repeatable dictionary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Word,
    Expression,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Word, ItemKind::Expression];

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Expression => "expression",
        }
    }
}

/// Learning direction; every item is scheduled independently in each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ForeignToNative,
    NativeToForeign,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::ForeignToNative, Direction::NativeToForeign];

    /// Get the direction name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForeignToNative => "foreign_to_native",
            Self::NativeToForeign => "native_to_foreign",
        }
    }
}

/// Result of a repetition event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Remembered,
    Forgotten,
}

impl Outcome {
    pub fn from_remembered(remembered: bool) -> Self {
        if remembered {
            Self::Remembered
        } else {
            Self::Forgotten
        }
    }
}

/// Scheduling state of one item in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatSchedule {
    /// Days between repetitions; always a member of the owner's interval registry.
    pub interval: i64,
    pub last_repeat_date: NaiveDate,
}

impl RepeatSchedule {
    pub fn new(interval: i64, last_repeat_date: NaiveDate) -> Self {
        Self {
            interval,
            last_repeat_date,
        }
    }

    /// `last_repeat_date + interval` days, saturating at the calendar maximum.
    pub fn next_repeat_date(&self) -> NaiveDate {
        u64::try_from(self.interval)
            .ok()
            .and_then(|days| self.last_repeat_date.checked_add_days(Days::new(days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether the item should be repeated on `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_repeat_date() <= today
    }
}

/// Registered user owning an interval registry and dictionary items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Word or expression with its two schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub kind: ItemKind,
    pub user_id: i64,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub foreign_to_native: RepeatSchedule,
    pub native_to_foreign: RepeatSchedule,
}

impl Item {
    /// Schedule for the given direction.
    pub fn schedule(&self, direction: Direction) -> &RepeatSchedule {
        match direction {
            Direction::ForeignToNative => &self.foreign_to_native,
            Direction::NativeToForeign => &self.native_to_foreign,
        }
    }

    pub fn schedule_mut(&mut self, direction: Direction) -> &mut RepeatSchedule {
        match direction {
            Direction::ForeignToNative => &mut self.foreign_to_native,
            Direction::NativeToForeign => &mut self.native_to_foreign,
        }
    }
}

/// Item matched by approximate spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarItem {
    pub item: Item,
    pub distance: usize,
}

/// Limit/offset window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    pub fn first(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}
