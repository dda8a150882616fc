//! User registration with a seeded interval registry.

use crate::db::{DbError, SqliteRepository, UserRepository};
use vocab_core::types::User;

pub struct AccountService<'a> {
    repo: &'a SqliteRepository,
    default_intervals: &'a [i64],
}

impl<'a> AccountService<'a> {
    pub fn new(repo: &'a SqliteRepository, default_intervals: &'a [i64]) -> Self {
        Self {
            repo,
            default_intervals,
        }
    }

    /// Create a user whose registry starts with the configured default intervals.
    pub fn register(&self, name: &str) -> Result<User, DbError> {
        self.repo.create_user(name, self.default_intervals)
    }

    /// Delete a user; its registry and items go with it.
    pub fn unregister(&self, user_id: i64) -> Result<bool, DbError> {
        self.repo.delete_user(user_id)
    }
}
