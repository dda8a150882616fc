//! Local SQLite database operations.

pub mod error;
pub mod functions;
mod intervals;
mod items;
pub mod repository;
pub mod schema;
mod users;

pub use error::DbError;
pub use repository::{IntervalRepository, ItemRepository, SqliteRepository, UserRepository};
