//! SQL functions registered on every connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use vocab_core::checked_distance;

/// Name of the bounded edit distance function inside SQL.
pub const EDIT_DISTANCE: &str = "edit_distance";

/// Register `edit_distance(a, b, threshold)`.
///
/// Returns the Levenshtein distance when it is within `threshold`, `-1`
/// otherwise, and raises an SQL error for NULL operands or a negative threshold.
pub fn register(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        EDIT_DISTANCE,
        3,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let a: Option<String> = ctx.get(0)?;
            let b: Option<String> = ctx.get(1)?;
            let threshold: i64 = ctx.get(2)?;
            checked_distance(a.as_deref(), b.as_deref(), threshold)
                .map_err(|err| rusqlite::Error::UserFunctionError(Box::new(err)))
        },
    )
}
