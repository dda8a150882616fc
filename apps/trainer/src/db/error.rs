//! Database error types.

use rusqlite::ffi;
use thiserror::Error;
use vocab_core::VocabError;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Domain(#[from] VocabError),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Integrity constraint classes the store translates into domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    Unique,
    ForeignKey,
    Check,
}

impl DbError {
    /// Translate a storage-level integrity violation into a domain error.
    ///
    /// `duplicate` names the entity a unique violation is about, `owner` the
    /// entity a foreign key violation points at. Anything that is not an
    /// integrity violation stays a [`DbError::Sqlite`].
    pub fn from_integrity(err: rusqlite::Error, duplicate: &str, owner: &str) -> Self {
        match constraint_of(&err) {
            Some(Constraint::Unique) => VocabError::NotUniqueEntity(duplicate.to_string()).into(),
            Some(Constraint::ForeignKey) => VocabError::UnknownEntity(owner.to_string()).into(),
            Some(Constraint::Check) => VocabError::InvalidParameter(duplicate.to_string()).into(),
            None => Self::Sqlite(err),
        }
    }

    /// Domain error carried by this error, if any.
    pub fn domain(&self) -> Option<&VocabError> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

fn constraint_of(err: &rusqlite::Error) -> Option<Constraint> {
    match err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            match failure.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    Some(Constraint::Unique)
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Constraint::ForeignKey),
                ffi::SQLITE_CONSTRAINT_CHECK => Some(Constraint::Check),
                _ => None,
            }
        }
        _ => None,
    }
}
