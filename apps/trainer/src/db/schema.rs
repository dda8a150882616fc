//! SQLite schema definitions.

/// Current schema version, mirrored into `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Per-connection settings; foreign keys are off by default in SQLite.
pub const CONNECTION_PRAGMAS: &str = r#"
PRAGMA foreign_keys = ON;
"#;

/// Complete schema for the trainer database.
///
/// Schedule intervals reference the owner's registry through deferred
/// composite foreign keys, so a schedule may only point at an unregistered
/// interval inside a transaction, never at commit.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

-- Interval registry
CREATE TABLE IF NOT EXISTS intervals (
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    days INTEGER NOT NULL CHECK (days >= 1),
    PRIMARY KEY (user_id, days)
);

CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    value TEXT NOT NULL,
    note TEXT,
    foreign_to_native_interval INTEGER NOT NULL,
    foreign_to_native_last_repeat TEXT NOT NULL,
    native_to_foreign_interval INTEGER NOT NULL,
    native_to_foreign_last_repeat TEXT NOT NULL,
    UNIQUE (user_id, value),
    FOREIGN KEY (user_id, foreign_to_native_interval)
        REFERENCES intervals(user_id, days) DEFERRABLE INITIALLY DEFERRED,
    FOREIGN KEY (user_id, native_to_foreign_interval)
        REFERENCES intervals(user_id, days) DEFERRABLE INITIALLY DEFERRED
);

CREATE TABLE IF NOT EXISTS expressions (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    value TEXT NOT NULL,
    note TEXT,
    foreign_to_native_interval INTEGER NOT NULL,
    foreign_to_native_last_repeat TEXT NOT NULL,
    native_to_foreign_interval INTEGER NOT NULL,
    native_to_foreign_last_repeat TEXT NOT NULL,
    UNIQUE (user_id, value),
    FOREIGN KEY (user_id, foreign_to_native_interval)
        REFERENCES intervals(user_id, days) DEFERRABLE INITIALLY DEFERRED,
    FOREIGN KEY (user_id, native_to_foreign_interval)
        REFERENCES intervals(user_id, days) DEFERRABLE INITIALLY DEFERRED
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_words_f2n ON words(user_id, foreign_to_native_interval);
CREATE INDEX IF NOT EXISTS idx_words_n2f ON words(user_id, native_to_foreign_interval);
CREATE INDEX IF NOT EXISTS idx_expressions_f2n ON expressions(user_id, foreign_to_native_interval);
CREATE INDEX IF NOT EXISTS idx_expressions_n2f ON expressions(user_id, native_to_foreign_interval);
"#;
