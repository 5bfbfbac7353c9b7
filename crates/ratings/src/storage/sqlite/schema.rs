//! SQLite schema definitions and SQL query constants.

/// Entries table. `id` is a surrogate key; `name` is the natural key.
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    rating INTEGER NOT NULL,
    created TEXT NOT NULL,
    modified TEXT NOT NULL
)
"#;

pub const CREATE_ENTRIES_NAME_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS ix_entries_name ON entries(name)
"#;

/// Statements run, in order, when the repository starts.
pub const SCHEMA: &[&str] = &[CREATE_ENTRIES_TABLE, CREATE_ENTRIES_NAME_INDEX];

pub const SELECT_ENTRY_BY_NAME: &str = r#"
SELECT name, rating, created, modified
FROM entries
WHERE name = ?
"#;

pub const SELECT_ALL_ENTRIES: &str = r#"
SELECT name, rating, created, modified
FROM entries
"#;

/// Timestamps are fixed-width RFC 3339 UTC text, so `MAX` orders them in time.
pub const UPDATE_ENTRY_RATING: &str = r#"
UPDATE entries
SET rating = ?, modified = MAX(modified, ?)
WHERE name = ?
"#;

pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries (name, rating, created, modified)
VALUES (?, ?, ?, ?)
"#;

pub const DELETE_ENTRY_BY_NAME: &str = r#"
DELETE FROM entries
WHERE name = ?
"#;

pub const PING: &str = "SELECT 1";
