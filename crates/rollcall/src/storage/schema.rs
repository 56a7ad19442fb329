//! `SQLite` schema definitions for rollcall.
//!
//! This module contains the SQL statements for creating the key-value table
//! that holds serialized record collections.

use rusqlite::Connection;

use crate::error::Result;

/// SQL statement to create the entries table.
///
/// Each row holds one namespaced value. `updated_at` is an RFC 3339 timestamp
/// of the last write.
pub const CREATE_ENTRIES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS entries (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_ENTRIES_TABLE];

/// Create all tables if they don't exist.
///
/// # Errors
///
/// Returns an error if a schema statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }
    Ok(())
}
