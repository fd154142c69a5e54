pub mod queries;

use anyhow::Context;
use rusqlite::Connection;

/// Opens the database and creates the schema if absent. Safe to call on
/// every process start; existing rows are left untouched.
pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            code TEXT NOT NULL,
            parent TEXT NOT NULL,
            phone TEXT NOT NULL UNIQUE,
            child_age TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_bookings_code ON bookings(code);",
    )
    .context("failed to create schema")?;

    Ok(conn)
}
