/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the key-value table if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key         TEXT    PRIMARY KEY,
            value       TEXT    NOT NULL,
            updated_at  TEXT    NOT NULL
        );
        ",
    )?;
    migrate_kv_add_updated_at(conn)?;
    Ok(())
}

/// Early databases stored bare key/value pairs.
fn migrate_kv_add_updated_at(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(kv)")?;
    let rows = stmt.query_map([], |row| {
        let name: String = row.get(1)?;
        Ok(name)
    })?;
    for row in rows {
        if row? == "updated_at" {
            return Ok(());
        }
    }

    conn.execute(
        "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    Ok(())
}
