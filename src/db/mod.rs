/// SQLite-backed key-value store and its schema.
mod kv;
mod migrations;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub use kv::SqliteStore;

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path).with_context(|| format!("opening database {db_path}"))?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./motiv.db` when no data dir is found.
pub fn default_db_path() -> String {
    match crate::data_dir() {
        Some(dir) => dir.join("motiv.db").to_string_lossy().into_owned(),
        None => "motiv.db".to_string(),
    }
}
