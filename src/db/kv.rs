/// Key-value queries.
use anyhow::Result;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension};

use crate::store::KeyValueStore;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// When `key` was last written, if it exists and the stamp parses.
    pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Local>>> {
        let stamp: Option<String> = self
            .conn
            .query_row("SELECT updated_at FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(stamp.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Local))
        }))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value, Local::now().to_rfc3339()),
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        SqliteStore::new(conn)
    }

    #[test]
    fn set_then_get_returns_the_value() {
        let store = store();
        assert_eq!(store.get("completedCount").unwrap(), None);
        store.set("completedCount", "1").unwrap();
        assert_eq!(store.get("completedCount").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn set_overwrites_existing_key() {
        let store = store();
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        let count: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn remove_deletes_the_key() {
        let store = store();
        store.set("savedName", "Ana").unwrap();
        store.remove("savedName").unwrap();
        assert_eq!(store.get("savedName").unwrap(), None);
        assert_eq!(store.updated_at("savedName").unwrap(), None);
    }

    #[test]
    fn set_records_update_time() {
        let store = store();
        let before = Local::now() - chrono::Duration::seconds(1);
        store.set("completedCount", "2").unwrap();
        let stamp = store.updated_at("completedCount").unwrap().unwrap();
        assert!(stamp >= before);
    }
}
