use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::error::StoreError;
use crate::models::{Pair, Settings};

pub mod memory;
pub mod slot;

pub use memory::MemoryStore;
pub use slot::{SLOT_KEY, SavedGame, decode_slot, encode_slot};

/// Persistence for the deck and the last used settings.
pub trait DeckStore {
    /// Returns the saved game, or `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<SavedGame>, StoreError>;

    /// Overwrites the saved game with `pairs` and `settings`.
    fn save(&mut self, pairs: &[Pair], settings: &Settings) -> Result<(), StoreError>;

    /// Unix timestamp of the last save.
    fn saved_at(&self) -> Result<Option<i64>, StoreError>;
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        run_migrations(&conn)?;
        debug!("Opened deck store at {}", path.display());

        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        let raw = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", [SLOT_KEY], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(raw)
    }
}

impl DeckStore for SqliteStore {
    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.read_raw()?.as_deref().and_then(decode_slot))
    }

    fn save(&mut self, pairs: &[Pair], settings: &Settings) -> Result<(), StoreError> {
        let value = encode_slot(pairs, settings)?;
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![SLOT_KEY, value, now()],
        )?;
        debug!("Saved {} pairs ({:?})", pairs.len(), settings.game_mode);
        Ok(())
    }

    fn saved_at(&self) -> Result<Option<i64>, StoreError> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?",
                [SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}

fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}
