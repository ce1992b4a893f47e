use super::{DeckStore, SavedGame, decode_slot, encode_slot, now};
use crate::error::StoreError;
use crate::models::{Pair, Settings};

/// Keeps the slot in memory. Used when no database can be opened, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    saved_at: Option<i64>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already encoded slot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DeckStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.raw.as_deref().and_then(decode_slot))
    }

    fn save(&mut self, pairs: &[Pair], settings: &Settings) -> Result<(), StoreError> {
        self.raw = Some(encode_slot(pairs, settings)?);
        self.saved_at = Some(now());
        self.saves += 1;
        Ok(())
    }

    fn saved_at(&self) -> Result<Option<i64>, StoreError> {
        Ok(self.saved_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_memory_store_save_and_load() {
        let mut store = MemoryStore::new();
        store
            .save(&[Pair::new("a", "b")], &Settings::default())
            .unwrap();

        assert_eq!(store.save_count(), 1);
        assert!(store.raw().unwrap().contains("\"gameMode\":\"grid\""));
        assert_eq!(store.load().unwrap().unwrap().pairs[0].word, "a");
    }

    #[test]
    fn test_memory_store_with_bad_raw() {
        let store = MemoryStore::with_raw("[1, 2, 3]");
        assert!(store.load().unwrap().is_none());
    }
}
