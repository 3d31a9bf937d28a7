//! Deck persistence.
//!
//! The controller saves the full snapshot after every mutation through
//! `DeckStore`. Transport is up to the implementation; `MemoryStore` keeps
//! binary-encoded snapshots in memory.

use rustc_hash::FxHashMap;

use crate::deck::{DeckId, DeckSnapshot};
use crate::error::DeckResult;

/// Snapshot persistence.
pub trait DeckStore {
    /// Save a snapshot, replacing any earlier one with the same id.
    fn save(&mut self, snapshot: &DeckSnapshot) -> DeckResult<()>;

    /// Load a snapshot by deck id.
    fn load(&self, id: DeckId) -> DeckResult<Option<DeckSnapshot>>;

    /// Delete a snapshot. Returns whether one existed.
    fn delete(&mut self, id: DeckId) -> DeckResult<bool>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    decks: FxHashMap<DeckId, Vec<u8>>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves performed.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

impl DeckStore for MemoryStore {
    fn save(&mut self, snapshot: &DeckSnapshot) -> DeckResult<()> {
        self.decks.insert(snapshot.id, snapshot.to_bytes()?);
        self.writes += 1;
        Ok(())
    }

    fn load(&self, id: DeckId) -> DeckResult<Option<DeckSnapshot>> {
        self.decks
            .get(&id)
            .map(|bytes| DeckSnapshot::from_bytes(bytes))
            .transpose()
    }

    fn delete(&mut self, id: DeckId) -> DeckResult<bool> {
        Ok(self.decks.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckState;
    use crate::topology::DeckType;

    #[test]
    fn test_save_load_delete() {
        let mut store = MemoryStore::new();
        let snapshot = DeckState::new(DeckId::new(9), DeckType::Year2)
            .with_name("Encore")
            .snapshot();

        store.save(&snapshot).unwrap();
        store.save(&snapshot).unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.len(), 1);

        assert_eq!(store.load(DeckId::new(9)).unwrap(), Some(snapshot));
        assert_eq!(store.load(DeckId::new(10)).unwrap(), None);

        assert!(store.delete(DeckId::new(9)).unwrap());
        assert!(!store.delete(DeckId::new(9)).unwrap());
        assert!(store.is_empty());
    }
}
