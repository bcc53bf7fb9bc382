use crate::models::Note;
use crate::storage::SnapshotStore;
use crate::Result;
use std::cell::RefCell;

/// In-memory snapshot store, used as a substitute for [`JsonStore`] in
/// tests. Holds the serialized document so loads go through the same
/// serde round trip as the file store.
///
/// [`JsonStore`]: crate::storage::JsonStore
#[derive(Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized snapshot, if any save has happened
    pub fn raw(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Vec<Note> {
        match self.snapshot.borrow().as_deref() {
            Some(raw) => serde_json::from_str(raw).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string(notes)?;
        *self.snapshot.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert!(store.load().is_empty());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();

        let mut note = Note::new();
        note.title = "Meeting notes".to_string();
        note.tags = vec!["work".to_string()];

        store.save(std::slice::from_ref(&note)).unwrap();
        assert_eq!(store.load(), vec![note]);
    }
}
