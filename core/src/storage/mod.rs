mod json_store;
mod memory_store;

pub use json_store::JsonStore;
pub use memory_store::MemoryStore;

use crate::models::Note;
use crate::Result;

/// Snapshot persistence for the whole note collection.
///
/// The store holds exactly one value: the serialized collection. `load` is
/// called once at startup; `save` rewrites the snapshot after every
/// mutating operation.
pub trait SnapshotStore {
    /// Read the persisted collection. Missing or malformed data yields the
    /// empty collection rather than an error.
    fn load(&self) -> Vec<Note>;

    /// Replace the persisted collection with `notes`.
    fn save(&self, notes: &[Note]) -> Result<()>;
}
