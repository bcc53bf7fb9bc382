pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{Error, Result};
pub use models::Note;
pub use storage::{JsonStore, MemoryStore, SnapshotStore};
pub use store::{EditBuffer, NoteStore};
