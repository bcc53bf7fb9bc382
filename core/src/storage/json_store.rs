use crate::models::Note;
use crate::storage::SnapshotStore;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed snapshot store: one JSON document holding every note.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store addressing the given file path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Check if the snapshot file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonStore {
    fn load(&self) -> Vec<Note> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write the full snapshot to a sibling file and rename it into
        // place, so a reader never observes a partial write.
        let json = serde_json::to_string(notes)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
