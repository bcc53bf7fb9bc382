use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder title given to a freshly created note.
pub const NEW_NOTE_TITLE: &str = "New Note";

/// Title stored when a save commits an empty title.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with a generated UUID and the placeholder title
    pub fn new() -> Self {
        let now = now_millis();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: NEW_NOTE_TITLE.to_string(),
            content: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a note with a specific ID (for testing or import)
    pub fn with_id(id: String, title: String) -> Self {
        let now = now_millis();
        Self {
            id,
            title,
            content: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.updated_at = now_millis();
    }
}

// Timestamps are stored at millisecond precision; truncating here keeps
// the in-memory value identical to its persisted form.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let note = Note::new();
        assert_eq!(note.title, NEW_NOTE_TITLE);
        assert!(!note.id.is_empty());
        assert!(note.content.is_empty());
        assert!(note.tags.is_empty());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_note_with_id() {
        let note = Note::with_id("test-id".to_string(), "Test Note".to_string());
        assert_eq!(note.id, "test-id");
        assert_eq!(note.title, "Test Note");
    }

    #[test]
    fn test_note_touch() {
        let mut note = Note::new();
        let original_updated = note.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        note.touch();

        assert!(note.updated_at > original_updated);
        assert!(note.updated_at >= note.created_at);
    }

    #[test]
    fn test_note_ids_unique() {
        let a = Note::new();
        let b = Note::new();
        assert_ne!(a.id, b.id);
    }
}
