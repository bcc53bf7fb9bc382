use crate::models::{is_valid_tag, normalize_tag, Note, UNTITLED};
use crate::storage::SnapshotStore;
use crate::view;
use crate::Result;

/// Transient working copy of the selected note's editable fields, plus
/// the pending tag input. Never persisted; reloaded from the note's
/// saved fields whenever the selection changes without a save.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub tag_input: String,
}

impl EditBuffer {
    fn load_from(&mut self, note: &Note) {
        self.title = note.title.clone();
        self.content = note.content.clone();
        self.tags = note.tags.clone();
        self.tag_input.clear();
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The note store and view model.
///
/// Sole owner of the note collection, the selection, the edit buffer,
/// and the filter criteria. Every mutating operation rewrites the
/// snapshot through the backing [`SnapshotStore`] before returning, so
/// the persisted collection always equals the in-memory one.
pub struct NoteStore<S: SnapshotStore> {
    store: S,
    notes: Vec<Note>,
    selected_id: Option<String>,
    editing: bool,
    buffer: EditBuffer,
    search_query: String,
    tag_filter: Option<String>,
}

impl<S: SnapshotStore> NoteStore<S> {
    /// Open the store, reading the persisted collection once
    pub fn open(store: S) -> Self {
        let notes = store.load();
        Self {
            store,
            notes,
            selected_id: None,
            editing: false,
            buffer: EditBuffer::default(),
            search_query: String::new(),
            tag_filter: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The currently selected note, if any
    pub fn current_note(&self) -> Option<&Note> {
        let id = self.selected_id.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn tag_filter(&self) -> Option<&str> {
        self.tag_filter.as_deref()
    }

    /// Notes passing the current filters, most recently saved first
    pub fn visible_notes(&self) -> Vec<&Note> {
        view::visible(&self.notes, &self.search_query, self.tag_filter.as_deref())
    }

    /// All tags in use across the collection, sorted
    pub fn tag_universe(&self) -> Vec<String> {
        view::tag_universe(&self.notes)
    }

    /// Create a fresh note, select it, and enter edit mode
    pub fn create_note(&mut self) -> Result<Note> {
        let note = Note::new();
        self.notes.insert(0, note.clone());
        self.selected_id = Some(note.id.clone());
        self.buffer.load_from(&note);
        self.editing = true;
        self.persist()?;
        Ok(note)
    }

    /// Select a note and load its saved fields into the edit buffer.
    /// Unsaved buffer edits are discarded. Unknown ids are ignored.
    pub fn select_note(&mut self, id: &str) {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            return;
        };
        self.buffer.load_from(&self.notes[pos]);
        self.selected_id = Some(self.notes[pos].id.clone());
        self.editing = false;
    }

    /// Enter edit mode on the selected note; no-op without a selection
    pub fn start_editing(&mut self) {
        if self.selected_id.is_some() {
            self.editing = true;
        }
    }

    /// Commit the edit buffer into the selected note and bump its
    /// modified timestamp. No-op without a selection.
    pub fn save_current(&mut self) -> Result<()> {
        let Some(id) = self.selected_id.clone() else {
            return Ok(());
        };
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(());
        };

        let title = self.buffer.title.trim();
        let note = &mut self.notes[pos];
        note.title = if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title.to_string()
        };
        note.content = self.buffer.content.clone();
        note.tags = self.buffer.tags.clone();
        note.touch();

        self.editing = false;
        self.persist()
    }

    /// Remove a note. Idempotent: an unknown id changes nothing.
    pub fn delete_note(&mut self, id: &str) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Ok(());
        }

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
            self.editing = false;
            self.buffer.clear();
        }
        self.persist()
    }

    /// Normalize a raw tag and append it to the buffer tag set unless it
    /// is empty or already present. The pending tag input is cleared
    /// either way.
    pub fn add_tag_to_buffer(&mut self, raw: &str) {
        let tag = normalize_tag(raw);
        if is_valid_tag(raw) && !self.buffer.tags.contains(&tag) {
            self.buffer.tags.push(tag);
        }
        self.buffer.tag_input.clear();
    }

    /// Add whatever is pending in the tag input field
    pub fn commit_tag_input(&mut self) {
        let raw = std::mem::take(&mut self.buffer.tag_input);
        self.add_tag_to_buffer(&raw);
    }

    /// Remove an exact tag from the buffer tag set; no-op when absent
    pub fn remove_tag_from_buffer(&mut self, tag: &str) {
        self.buffer.tags.retain(|t| t != tag);
    }

    pub fn set_buffer_title(&mut self, title: impl Into<String>) {
        self.buffer.title = title.into();
    }

    pub fn set_buffer_content(&mut self, content: impl Into<String>) {
        self.buffer.content = content.into();
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.buffer.tag_input = text.into();
    }

    pub fn buffer_mut(&mut self) -> &mut EditBuffer {
        &mut self.buffer
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_tag_filter(&mut self, tag: Option<String>) {
        self.tag_filter = tag;
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_empty() -> NoteStore<MemoryStore> {
        NoteStore::open(MemoryStore::new())
    }

    #[test]
    fn test_create_note_selects_and_enters_edit_mode() {
        let mut store = open_empty();
        let note = store.create_note().unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.selected_id(), Some(note.id.as_str()));
        assert!(store.is_editing());
        assert_eq!(store.buffer().title, "New Note");
        assert!(store.buffer().content.is_empty());
        assert!(store.buffer().tags.is_empty());
    }

    #[test]
    fn test_created_ids_stay_unique() {
        let mut store = open_empty();
        for _ in 0..20 {
            store.create_note().unwrap();
        }

        let mut ids: Vec<&str> = store.notes().iter().map(|n| n.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_save_with_empty_title_stores_untitled() {
        let mut store = open_empty();
        let note = store.create_note().unwrap();

        store.set_buffer_title("   ");
        store.save_current().unwrap();

        assert_eq!(store.current_note().unwrap().title, "Untitled");
        assert!(!store.is_editing());
        assert_eq!(store.notes()[0].id, note.id);
    }

    #[test]
    fn test_save_trims_title_and_bumps_updated() {
        let mut store = open_empty();
        let note = store.create_note().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        store.set_buffer_title("  Meeting notes  ");
        store.set_buffer_content("agenda");
        store.save_current().unwrap();

        let saved = store.current_note().unwrap();
        assert_eq!(saved.title, "Meeting notes");
        assert_eq!(saved.content, "agenda");
        assert!(saved.updated_at > note.updated_at);
        assert_eq!(saved.created_at, note.created_at);
    }

    #[test]
    fn test_save_without_selection_is_noop() {
        let mut store = open_empty();
        store.save_current().unwrap();

        assert!(store.notes().is_empty());
        assert!(store.raw_snapshot().is_none());
    }

    #[test]
    fn test_add_tag_trims_lowercases_and_deduplicates() {
        let mut store = open_empty();
        store.create_note().unwrap();

        store.add_tag_to_buffer("Work");
        store.add_tag_to_buffer("work ");

        assert_eq!(store.buffer().tags, vec!["work"]);
    }

    #[test]
    fn test_add_blank_tag_only_clears_input() {
        let mut store = open_empty();
        store.create_note().unwrap();

        store.set_tag_input("   ");
        store.commit_tag_input();

        assert!(store.buffer().tags.is_empty());
        assert!(store.buffer().tag_input.is_empty());
    }

    #[test]
    fn test_commit_tag_input_adds_and_clears() {
        let mut store = open_empty();
        store.create_note().unwrap();

        store.set_tag_input("  Ideas ");
        store.commit_tag_input();

        assert_eq!(store.buffer().tags, vec!["ideas"]);
        assert!(store.buffer().tag_input.is_empty());
    }

    #[test]
    fn test_remove_absent_tag_leaves_buffer_unchanged() {
        let mut store = open_empty();
        store.create_note().unwrap();
        store.add_tag_to_buffer("work");

        store.remove_tag_from_buffer("home");

        assert_eq!(store.buffer().tags, vec!["work"]);
    }

    #[test]
    fn test_remove_tag_from_buffer() {
        let mut store = open_empty();
        store.create_note().unwrap();
        store.add_tag_to_buffer("work");
        store.add_tag_to_buffer("home");

        store.remove_tag_from_buffer("work");

        assert_eq!(store.buffer().tags, vec!["home"]);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut store = open_empty();
        let note = store.create_note().unwrap();

        store.select_note("no-such-id");

        assert_eq!(store.selected_id(), Some(note.id.as_str()));
        assert!(store.is_editing());
    }

    #[test]
    fn test_select_discards_unsaved_edits() {
        let mut store = open_empty();
        let first = store.create_note().unwrap();
        store.set_buffer_title("First");
        store.save_current().unwrap();

        let second = store.create_note().unwrap();
        store.set_buffer_title("doomed edit");
        store.add_tag_to_buffer("doomed");

        store.select_note(&first.id);
        assert_eq!(store.buffer().title, "First");
        assert!(store.buffer().tags.is_empty());
        assert!(!store.is_editing());

        // the unsaved edits are gone from the other note's buffer too
        store.select_note(&second.id);
        assert_eq!(store.buffer().title, "New Note");
        assert!(store.buffer().tags.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_changes_nothing() {
        let mut store = open_empty();
        let note = store.create_note().unwrap();

        store.delete_note("no-such-id").unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.selected_id(), Some(note.id.as_str()));
    }

    #[test]
    fn test_delete_selected_clears_selection_and_edit_mode() {
        let mut store = open_empty();
        let note = store.create_note().unwrap();

        store.delete_note(&note.id).unwrap();

        assert!(store.notes().is_empty());
        assert!(store.selected_id().is_none());
        assert!(!store.is_editing());
        assert!(store.current_note().is_none());
    }

    #[test]
    fn test_delete_other_note_keeps_selection() {
        let mut store = open_empty();
        let first = store.create_note().unwrap();
        let second = store.create_note().unwrap();

        store.delete_note(&first.id).unwrap();

        assert_eq!(store.selected_id(), Some(second.id.as_str()));
        assert_eq!(store.notes().len(), 1);
    }

    #[test]
    fn test_persisted_snapshot_round_trips() {
        let mut store = open_empty();
        store.create_note().unwrap();
        store.set_buffer_title("Groceries");
        store.set_buffer_content("milk, eggs");
        store.add_tag_to_buffer("home");
        store.save_current().unwrap();

        let raw = store.raw_snapshot().unwrap();
        let reopened: Vec<Note> = serde_json::from_str(&raw).unwrap();
        assert_eq!(reopened, store.notes());
    }

    #[test]
    fn test_reopen_restores_collection() {
        let backing = MemoryStore::new();
        let mut store = NoteStore::open(backing);
        store.create_note().unwrap();
        store.set_buffer_title("Kept");
        store.save_current().unwrap();
        let notes = store.notes().to_vec();

        let reopened = NoteStore::open(store.into_store());
        assert_eq!(reopened.notes(), notes.as_slice());
        assert!(reopened.selected_id().is_none());
        assert!(!reopened.is_editing());
    }

    #[test]
    fn test_filters_do_not_touch_notes_or_snapshot() {
        let mut store = open_empty();
        store.create_note().unwrap();
        store.save_current().unwrap();
        let raw = store.raw_snapshot();

        store.set_search_query("query");
        store.set_tag_filter(Some("work".to_string()));

        assert_eq!(store.raw_snapshot(), raw);
        assert_eq!(store.search_query(), "query");
        assert_eq!(store.tag_filter(), Some("work"));
    }

    #[test]
    fn test_visible_notes_apply_filters() {
        let mut store = open_empty();
        store.create_note().unwrap();
        store.set_buffer_title("Meeting notes");
        store.add_tag_to_buffer("work");
        store.save_current().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        store.create_note().unwrap();
        store.set_buffer_title("Shopping");
        store.add_tag_to_buffer("home");
        store.save_current().unwrap();

        let titles = |store: &NoteStore<MemoryStore>| -> Vec<String> {
            store.visible_notes().iter().map(|n| n.title.clone()).collect()
        };

        assert_eq!(titles(&store), vec!["Shopping", "Meeting notes"]);

        store.set_search_query("notes");
        assert_eq!(titles(&store), vec!["Meeting notes"]);

        store.set_search_query("");
        store.set_tag_filter(Some("home".to_string()));
        assert_eq!(titles(&store), vec!["Shopping"]);

        assert_eq!(store.tag_universe(), vec!["home", "work"]);
    }

    impl NoteStore<MemoryStore> {
        fn raw_snapshot(&self) -> Option<String> {
            self.store.raw()
        }

        fn into_store(self) -> MemoryStore {
            self.store
        }
    }
}
