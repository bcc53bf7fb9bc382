use crate::config::{load_config, Config};
use jotter_core::{JsonStore, NoteStore};
use std::path::PathBuf;

/// Which editor input currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Tags,
    Content,
}

/// Application state: the core note store plus UI-only concerns
/// (list cursor, search focus, editor focus, status line).
pub struct App {
    pub should_quit: bool,
    pub store: NoteStore<JsonStore>,
    pub config: Config,
    pub list_index: usize,
    pub search_active: bool,
    pub editor_field: EditorField,
    pub status_message: Option<String>,
    status_ticks: u8,
}

impl App {
    /// Create a new App instance backed by the given snapshot file
    pub fn new(data_path: &str) -> Self {
        let store = NoteStore::open(JsonStore::new(data_path));
        let config_path = PathBuf::from(data_path)
            .parent()
            .map(|p| p.join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        let config = load_config(&config_path);

        Self {
            should_quit: false,
            store,
            config,
            list_index: 0,
            search_active: false,
            editor_field: EditorField::Title,
            status_message: None,
            status_ticks: 0,
        }
    }

    /// Select the most recently saved note, if any
    pub fn load_first_note(&mut self) {
        if let Some(id) = self.visible_id_at(0) {
            self.store.select_note(&id);
        }
    }

    fn visible_id_at(&self, index: usize) -> Option<String> {
        self.store.visible_notes().get(index).map(|n| n.id.clone())
    }

    pub fn visible_len(&self) -> usize {
        self.store.visible_notes().len()
    }

    fn clamp_list_index(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.list_index = 0;
        } else if self.list_index >= len {
            self.list_index = len - 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.list_index > 0 {
            self.list_index -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.list_index + 1 < self.visible_len() {
            self.list_index += 1;
        }
    }

    /// Open the note under the list cursor in read view
    pub fn activate_selected(&mut self) {
        if let Some(id) = self.visible_id_at(self.list_index) {
            self.store.select_note(&id);
        }
    }

    pub fn create_note(&mut self) {
        match self.store.create_note() {
            Ok(_) => {
                self.list_index = 0;
                self.editor_field = EditorField::Title;
                self.set_status("New note");
            }
            Err(err) => self.set_status(format!("Create failed: {err}")),
        }
    }

    /// Delete the note under the list cursor
    pub fn delete_selected(&mut self) {
        let Some(id) = self.visible_id_at(self.list_index) else {
            return;
        };
        match self.store.delete_note(&id) {
            Ok(()) => {
                self.clamp_list_index();
                self.set_status("Note deleted");
            }
            Err(err) => self.set_status(format!("Delete failed: {err}")),
        }
    }

    pub fn start_editing(&mut self) {
        if self.store.selected_id().is_some() {
            self.store.start_editing();
            self.editor_field = EditorField::Title;
        }
    }

    pub fn save_note(&mut self) {
        if !self.store.is_editing() {
            return;
        }
        match self.store.save_current() {
            Ok(()) => self.set_status("Saved"),
            Err(err) => self.set_status(format!("Save failed: {err}")),
        }
    }

    /// Leave edit mode without saving. Reselecting the note reloads the
    /// buffer from its saved fields, which discards the pending edits.
    pub fn cancel_editing(&mut self) {
        if let Some(id) = self.store.selected_id().map(str::to_string) {
            self.store.select_note(&id);
        }
    }

    pub fn open_search(&mut self) {
        self.search_active = true;
    }

    pub fn close_search(&mut self, keep_query: bool) {
        self.search_active = false;
        if !keep_query {
            self.store.set_search_query("");
            self.clamp_list_index();
        }
    }

    pub fn update_search_query(&mut self, c: char) {
        let mut query = self.store.search_query().to_string();
        query.push(c);
        self.store.set_search_query(query);
        self.clamp_list_index();
    }

    pub fn backspace_search_query(&mut self) {
        let mut query = self.store.search_query().to_string();
        query.pop();
        self.store.set_search_query(query);
        self.clamp_list_index();
    }

    pub fn next_tag_filter(&mut self) {
        self.cycle_tag_filter(1);
    }

    pub fn prev_tag_filter(&mut self) {
        self.cycle_tag_filter(-1);
    }

    /// Step through the filter options: no filter, then each tag in the
    /// universe in order, wrapping around.
    fn cycle_tag_filter(&mut self, step: i32) {
        let universe = self.store.tag_universe();
        if universe.is_empty() {
            return;
        }
        let options = universe.len() as i32 + 1;
        let current = match self.store.tag_filter() {
            None => 0,
            Some(tag) => universe
                .iter()
                .position(|t| t == tag)
                .map(|i| i as i32 + 1)
                .unwrap_or(0),
        };
        let next = (current + step).rem_euclid(options);
        let filter = if next == 0 {
            None
        } else {
            Some(universe[(next - 1) as usize].clone())
        };
        self.store.set_tag_filter(filter);
        self.clamp_list_index();
    }

    pub fn clear_tag_filter(&mut self) {
        self.store.set_tag_filter(None);
        self.clamp_list_index();
    }

    pub fn next_editor_field(&mut self) {
        self.editor_field = match self.editor_field {
            EditorField::Title => EditorField::Tags,
            EditorField::Tags => EditorField::Content,
            EditorField::Content => EditorField::Title,
        };
    }

    pub fn editor_insert_char(&mut self, c: char) {
        match self.editor_field {
            EditorField::Title => self.store.buffer_mut().title.push(c),
            EditorField::Tags => self.store.buffer_mut().tag_input.push(c),
            EditorField::Content => self.store.buffer_mut().content.push(c),
        }
    }

    pub fn editor_backspace(&mut self) {
        match self.editor_field {
            EditorField::Title => {
                self.store.buffer_mut().title.pop();
            }
            EditorField::Tags => {
                // With an empty input, backspace removes the last tag chip
                let last = if self.store.buffer().tag_input.is_empty() {
                    self.store.buffer().tags.last().cloned()
                } else {
                    None
                };
                match last {
                    Some(tag) => self.store.remove_tag_from_buffer(&tag),
                    None => {
                        self.store.buffer_mut().tag_input.pop();
                    }
                }
            }
            EditorField::Content => {
                self.store.buffer_mut().content.pop();
            }
        }
    }

    pub fn editor_enter(&mut self) {
        match self.editor_field {
            EditorField::Title => self.editor_field = EditorField::Tags,
            EditorField::Tags => self.store.commit_tag_input(),
            EditorField::Content => self.store.buffer_mut().content.push('\n'),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = 12;
    }

    /// Advance timers; called on every tick event
    pub fn tick(&mut self) {
        if self.status_message.is_some() {
            self.status_ticks = self.status_ticks.saturating_sub(1);
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }
}
