use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;

/// Terminal events
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick event
    Tick,
}

/// Event handler for the terminal
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                return Ok(Event::Key(key));
            }
        }
        Ok(Event::Tick)
    }
}

/// True when a key event matches a keymap binding such as "q",
/// "ctrl-s", "enter", or "up"
fn key_matches(binding: &str, key: &KeyEvent) -> bool {
    let binding = binding.to_ascii_lowercase();
    let (want_ctrl, name) = match binding.strip_prefix("ctrl-") {
        Some(rest) => (true, rest),
        None => (false, binding.as_str()),
    };
    if want_ctrl != key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match name {
        "enter" => key.code == KeyCode::Enter,
        "esc" => key.code == KeyCode::Esc,
        "tab" => key.code == KeyCode::Tab,
        "backspace" => key.code == KeyCode::Backspace,
        "up" => key.code == KeyCode::Up,
        "down" => key.code == KeyCode::Down,
        "left" => key.code == KeyCode::Left,
        "right" => key.code == KeyCode::Right,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => key.code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

/// Handle key events for the application
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // On Windows, crossterm reports both key press and release events.
    // We only want to handle press events to avoid duplicates.
    if key.kind != KeyEventKind::Press {
        return;
    }

    let keymap = app.config.keymap.clone();

    // The search input takes precedence while focused
    if app.search_active {
        match key.code {
            KeyCode::Esc => app.close_search(false),
            KeyCode::Enter => app.close_search(true),
            KeyCode::Backspace => app.backspace_search_query(),
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.update_search_query(c);
                }
            }
            _ => {}
        }
        return;
    }

    // Edit mode: keystrokes go to the focused editor field
    if app.store.is_editing() {
        if key_matches(&keymap.save_note, &key) {
            app.save_note();
            return;
        }
        match key.code {
            KeyCode::Esc => app.cancel_editing(),
            KeyCode::Tab => app.next_editor_field(),
            KeyCode::Enter => app.editor_enter(),
            KeyCode::Backspace => app.editor_backspace(),
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.editor_insert_char(c);
                }
            }
            _ => {}
        }
        return;
    }

    // Read view
    if key_matches(&keymap.quit, &key) {
        app.should_quit = true;
    } else if key_matches(&keymap.create_note, &key) {
        app.create_note();
    } else if key_matches(&keymap.delete_note, &key) {
        app.delete_selected();
    } else if key_matches(&keymap.start_editing, &key) {
        app.start_editing();
    } else if key_matches(&keymap.search, &key) {
        app.open_search();
    } else if key_matches(&keymap.clear_tag_filter, &key) {
        app.clear_tag_filter();
    } else if key_matches(&keymap.prev_tag_filter, &key) {
        app.prev_tag_filter();
    } else if key_matches(&keymap.next_tag_filter, &key) {
        app.next_tag_filter();
    } else if key_matches(&keymap.select_up, &key) {
        app.select_prev();
    } else if key_matches(&keymap.select_down, &key) {
        app.select_next();
    } else if key_matches(&keymap.activate, &key) {
        app.activate_selected();
    }
}
