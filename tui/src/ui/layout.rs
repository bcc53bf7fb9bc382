use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{
    render_editor, render_header, render_note_list, render_search_box, render_status_bar,
    render_tag_filter, render_viewer, render_welcome,
};

/// Render the complete UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.size();

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_header(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the content area: sidebar plus the main pane
fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Sidebar
            Constraint::Min(0),     // Main pane
        ])
        .split(area);

    render_sidebar(frame, app, chunks[0]);
    render_main(frame, app, chunks[1]);
}

fn render_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(3), // Tag filter row
            Constraint::Min(0),    // Note list
        ])
        .split(area);

    render_search_box(frame, app, chunks[0]);
    render_tag_filter(frame, app, chunks[1]);
    render_note_list(frame, app, chunks[2]);
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.store.current_note().is_none() {
        render_welcome(frame, area);
    } else if app.store.is_editing() {
        render_editor(frame, app, area);
    } else {
        render_viewer(frame, app, area);
    }
}
