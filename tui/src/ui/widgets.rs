use crate::app::{App, EditorField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the header with title and key hints
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = if let Some(note) = app.store.current_note() {
        format!(" {} ", note.title)
    } else {
        " Jotter ".to_string()
    };

    let key_hints = if app.search_active {
        " [Esc:Clear] [Enter:Keep filter] [Type to search] "
    } else if app.store.is_editing() {
        " [Ctrl+S:Save] [Esc:Discard] [Tab:Next field] [Typing...] "
    } else {
        " [q:Quit] [n:New] [e:Edit] [d:Del] [/:Search] [<-/->:Tag filter] [c:Clear filter] [Enter:Open] "
    };

    let header_spans = vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(key_hints, Style::default().fg(Color::DarkGray)),
    ];

    let header = Paragraph::new(Line::from(header_spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    frame.render_widget(header, area);
}

/// Render the search input. The border highlights while it has focus.
pub fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let query = app.store.search_query();
    let border_style = if app.search_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search = Paragraph::new(query).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    frame.render_widget(search, area);

    if app.search_active {
        let x = area.x + 1 + query.width() as u16;
        frame.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
    }
}

/// Render the tag filter row: "All" plus every tag in use
pub fn render_tag_filter(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.store.tag_filter();
    let selected = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        " All ",
        if active.is_none() {
            selected
        } else {
            Style::default().fg(Color::DarkGray)
        },
    )];
    for tag in app.store.tag_universe() {
        spans.push(Span::raw(" "));
        let style = if active == Some(tag.as_str()) {
            selected
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {tag} "), style));
    }

    let row = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Tags "));
    frame.render_widget(row, area);
}

/// Render the visible notes with the list cursor
pub fn render_note_list(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.store.visible_notes();

    if visible.is_empty() {
        let message = if app.store.notes().is_empty() {
            "No notes yet"
        } else {
            "No matching notes"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Notes "));
        frame.render_widget(empty, area);
        return;
    }

    let selected_id = app.store.selected_id();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|note| {
            let title_style = if selected_id == Some(note.id.as_str()) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut lines = vec![Line::from(Span::styled(note.title.clone(), title_style))];
            let preview: String = note
                .content
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .take(100)
                .collect();
            if !preview.is_empty() {
                lines.push(Line::from(Span::styled(
                    preview,
                    Style::default().fg(Color::DarkGray),
                )));
            }
            if !note.tags.is_empty() {
                lines.push(Line::from(Span::styled(
                    note.tags.join(" "),
                    Style::default().fg(Color::Green),
                )));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Notes "))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.list_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the selected note in read view
pub fn render_viewer(frame: &mut Frame, app: &App, area: Rect) {
    let Some(note) = app.store.current_note() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and timestamp
            Constraint::Min(0),    // Content
        ])
        .split(area);

    let header_spans = vec![
        Span::styled(
            note.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("saved {}", note.updated_at.format("%Y-%m-%d %H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let title = Paragraph::new(Line::from(header_spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut body = Vec::new();
    if !note.tags.is_empty() {
        body.push(Line::from(Span::styled(
            note.tags.join(" "),
            Style::default().fg(Color::Green),
        )));
        body.push(Line::from(""));
    }
    if note.content.is_empty() {
        body.push(Line::from(Span::styled(
            "No content",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        for line in note.content.lines() {
            body.push(Line::from(line.to_string()));
        }
    }

    let content = Paragraph::new(Text::from(body))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, chunks[1]);
}

/// Render the editor for the selected note's buffer
pub fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let buffer = app.store.buffer();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Tags input
            Constraint::Min(0),    // Content input
        ])
        .split(area);

    let focus_style = Style::default().fg(Color::Yellow);
    let field_style = |field: EditorField| {
        if app.editor_field == field {
            focus_style
        } else {
            Style::default()
        }
    };

    let title = Paragraph::new(buffer.title.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_style(EditorField::Title))
            .title(" Title "),
    );
    frame.render_widget(title, chunks[0]);

    let mut tag_spans = Vec::new();
    for tag in &buffer.tags {
        tag_spans.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
        tag_spans.push(Span::raw(" "));
    }
    tag_spans.push(Span::raw(buffer.tag_input.clone()));
    let tags = Paragraph::new(Line::from(tag_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_style(EditorField::Tags))
            .title(" Tags (Enter adds, Backspace removes) "),
    );
    frame.render_widget(tags, chunks[1]);

    let content = Paragraph::new(buffer.content.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_style(EditorField::Content))
                .title(" Content "),
        );
    frame.render_widget(content, chunks[2]);

    match app.editor_field {
        EditorField::Title => {
            let x = chunks[0].x + 1 + buffer.title.width() as u16;
            frame.set_cursor(x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1);
        }
        EditorField::Tags => {
            let chips: u16 = buffer
                .tags
                .iter()
                .map(|t| t.width() as u16 + 3)
                .sum();
            let x = chunks[1].x + 1 + chips + buffer.tag_input.width() as u16;
            frame.set_cursor(x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1);
        }
        EditorField::Content => {}
    }
}

/// Render the pane shown when nothing is selected
pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Jotter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Select a note or create a new one to get started"),
    ];

    let welcome = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(welcome, area);
}

/// Render the status bar: transient messages, else counts and filters
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(message) = &app.status_message {
        message.clone()
    } else {
        let visible = app.store.visible_notes().len();
        let total = app.store.notes().len();
        let mut parts = vec![format!("{visible}/{total} notes")];
        if let Some(tag) = app.store.tag_filter() {
            parts.push(format!("tag: {tag}"));
        }
        if !app.store.search_query().is_empty() {
            parts.push(format!("search: {}", app.store.search_query()));
        }
        parts.join("  |  ")
    };

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
