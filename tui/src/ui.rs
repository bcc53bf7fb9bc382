mod layout;
mod widgets;

pub use layout::render;
pub use widgets::{
    render_editor,
    render_header,
    render_note_list,
    render_search_box,
    render_status_bar,
    render_tag_filter,
    render_viewer,
    render_welcome,
};
