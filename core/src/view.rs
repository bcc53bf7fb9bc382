//! Derived views over the note collection.
//!
//! Pure functions of `(notes, query, tag filter)`, recomputed on every
//! read. Nothing here is cached or persisted.

use crate::models::Note;

/// Deduplicated set of all tags in use, sorted lexicographically
pub fn tag_universe(notes: &[Note]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for note in notes {
        for tag in &note.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort();
    tags
}

/// Notes passing the search query and tag filter, most recently saved
/// first. Ties keep collection order (stable sort).
pub fn visible<'a>(notes: &'a [Note], query: &str, tag_filter: Option<&str>) -> Vec<&'a Note> {
    let query = query.to_lowercase();
    let mut result: Vec<&Note> = notes
        .iter()
        .filter(|note| matches_query(note, &query) && matches_tag(note, tag_filter))
        .collect();
    result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    result
}

fn matches_query(note: &Note, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(query_lower)
        || note.content.to_lowercase().contains(query_lower)
        || note
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
}

fn matches_tag(note: &Note, filter: Option<&str>) -> bool {
    match filter {
        Some(tag) => note.tags.iter().any(|t| t == tag),
        None => true,
    }
}
