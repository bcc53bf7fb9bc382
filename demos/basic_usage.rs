// Example: Basic usage of the jotter-core library
use std::fs;

use jotter_core::{JsonStore, NoteStore};

fn main() -> jotter_core::Result<()> {
    let data_path = "basic_usage_notes.json";
    fs::remove_file(data_path).ok(); // Clean up previous run

    println!("--- Basic Usage of jotter-core ---");

    // ========== Open the store ==========
    let mut store = NoteStore::open(JsonStore::new(data_path));
    println!("   ✓ Opened store with {} notes", store.notes().len());

    // ========== Create and save notes ==========
    println!("\n2. Creating notes...");
    store.create_note()?;
    store.set_buffer_title("Project Planning");
    store.set_buffer_content("Ship the Q4 roadmap draft");
    store.add_tag_to_buffer("Work");
    store.add_tag_to_buffer("planning");
    store.save_current()?;
    println!("   ✓ Created note: {}", store.current_note().unwrap().title);

    store.create_note()?;
    store.set_buffer_title("Groceries");
    store.set_buffer_content("milk, eggs, coffee");
    store.add_tag_to_buffer("home");
    store.save_current()?;
    println!("   ✓ Created note: {}", store.current_note().unwrap().title);

    // ========== Derived views ==========
    println!("\n3. Filtering...");
    println!("   ✓ Tags in use: {:?}", store.tag_universe());

    store.set_search_query("roadmap");
    let hits: Vec<&str> = store.visible_notes().iter().map(|n| n.title.as_str()).collect();
    println!("   ✓ Search 'roadmap' matches: {hits:?}");

    store.set_search_query("");
    store.set_tag_filter(Some("home".to_string()));
    let hits: Vec<&str> = store.visible_notes().iter().map(|n| n.title.as_str()).collect();
    println!("   ✓ Tag filter 'home' matches: {hits:?}");
    store.set_tag_filter(None);

    // ========== Reload from disk ==========
    println!("\n4. Reloading...");
    let reopened = NoteStore::open(JsonStore::new(data_path));
    println!("   ✓ Reloaded {} notes from {}", reopened.notes().len(), data_path);

    // ========== Delete ==========
    println!("\n5. Deleting...");
    let id = store.notes()[0].id.clone();
    store.delete_note(&id)?;
    println!("   ✓ Deleted one note, {} remaining", store.notes().len());

    fs::remove_file(data_path).ok();
    println!("\nDone.");
    Ok(())
}
