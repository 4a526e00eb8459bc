//! Delete a character's save file.

use std::path::Path;

use cw_store::JsonStore;

/// Delete the save file, if any.
pub fn run(data_dir: &Path, character_id: &str) -> Result<(), String> {
    let store = JsonStore::open(data_dir).map_err(|e| e.to_string())?;
    if store.delete(character_id).map_err(|e| e.to_string())? {
        println!("Save for '{character_id}' deleted.");
    } else {
        println!("No save found for '{character_id}'.");
    }
    Ok(())
}
