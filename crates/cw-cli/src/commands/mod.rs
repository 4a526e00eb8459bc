//! Subcommand implementations.

pub mod play;
pub mod reset;
pub mod state;

use std::path::Path;

use cw_engine::SessionSeed;
use cw_store::{JsonStore, SaveStore};

/// Open the store and build a session seed from whatever was saved, or a
/// fresh one when nothing was.
pub fn load_seed(data_dir: &Path, character_id: &str) -> Result<(JsonStore, SessionSeed), String> {
    let store = JsonStore::open(data_dir).map_err(|e| e.to_string())?;
    let seed = match store.load(character_id).map_err(|e| e.to_string())? {
        Some(saved) => SessionSeed {
            character: Some(saved.character),
            discovered_actions: saved.discovered_actions,
            discovered_flavor_verbs: saved.discovered_flavor_verbs,
            pickaxe_taken: saved.pickaxe_taken,
            blockage_cleared: saved.blockage_cleared,
        },
        None => SessionSeed::fresh(),
    };
    Ok((store, seed))
}
