//! Print the current progress snapshot as JSON.

use std::path::Path;

use cw_engine::{GameSession, Vocabulary};
use cw_store::SaveStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Load the saved state and print the session snapshot.
pub fn run(data_dir: &Path, character_id: &str) -> Result<(), String> {
    let (store, seed) = super::load_seed(data_dir, character_id)?;
    // The snapshot never rolls dice; any seed will do.
    let mut session = GameSession::new(seed, Vocabulary::standard(), StdRng::seed_from_u64(0))
        .map_err(|e| e.to_string())?;
    let modifications = store
        .load_location_modifications(character_id)
        .map_err(|e| e.to_string())?;
    session.apply_modifications(&modifications);

    let json = serde_json::to_string_pretty(&session.snapshot()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
