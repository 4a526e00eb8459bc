//! The storage boundary and the persisted state bundle.

use std::collections::BTreeSet;

use cw_core::{Character, ModificationRecord};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Everything persisted for one character besides the world-change log:
/// the character row, the discovery sets, and the tutorial flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    /// The character.
    pub character: Character,
    /// Canonical actions discovered so far.
    #[serde(default)]
    pub discovered_actions: BTreeSet<String>,
    /// Narrate-only verbs discovered so far.
    #[serde(default)]
    pub discovered_flavor_verbs: BTreeSet<String>,
    /// Whether the tutorial tool was taken.
    #[serde(default)]
    pub pickaxe_taken: bool,
    /// Whether the tutorial blockage was cleared.
    #[serde(default)]
    pub blockage_cleared: bool,
}

/// The storage collaborator. One row per character id; modification
/// records are an append-only log replayed at load time.
pub trait SaveStore {
    /// Load a character's saved state, or `None` when nothing has been
    /// saved yet.
    fn load(&self, character_id: &str) -> StoreResult<Option<SavedSession>>;

    /// Save a character's state, replacing any previous save.
    fn save(&self, character_id: &str, state: &SavedSession) -> StoreResult<()>;

    /// Load the ordered world-change log for a character.
    fn load_location_modifications(
        &self,
        character_id: &str,
    ) -> StoreResult<Vec<ModificationRecord>>;

    /// Append one world change to the character's log.
    fn record_location_modification(
        &self,
        character_id: &str,
        record: &ModificationRecord,
    ) -> StoreResult<()>;
}
