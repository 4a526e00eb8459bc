//! The JSON-file store: one save document per character id.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use cw_core::{Character, ModificationRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{SaveStore, SavedSession};

/// The on-disk document: the saved session plus the world-change log and a
/// timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveDocument {
    character: Character,
    #[serde(default)]
    discovered_actions: BTreeSet<String>,
    #[serde(default)]
    discovered_flavor_verbs: BTreeSet<String>,
    #[serde(default)]
    pickaxe_taken: bool,
    #[serde(default)]
    blockage_cleared: bool,
    #[serde(default)]
    modifications: Vec<ModificationRecord>,
    saved_at: DateTime<Utc>,
}

/// Stores each character's state as `<character_id>.json` in a data
/// directory. Writes go through a temp file and rename, so a crashed save
/// never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Path of a character's save file.
    pub fn save_path(&self, character_id: &str) -> PathBuf {
        self.dir.join(format!("{character_id}.json"))
    }

    /// Delete a character's save file. Returns true if one existed.
    pub fn delete(&self, character_id: &str) -> StoreResult<bool> {
        let path = self.save_path(character_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn read_document(&self, character_id: &str) -> StoreResult<Option<SaveDocument>> {
        let path = self.save_path(character_id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let document =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { path, source })?;
        Ok(Some(document))
    }

    fn write_document(&self, character_id: &str, document: &SaveDocument) -> StoreResult<()> {
        let path = self.save_path(character_id);
        let raw = serde_json::to_string_pretty(document)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(character_id, path = %path.display(), "saved");
        Ok(())
    }
}

impl SaveStore for JsonStore {
    fn load(&self, character_id: &str) -> StoreResult<Option<SavedSession>> {
        Ok(self.read_document(character_id)?.map(|document| SavedSession {
            character: document.character,
            discovered_actions: document.discovered_actions,
            discovered_flavor_verbs: document.discovered_flavor_verbs,
            pickaxe_taken: document.pickaxe_taken,
            blockage_cleared: document.blockage_cleared,
        }))
    }

    fn save(&self, character_id: &str, state: &SavedSession) -> StoreResult<()> {
        // Saving replaces the session fields but keeps the change log.
        let modifications = self
            .read_document(character_id)?
            .map(|document| document.modifications)
            .unwrap_or_default();
        let document = SaveDocument {
            character: state.character.clone(),
            discovered_actions: state.discovered_actions.clone(),
            discovered_flavor_verbs: state.discovered_flavor_verbs.clone(),
            pickaxe_taken: state.pickaxe_taken,
            blockage_cleared: state.blockage_cleared,
            modifications,
            saved_at: Utc::now(),
        };
        self.write_document(character_id, &document)
    }

    fn load_location_modifications(
        &self,
        character_id: &str,
    ) -> StoreResult<Vec<ModificationRecord>> {
        Ok(self
            .read_document(character_id)?
            .map(|document| document.modifications)
            .unwrap_or_default())
    }

    fn record_location_modification(
        &self,
        character_id: &str,
        record: &ModificationRecord,
    ) -> StoreResult<()> {
        let Some(mut document) = self.read_document(character_id)? else {
            // No save yet; a log with no character row would be orphaned.
            debug!(character_id, "no save document, modification not recorded");
            return Ok(());
        };
        document.modifications.push(record.clone());
        document.saved_at = Utc::now();
        self.write_document(character_id, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::content;
    use cw_core::modification::KIND_REMOVE_ITEM;
    use tempfile::TempDir;

    fn saved_session() -> SavedSession {
        SavedSession {
            character: content::starting_character(),
            discovered_actions: ["look".to_string()].into(),
            discovered_flavor_verbs: ["xyzzy".to_string()].into(),
            pickaxe_taken: true,
            blockage_cleared: false,
        }
    }

    #[test]
    fn missing_save_loads_as_none() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("opens");
        assert!(store.load("hero").expect("loads").is_none());
        assert!(store.load_location_modifications("hero").expect("loads").is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("opens");

        let state = saved_session();
        store.save("hero", &state).expect("saves");

        let loaded = store.load("hero").expect("loads").expect("present");
        assert_eq!(loaded, state);
    }

    #[test]
    fn modifications_append_in_order_and_survive_saves() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("opens");
        store.save("hero", &saved_session()).expect("saves");

        let first = ModificationRecord::new("entry_cave", KIND_REMOVE_ITEM, "pickaxe");
        let second = ModificationRecord::new("guard_room", KIND_REMOVE_ITEM, "club");
        store.record_location_modification("hero", &first).expect("records");
        store.record_location_modification("hero", &second).expect("records");

        // A later character save keeps the log.
        store.save("hero", &saved_session()).expect("saves");

        let log = store.load_location_modifications("hero").expect("loads");
        assert_eq!(log, vec![first, second]);
    }

    #[test]
    fn corrupt_save_is_an_error_not_a_panic() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("opens");
        fs::write(store.save_path("hero"), "{not json").expect("writes");
        assert!(matches!(
            store.load("hero"),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn delete_removes_the_save_file() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonStore::open(dir.path()).expect("opens");
        store.save("hero", &saved_session()).expect("saves");

        assert!(store.delete("hero").expect("deletes"));
        assert!(!store.delete("hero").expect("second delete"));
        assert!(store.load("hero").expect("loads").is_none());
    }
}
