//! Typed location patches parsed from persisted modification records.
//!
//! Static content plus an ordered list of patch records, replayed
//! deterministically at session start. Unknown kinds and malformed
//! payloads are skipped with a warning, never fatal.

use cw_core::modification::{KIND_ADD_ITEM, KIND_REMOVE_ITEM, KIND_REPLACE_DESCRIPTION};
use cw_core::{Item, Location, ModificationRecord};
use tracing::warn;

/// A typed world change, decoded from one [`ModificationRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationPatch {
    /// Replace the location's base description.
    ReplaceDescription(String),
    /// Add an item to the location.
    AddItem(Item),
    /// Remove an item from the location by name.
    RemoveItem(String),
}

impl LocationPatch {
    /// Decode a record. Returns `None` (with a warning) for unknown kinds
    /// or malformed payloads.
    pub fn parse(record: &ModificationRecord) -> Option<Self> {
        match record.kind.as_str() {
            KIND_REPLACE_DESCRIPTION => Some(Self::ReplaceDescription(record.payload.clone())),
            KIND_ADD_ITEM => match serde_json::from_str(&record.payload) {
                Ok(item) => Some(Self::AddItem(item)),
                Err(error) => {
                    warn!(
                        location_id = %record.location_id,
                        %error,
                        "malformed add_item payload, skipping"
                    );
                    None
                }
            },
            KIND_REMOVE_ITEM => Some(Self::RemoveItem(record.payload.clone())),
            other => {
                warn!(
                    location_id = %record.location_id,
                    kind = other,
                    "unknown location modification kind, skipping"
                );
                None
            }
        }
    }

    /// Apply the patch to a location.
    pub fn apply(self, location: &mut Location) {
        match self {
            Self::ReplaceDescription(description) => location.description = description,
            Self::AddItem(item) => location.add_item(item),
            Self::RemoveItem(name) => {
                if location.remove_item(&name).is_none() {
                    warn!(
                        location_id = %location.id,
                        item = %name,
                        "remove_item patch found nothing to remove"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::location::LocationBuilder;

    fn room() -> Location {
        LocationBuilder::new("room", "Room", "A room.")
            .item(Item::new("bone", "a discarded bone", false))
            .build()
    }

    #[test]
    fn replace_description_patch() {
        let record = ModificationRecord::new("room", KIND_REPLACE_DESCRIPTION, "A clean room.");
        let patch = LocationPatch::parse(&record).expect("parses");
        let mut location = room();
        patch.apply(&mut location);
        assert_eq!(location.description, "A clean room.");
    }

    #[test]
    fn add_item_patch_decodes_json() {
        let item = Item::new("club", "a crude club", true);
        let payload = serde_json::to_string(&item).expect("encodes");
        let record = ModificationRecord::new("room", KIND_ADD_ITEM, payload);
        let patch = LocationPatch::parse(&record).expect("parses");
        let mut location = room();
        patch.apply(&mut location);
        assert!(location.find_item("club").is_some());
    }

    #[test]
    fn remove_item_patch() {
        let record = ModificationRecord::new("room", KIND_REMOVE_ITEM, "bone");
        let patch = LocationPatch::parse(&record).expect("parses");
        let mut location = room();
        patch.apply(&mut location);
        assert!(location.find_item("bone").is_none());
    }

    #[test]
    fn malformed_add_item_payload_is_skipped() {
        let record = ModificationRecord::new("room", KIND_ADD_ITEM, "{not json");
        assert_eq!(LocationPatch::parse(&record), None);
    }

    #[test]
    fn unknown_kind_is_skipped() {
        let record = ModificationRecord::new("room", "repaint_walls", "teal");
        assert_eq!(LocationPatch::parse(&record), None);
    }
}
