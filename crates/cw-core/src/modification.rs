//! Persisted records of player-caused world changes.
//!
//! Static content is immutable on disk; permanent changes (a cleared
//! blockage, a dropped item) are stored as an ordered list of patch records
//! and replayed onto the freshly-loaded location table at session start.

use serde::{Deserialize, Serialize};

/// Kind string for a description replacement; payload is the new description.
pub const KIND_REPLACE_DESCRIPTION: &str = "replace_description";
/// Kind string for adding an item; payload is the item serialized as JSON.
pub const KIND_ADD_ITEM: &str = "add_item";
/// Kind string for removing an item; payload is the item name.
pub const KIND_REMOVE_ITEM: &str = "remove_item";

/// One persisted world change. The kind is a free string so that records
/// written by newer versions survive loading by older ones: unknown kinds
/// are skipped with a warning, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationRecord {
    /// Id of the location the change applies to.
    pub location_id: String,
    /// Change kind, one of the `KIND_*` constants for known records.
    pub kind: String,
    /// Kind-specific payload.
    pub payload: String,
}

impl ModificationRecord {
    /// Create a record.
    pub fn new(
        location_id: impl Into<String>,
        kind: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            kind: kind.into(),
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json() {
        let record = ModificationRecord::new("entry_cave", KIND_REMOVE_ITEM, "pickaxe");
        let json = serde_json::to_string(&record).expect("serializes");
        let back: ModificationRecord = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, record);
    }
}
