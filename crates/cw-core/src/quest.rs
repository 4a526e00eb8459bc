//! Quest definitions and completion criteria.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// What a quest requires before it completes. Exactly two criteria kinds
/// exist; defeating an NPC is not one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestCriteria {
    /// The character holds a named item.
    HasItem {
        /// Item name, matched case-insensitively against the inventory.
        item_name: String,
    },
    /// The character stands in a named location.
    ReachLocation {
        /// Target location id.
        location_id: String,
    },
}

impl QuestCriteria {
    /// Evaluate the criteria against the character's current state.
    pub fn is_met(&self, character: &Character) -> bool {
        match self {
            Self::HasItem { item_name } => character.has_item(item_name),
            Self::ReachLocation { location_id } => {
                character.current_location_id == *location_id
            }
        }
    }
}

/// A quest the player can carry and complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable string id, the key into the quest table.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Journal description.
    pub description: String,
    /// Completion criteria.
    pub criteria: QuestCriteria,
    /// XP awarded on completion.
    pub xp_reward: u32,
}
