//! Locations and the things found in them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An item lying in a location or carried in an inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The item's name, used for all matching (case-insensitive).
    pub name: String,
    /// A short in-room description.
    pub description: String,
    /// Whether the item can be picked up.
    #[serde(default)]
    pub gettable: bool,
}

impl Item {
    /// Create an item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, gettable: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            gettable,
        }
    }
}

/// A non-player character standing in a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// The NPC's name, matched case-insensitively by substring.
    pub name: String,
    /// A short in-room description.
    pub description: String,
    /// A canned line of dialogue, if the NPC has anything to say.
    pub dialogue: Option<String>,
}

impl Npc {
    /// Create an NPC with a dialogue line.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        dialogue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            dialogue: Some(dialogue.into()),
        }
    }
}

/// A single room in the world. Identity is immutable; contents (items and
/// the description) may change during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Stable string id, the key into the location table.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base room description. May be replaced by a persisted modification.
    pub description: String,
    /// Exits: direction name to target location id.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// NPCs present.
    #[serde(default)]
    pub npcs: Vec<Npc>,
    /// Items present.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Location {
    /// Look up an exit by direction name (case-insensitive). Returns the
    /// target location id.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(&direction.to_lowercase()).map(String::as_str)
    }

    /// The full room view: description, NPCs present, items present (or a
    /// note that there are none), and the exit list.
    pub fn full_description(&self) -> String {
        let mut desc = self.description.clone();

        if !self.npcs.is_empty() {
            let npc_descs: Vec<&str> = self.npcs.iter().map(|n| n.description.as_str()).collect();
            desc.push_str(&format!("\n\nPresent here: {}.", npc_descs.join(", ")));
        }

        if self.items.is_empty() {
            desc.push_str("\n\nYou don't see any loose items here.");
        } else {
            let item_descs: Vec<&str> = self.items.iter().map(|i| i.description.as_str()).collect();
            desc.push_str(&format!("\n\nYou see here: {}.", item_descs.join(", ")));
        }

        if self.exits.is_empty() {
            desc.push_str("\n\nThere are no obvious exits.");
        } else {
            let dirs: Vec<&str> = self.exits.keys().map(String::as_str).collect();
            desc.push_str(&format!("\n\nExits are: {}.", dirs.join(", ")));
        }

        desc
    }

    /// Add an item to the room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item by name (case-insensitive). Returns the removed item.
    pub fn remove_item(&mut self, item_name: &str) -> Option<Item> {
        let pos = self
            .items
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(item_name))?;
        Some(self.items.remove(pos))
    }

    /// Find an item by name (case-insensitive whole-name match).
    pub fn find_item(&self, item_name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(item_name))
    }

    /// Find an NPC by name (case-insensitive substring match).
    pub fn find_npc(&self, npc_name: &str) -> Option<&Npc> {
        let needle = npc_name.to_lowercase();
        self.npcs
            .iter()
            .find(|npc| npc.name.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id: {})", self.name, self.id)
    }
}

/// A builder used by content definitions; keeps the literal world data
/// readable.
#[derive(Debug, Default)]
pub struct LocationBuilder {
    id: String,
    name: String,
    description: String,
    exits: BTreeMap<String, String>,
    npcs: Vec<Npc>,
    items: Vec<Item>,
}

impl LocationBuilder {
    /// Start a location with its id, name, and base description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add an exit.
    pub fn exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    /// Add an NPC.
    pub fn npc(mut self, npc: Npc) -> Self {
        self.npcs.push(npc);
        self
    }

    /// Add an item.
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Finish the location.
    pub fn build(self) -> Location {
        Location {
            id: self.id,
            name: self.name,
            description: self.description,
            exits: self.exits,
            npcs: self.npcs,
            items: self.items,
        }
    }
}
