//! The player character: health, inventory, skills, experience, and quests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Experience points required per level: a character needs `level * 100`
/// total XP to reach the next level.
pub const XP_PER_LEVEL: u32 = 100;

/// Maximum-HP increase granted on each level-up.
pub const LEVEL_UP_HP_BONUS: u32 = 5;

/// The player character. All gameplay mutation goes through the methods
/// below; fields are public because the character is also the unit of
/// persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// The character's name.
    pub name: String,
    /// Current health points, always in `0..=max_hp`.
    pub hp: u32,
    /// Maximum health points.
    pub max_hp: u32,
    /// Id of the location the character currently occupies.
    pub current_location_id: String,
    /// Item names carried, in acquisition order. Membership is
    /// case-insensitive but original casing is preserved.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Skill values by lowercase skill name. Unknown skills read as 0.
    #[serde(default)]
    pub skills: BTreeMap<String, u32>,
    /// Total experience points. Never decreases.
    #[serde(default)]
    pub xp: u32,
    /// Current level, starting at 1. Only increases, via [`Character::add_xp`].
    #[serde(default = "default_level")]
    pub level: u32,
    /// Ids of currently active quests, no duplicates.
    #[serde(default)]
    pub active_quests: Vec<String>,
}

fn default_level() -> u32 {
    1
}

impl Character {
    /// Create a character at full health with no possessions.
    pub fn new(name: impl Into<String>, max_hp: u32, location_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            current_location_id: location_id.into(),
            inventory: Vec::new(),
            skills: BTreeMap::new(),
            xp: 0,
            level: 1,
            active_quests: Vec::new(),
        }
    }

    /// Reduce HP by `damage`, never below 0.
    pub fn take_damage(&mut self, damage: u32) {
        self.hp = self.hp.saturating_sub(damage);
    }

    /// Restore HP by `amount`, never above `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// True while HP is above 0.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Add an item to the inventory, preserving its casing. Adding a name
    /// already held (case-insensitively) is a no-op.
    pub fn add_item(&mut self, item_name: impl Into<String>) {
        let item_name = item_name.into();
        if !self.has_item(&item_name) {
            self.inventory.push(item_name);
        }
    }

    /// Remove an item by name (case-insensitive). Returns true if an item
    /// was removed.
    pub fn remove_item(&mut self, item_name: &str) -> bool {
        if let Some(pos) = self
            .inventory
            .iter()
            .position(|item| item.eq_ignore_ascii_case(item_name))
        {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether the character holds an item (case-insensitive).
    pub fn has_item(&self, item_name: &str) -> bool {
        self.inventory
            .iter()
            .any(|item| item.eq_ignore_ascii_case(item_name))
    }

    /// Look up a skill value by name (case-insensitive), 0 if unknown.
    pub fn skill(&self, skill_name: &str) -> u32 {
        self.skills
            .get(&skill_name.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Total XP required to reach the next level.
    pub fn xp_needed(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }

    /// Award experience and resolve any level-ups. One XP award can cross
    /// several thresholds; each level-up raises `max_hp` by
    /// [`LEVEL_UP_HP_BONUS`] and fully heals. Returns true if at least one
    /// level was gained.
    pub fn add_xp(&mut self, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }

        self.xp += amount;
        let mut leveled_up = false;
        while self.xp >= self.xp_needed() {
            self.level += 1;
            self.max_hp += LEVEL_UP_HP_BONUS;
            self.hp = self.max_hp;
            leveled_up = true;
        }
        leveled_up
    }

    /// Activate a quest if it is not already active.
    pub fn add_quest(&mut self, quest_id: impl Into<String>) {
        let quest_id = quest_id.into();
        if !self.active_quests.contains(&quest_id) {
            self.active_quests.push(quest_id);
        }
    }

    /// Deactivate a quest. Returns true if it was active.
    pub fn remove_quest(&mut self, quest_id: &str) -> bool {
        if let Some(pos) = self.active_quests.iter().position(|id| id == quest_id) {
            self.active_quests.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether a quest is active.
    pub fn has_quest(&self, quest_id: &str) -> bool {
        self.active_quests.iter().any(|id| id == quest_id)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inv = if self.inventory.is_empty() {
            "Inv: Empty".to_string()
        } else {
            format!("Inv: {}", self.inventory.join(", "))
        };
        let skills = if self.skills.is_empty() {
            "Skills: None".to_string()
        } else {
            let pairs: Vec<String> = self
                .skills
                .iter()
                .map(|(name, value)| format!("{name} {value}"))
                .collect();
            format!("Skills: {}", pairs.join(", "))
        };
        writeln!(
            f,
            "{} (Lvl:{} XP:{}/{} | HP:{}/{})",
            self.name,
            self.level,
            self.xp,
            self.xp_needed(),
            self.hp,
            self.max_hp
        )?;
        writeln!(f, "  Location: '{}'", self.current_location_id)?;
        writeln!(f, "  {inv}")?;
        writeln!(f, "  {skills}")?;
        write!(f, "  Quests: {} active", self.active_quests.len())
    }
}
