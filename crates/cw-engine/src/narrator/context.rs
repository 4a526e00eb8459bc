//! Full narration context: a request merged with character and location
//! state.

use std::collections::BTreeMap;

use serde::Serialize;

use super::request::NarrationRequest;
use crate::session::GameSession;

/// Everything a narrator needs to render one turn: the structured request
/// plus a snapshot of the character and the room.
#[derive(Debug, Clone, Serialize)]
pub struct NarrationContext {
    /// The structured outcome of the turn.
    pub request: NarrationRequest,
    /// Current location id.
    pub location_id: String,
    /// Current location name.
    pub location_name: String,
    /// The full room view.
    pub location_description: String,
    /// Character name.
    pub character_name: String,
    /// Current HP.
    pub hp: u32,
    /// Maximum HP.
    pub max_hp: u32,
    /// Character level.
    pub level: u32,
    /// Total XP.
    pub xp: u32,
    /// Inventory item names.
    pub inventory: Vec<String>,
    /// Skill values by name.
    pub skills: BTreeMap<String, u32>,
    /// Active quest names.
    pub active_quests: Vec<String>,
    /// The request's outcome summary, the narrator's primary input.
    pub action_outcome: String,
    /// What the player originally typed.
    pub player_input: String,
}

impl NarrationContext {
    /// Assemble a context from the session's current state.
    pub fn assemble(session: &GameSession, request: NarrationRequest, player_input: &str) -> Self {
        let (location_id, location_name, location_description) = match session.current_location() {
            Ok(location) => (
                location.id.clone(),
                location.name.clone(),
                location.full_description(),
            ),
            Err(_) => (
                session.character().current_location_id.clone(),
                "Unknown".to_string(),
                String::new(),
            ),
        };

        let character = session.character();
        let active_quests = character
            .active_quests
            .iter()
            .map(|quest_id| {
                session
                    .quests()
                    .get(quest_id)
                    .map_or_else(|| quest_id.clone(), |quest| quest.name.clone())
            })
            .collect();

        Self {
            action_outcome: request.summary().to_string(),
            request,
            location_id,
            location_name,
            location_description,
            character_name: character.name.clone(),
            hp: character.hp,
            max_hp: character.max_hp,
            level: character.level,
            xp: character.xp,
            inventory: character.inventory.clone(),
            skills: character.skills.clone(),
            active_quests,
            player_input: player_input.to_string(),
        }
    }
}
