//! Observation handlers: look, inventory, status, quests.

use cw_core::content;

use super::{HandlerReply, HandlerResult};
use crate::session::GameSession;

/// Handle `look`. The argument is ignored; looking at a specific object is
/// not implemented, the reply is always the room view. The tutorial room's
/// description varies with tutorial progress.
pub fn handle_look(session: &mut GameSession, _argument: Option<&str>) -> HandlerResult {
    let tutorial = *session.tutorial();
    let location = session.current_location()?;

    let mut description = location.full_description();
    if location.id == content::TUTORIAL_ROOM {
        description = tutorial.patched_description(&description);
    }

    Ok(HandlerReply::message(format!(
        "**Current Location: {}**\n\n{description}",
        location.name
    )))
}

/// Handle `inventory`. The argument is ignored.
pub fn handle_inventory(session: &mut GameSession, _argument: Option<&str>) -> HandlerResult {
    let inventory = &session.character().inventory;
    let message = if inventory.is_empty() {
        "Your inventory is empty.".to_string()
    } else {
        format!("You are carrying: {}.", inventory.join(", "))
    };
    Ok(HandlerReply::message(message))
}

/// Handle `status`. The argument is ignored.
pub fn handle_status(session: &mut GameSession, _argument: Option<&str>) -> HandlerResult {
    let location_name = session
        .current_location()
        .map(|location| location.name.clone())
        .unwrap_or_else(|_| "Unknown".to_string());
    let character = session.character();

    let skills = if character.skills.is_empty() {
        "None".to_string()
    } else {
        character
            .skills
            .iter()
            .map(|(name, value)| format!("{name} {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let lines = [
        format!("Name: {}", character.name),
        format!("Level: {}", character.level),
        format!("XP: {} / {}", character.xp, character.xp_needed()),
        format!("HP: {} / {}", character.hp, character.max_hp),
        format!("Skills: {skills}"),
        format!("Location: {location_name}"),
    ];
    Ok(HandlerReply::message(lines.join("\n")))
}

/// Handle `quests`. The argument is ignored.
pub fn handle_quests(session: &mut GameSession, _argument: Option<&str>) -> HandlerResult {
    let character = session.character();
    if character.active_quests.is_empty() {
        return Ok(HandlerReply::message("You have no active quests."));
    }

    let mut lines = vec!["**Active Quests:**".to_string()];
    for quest_id in &character.active_quests {
        match session.quests().get(quest_id) {
            Some(quest) => lines.push(format!("- **{}**: {}", quest.name, quest.description)),
            None => lines.push(format!("- Unknown Quest (id: {quest_id})")),
        }
    }
    Ok(HandlerReply::message(lines.join("\n")))
}
