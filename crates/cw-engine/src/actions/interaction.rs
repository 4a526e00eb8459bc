//! Item and NPC interaction handlers: get, drop, use, talk.

use cw_core::modification::{KIND_ADD_ITEM, KIND_REMOVE_ITEM};
use cw_core::{Item, ModificationRecord, content};

use super::{HandlerReply, HandlerResult};
use crate::error::HandlerError;
use crate::narrator::NarrationRequest;
use crate::session::GameSession;

/// Handle `get <item>`. Moves a gettable item from the room into the
/// inventory and records the removal for persistence.
pub fn handle_get(session: &mut GameSession, item_name: Option<&str>) -> HandlerResult {
    let Some(item_name) = item_name else {
        return Ok(HandlerReply::message("Get what? Please specify an item."));
    };

    let location = session.current_location()?;
    let location_id = location.id.clone();
    let Some(item) = location.find_item(item_name) else {
        return Ok(HandlerReply::message(format!(
            "You don't see '{item_name}' here."
        )));
    };
    if !item.gettable {
        return Ok(HandlerReply::message(format!(
            "You can't take the {}.",
            item.description
        )));
    }
    let actual_name = item.name.clone();

    if session
        .current_location_mut()?
        .remove_item(&actual_name)
        .is_none()
    {
        return Err(HandlerError::ItemStuck(actual_name));
    }
    session.character_mut().add_item(actual_name.clone());

    if location_id == content::TUTORIAL_ROOM
        && actual_name.eq_ignore_ascii_case(content::TUTORIAL_TOOL)
    {
        session.mark_tool_taken();
    }

    session.queue_modification(ModificationRecord::new(
        location_id,
        KIND_REMOVE_ITEM,
        actual_name.clone(),
    ));
    Ok(HandlerReply::message(format!("You take the {actual_name}.")))
}

/// Handle `drop <item>`. Moves an item from the inventory back into the
/// room as a generic gettable item and records the addition.
pub fn handle_drop(session: &mut GameSession, item_name: Option<&str>) -> HandlerResult {
    let Some(item_name) = item_name else {
        return Ok(HandlerReply::message("Drop what? Please specify an item."));
    };

    let Some(held) = session
        .character()
        .inventory
        .iter()
        .find(|item| item.eq_ignore_ascii_case(item_name))
        .cloned()
    else {
        return Ok(HandlerReply::message(format!(
            "You don't have '{item_name}' to drop."
        )));
    };

    if !session.character_mut().remove_item(&held) {
        return Err(HandlerError::InventoryStuck(held));
    }

    let dropped = Item::new(held.clone(), format!("{held} lying on the ground"), true);
    let payload = serde_json::to_string(&dropped)?;
    let location_id = session.current_location()?.id.clone();
    session.current_location_mut()?.add_item(dropped);
    session.queue_modification(ModificationRecord::new(location_id, KIND_ADD_ITEM, payload));

    Ok(HandlerReply::message(format!("You drop the {held}.")))
}

/// Handle `use <item> on <target>`. Contains the tutorial's pickaxe/rubble
/// special case; everything else falls through to a "nothing happens"
/// narration. Matching is by lowercase item name only; the target's
/// presence in the room is not checked.
pub fn handle_use(session: &mut GameSession, argument: Option<&str>) -> HandlerResult {
    let Some(argument) = argument else {
        return Ok(HandlerReply::message("Use what? And on what?"));
    };

    let (item_name, target_name) = match argument.split_once(" on ") {
        Some((item, target)) => (item.trim(), Some(target.trim())),
        None => (argument.trim(), None),
    };

    if !session.character().has_item(item_name) {
        return Ok(HandlerReply::message(format!(
            "You don't have a {item_name}."
        )));
    }

    let Some(target_name) = target_name else {
        return Ok(HandlerReply::message(format!("Use {item_name} on what?")));
    };

    let in_tutorial_room = session.character().current_location_id == content::TUTORIAL_ROOM;
    if in_tutorial_room && item_name == content::TUTORIAL_TOOL {
        if target_name != content::TUTORIAL_TARGET {
            return Ok(HandlerReply::message(format!(
                "Using the pickaxe on the {target_name} doesn't seem to do anything useful here."
            )));
        }
        if session.tutorial().blockage_cleared {
            return Ok(HandlerReply::message(
                "The rubble blocking the exit is already cleared.",
            ));
        }
        session.clear_blockage();
        return Ok(HandlerReply::message(
            "With a swing of the pickaxe, the rubble blocking the exit crumbles! The way is clear.",
        ));
    }

    let message = format!("You try to use the {item_name} on the {target_name}.");
    let narration = NarrationRequest::Use {
        item: item_name.to_string(),
        target: target_name.to_string(),
        success: false,
        message: format!("{message} Nothing seems to happen."),
    };
    Ok(HandlerReply::with_narration(message, narration))
}

/// Handle `talk <npc>`. The reply is minimal; the NPC's canned dialogue
/// travels in the narration request for the collaborator to voice.
pub fn handle_talk(session: &mut GameSession, npc_name: Option<&str>) -> HandlerResult {
    let Some(npc_name) = npc_name else {
        return Ok(HandlerReply::message("Talk to whom?"));
    };

    let location = session.current_location()?;
    let Some(npc) = location.find_npc(npc_name) else {
        return Ok(HandlerReply::message(format!(
            "You don't see anyone named '{npc_name}' here."
        )));
    };

    let actual_name = npc.name.clone();
    let dialogue = npc
        .dialogue
        .clone()
        .unwrap_or_else(|| "\"...\" (They don't seem talkative.)".to_string());

    let narration = NarrationRequest::Talk {
        npc: actual_name.clone(),
        dialogue,
        message: format!("You talk to the {actual_name}."),
    };
    Ok(HandlerReply::with_narration(
        format!("You approach the {actual_name}..."),
        narration,
    ))
}
