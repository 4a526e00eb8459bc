//! Movement handlers.

use cw_core::content;
use tracing::warn;

use super::{HandlerReply, HandlerResult, observation};
use crate::session::GameSession;

/// Handle `go <direction>`. Moves the character when the exit is valid and
/// the tutorial gate allows it; on success the reply is the new room view.
pub fn handle_go(session: &mut GameSession, direction: Option<&str>) -> HandlerResult {
    // The tutorial gate intercepts any attempt to leave through a real exit
    // of the tutorial room while the blockage stands, whichever alias the
    // player used to express the move.
    if session.character().current_location_id == content::TUTORIAL_ROOM {
        if let Some(direction) = direction {
            let gated = session.current_location()?.exit(direction).is_some()
                && !session.tutorial().blockage_cleared;
            if gated {
                return Ok(HandlerReply::message(session.tutorial().movement_hint()));
            }
        }
    }

    let Some(direction) = direction else {
        return Ok(HandlerReply::message(
            "Go where? Please specify a direction (e.g., north, east, up).",
        ));
    };

    let current = session.current_location()?;
    let Some(next_id) = current.exit(direction) else {
        return Ok(HandlerReply::message(format!(
            "You can't go {direction} from here."
        )));
    };
    let next_id = next_id.to_string();

    if !session.locations().contains_key(&next_id) {
        warn!(
            from = %current.id,
            direction,
            target = %next_id,
            "exit points at a location that does not exist"
        );
        return Ok(HandlerReply::defect(
            "[Error] That path seems to lead nowhere.",
        ));
    }

    session.character_mut().current_location_id = next_id;

    // The arrival message is the same view `look` produces.
    observation::handle_look(session, None)
}
