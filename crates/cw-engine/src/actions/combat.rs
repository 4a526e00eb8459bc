//! Combat handlers.
//!
//! Combat is stateless: a weighted hit/miss draw and a fixed damage figure,
//! packaged for narration. NPC hit points and defeat are not tracked.

use rand::Rng;

use super::{HandlerReply, HandlerResult};
use crate::narrator::NarrationRequest;
use crate::session::GameSession;

/// Probability that an attack lands.
const HIT_CHANCE: f64 = 0.6;
/// Damage dealt by a landed attack.
const ATTACK_DAMAGE: u32 = 5;

/// Handle `attack <target>`.
pub fn handle_attack(session: &mut GameSession, target_name: Option<&str>) -> HandlerResult {
    let Some(target_name) = target_name else {
        return Ok(HandlerReply::message(
            "Attack what? Please specify a target.",
        ));
    };

    let location = session.current_location()?;
    let Some(npc) = location.find_npc(target_name) else {
        return Ok(HandlerReply::message(format!(
            "You don't see '{target_name}' here to attack."
        )));
    };
    let target = npc.description.clone();

    let hit = session.rng_mut().random_bool(HIT_CHANCE);
    let narration = NarrationRequest::Attack {
        target: target.clone(),
        hit,
        damage: if hit { ATTACK_DAMAGE } else { 0 },
        message: format!("You attack the {target}."),
    };
    Ok(HandlerReply::with_narration(
        format!("You attempt to attack the {target}..."),
        narration,
    ))
}
