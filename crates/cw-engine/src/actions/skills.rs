//! Skill-check handlers.

use rand::Rng;

use super::{HandlerReply, HandlerResult};
use crate::narrator::NarrationRequest;
use crate::session::GameSession;

/// Fixed difficulty every check rolls against.
const DIFFICULTY: u32 = 7;

/// Handle `check <skill>`. Rolls 1d10 + skill value against the fixed
/// difficulty and packages the arithmetic for narration. Never mutates
/// state.
pub fn handle_check(session: &mut GameSession, skill_name: Option<&str>) -> HandlerResult {
    let Some(skill_name) = skill_name else {
        return Ok(HandlerReply::message(
            "Check what skill? Please specify a skill name.",
        ));
    };

    let value = session.character().skill(skill_name);
    let roll = session.rng_mut().random_range(1..=10);
    let success = roll + value >= DIFFICULTY;

    let narration = NarrationRequest::SkillCheck {
        skill: skill_name.to_string(),
        roll,
        value,
        dc: DIFFICULTY,
        success,
        message: format!(
            "You attempt to use your {skill_name} skill \
             (Roll: {roll} + Skill: {value} vs DC: {DIFFICULTY})..."
        ),
    };
    Ok(HandlerReply::with_narration(
        format!("You focus, attempting a {skill_name} check..."),
        narration,
    ))
}
