//! The narrate-only flavor handler.
//!
//! Flavor verbs have no game logic; the attempt always "succeeds" and the
//! narration collaborator supplies the prose.

use super::HandlerReply;
use crate::narrator::NarrationRequest;
use crate::session::GameSession;

/// Handle any narrate-only verb. Unlike canonical handlers this receives
/// the verb itself, since one handler serves the whole flavor vocabulary.
pub fn handle_flavor(
    _session: &mut GameSession,
    verb: &str,
    argument: Option<&str>,
) -> HandlerReply {
    let message = match argument {
        Some(argument) => format!("You attempt to {verb} {argument}..."),
        None => format!("You attempt to {verb}..."),
    };

    let attempt = match argument {
        Some(argument) => format!("You try to {verb} {argument}."),
        None => format!("You try to {verb}."),
    };
    let narration = NarrationRequest::Flavor {
        command: verb.to_string(),
        argument: argument.map(str::to_string),
        success: true,
        message: attempt,
    };

    HandlerReply::with_narration(message, narration)
}
