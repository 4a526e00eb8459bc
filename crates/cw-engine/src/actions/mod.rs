//! Action handlers, one per gameplay verb.
//!
//! Every handler has the same contract: it receives the session and an
//! optional argument, and returns a [`HandlerReply`]: a display message
//! plus an optional structured narration request. Handlers never call the
//! narration collaborator themselves. An `Err` marks an internal defect,
//! which the orchestrator converts into the reserved error message.

/// Combat handlers.
pub mod combat;
/// The narrate-only flavor handler.
pub mod flavor;
/// Item and NPC interaction handlers.
pub mod interaction;
/// Movement handlers.
pub mod movement;
/// Observation handlers: look, inventory, status, quests.
pub mod observation;
/// Skill-check handlers.
pub mod skills;

use crate::error::HandlerError;
use crate::narrator::NarrationRequest;
use crate::session::GameSession;

/// Result type shared by all handlers.
pub type HandlerResult = Result<HandlerReply, HandlerError>;

/// The function signature every canonical handler implements.
pub type HandlerFn = fn(&mut GameSession, Option<&str>) -> HandlerResult;

/// A handler's reply for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerReply {
    /// The display message shown to the player.
    pub message: String,
    /// Structured context for the narration collaborator, when narration
    /// is wanted.
    pub narration: Option<NarrationRequest>,
    /// False when the handler hit a content defect: the reply is still
    /// shown, but the turn does not count as discovering the action.
    pub mechanical_success: bool,
}

impl HandlerReply {
    /// A plain successful reply with no narration.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            narration: None,
            mechanical_success: true,
        }
    }

    /// A successful reply carrying a narration request.
    pub fn with_narration(message: impl Into<String>, narration: NarrationRequest) -> Self {
        Self {
            message: message.into(),
            narration: Some(narration),
            mechanical_success: true,
        }
    }

    /// A reply reporting a content defect. Shown to the player, but the
    /// action does not count as discovered.
    pub fn defect(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            narration: None,
            mechanical_success: false,
        }
    }
}

/// Canonical verbs and their handlers. The registry is built from this
/// table; its length is the "total discoverable actions" count.
pub const CANONICAL: &[(&str, HandlerFn)] = &[
    ("go", movement::handle_go),
    ("look", observation::handle_look),
    ("inventory", observation::handle_inventory),
    ("status", observation::handle_status),
    ("quests", observation::handle_quests),
    ("get", interaction::handle_get),
    ("drop", interaction::handle_drop),
    ("use", interaction::handle_use),
    ("talk", interaction::handle_talk),
    ("attack", combat::handle_attack),
    ("check", skills::handle_check),
];
