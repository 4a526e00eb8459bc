//! Command dispatch and game-state engine for Caveward.
//!
//! One [`GameSession`] owns the location table, the live character, the
//! action registry, and the tutorial/discovery state for a single player.
//! A turn is fully synchronous: parse, resolve aliases, dispatch to a
//! handler, track discovery, evaluate quests, assemble the response. All
//! blocking I/O (saving, narration) happens outside the session, before or
//! after [`GameSession::process_turn`].

/// Action handlers, one per gameplay verb.
pub mod actions;
/// Tracks which verbs a session has successfully used.
pub mod discovery;
/// Error types for the engine.
pub mod error;
/// Narration requests, contexts, and the narrator boundary.
pub mod narrator;
/// Raw-input parsing.
pub mod parser;
/// Typed location patches replayed from persisted modification records.
pub mod patch;
/// Quest completion evaluation.
pub mod quests;
/// The verb-to-handler registry.
pub mod registry;
/// The turn orchestrator.
pub mod session;
/// The scripted early-game tutorial gate.
pub mod tutorial;
/// Alias, direction, and flavor-verb lookup tables.
pub mod vocabulary;

/// Re-export error types.
pub use error::{EngineError, EngineResult, HandlerError};
/// Re-export narration types.
pub use narrator::{NarrationContext, NarrationRequest, Narrator, TemplateNarrator};
/// Re-export the parser entry point.
pub use parser::{ParsedCommand, parse_command};
/// Re-export session types.
pub use session::{GameSession, SessionSeed, SessionSnapshot, TurnOutcome};
/// Re-export the vocabulary tables.
pub use vocabulary::Vocabulary;
