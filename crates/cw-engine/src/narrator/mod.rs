//! Narration requests, contexts, and the narrator boundary.
//!
//! Handlers produce structured [`NarrationRequest`] values; they never call
//! the narration collaborator themselves. The caller merges a request with
//! full character and location state into a [`NarrationContext`] and hands
//! it to whatever [`Narrator`] it wires in: an LLM in production, the
//! deterministic [`TemplateNarrator`] offline.

mod context;
mod request;
mod templates;

pub use context::NarrationContext;
pub use request::NarrationRequest;
pub use templates::TemplateNarrator;

/// The system prompt handed to an LLM narrator alongside each context.
pub const SYSTEM_PROMPT: &str = "\
You are a Dungeon Master (DM) running a fun, light-hearted fantasy adventure game \
for your friends. You are fair and impartial, but also clever and funny.
Your Role: Describe locations, objects, NPCs, and action results based only on \
provided context. Use descriptive, engaging, concise language (2-4 sentences). \
Maintain a light-hearted, witty tone. Refer to the player as 'you'.
Constraints: Be fair. Do NOT decide player actions/feelings. Do NOT invent \
rules/items/NPCs/locations. Base narration strictly on 'Last Action Outcome' \
(hit/miss, success/fail). Do NOT repeat location descriptions unless the player \
uses 'look'. Do NOT ask \"What do you do next?\".
Response Format: Only the DM's narrative description.
Current Situation:";

/// The narration collaborator boundary. Implementations render a context
/// into narrative prose; the engine never calls this itself.
pub trait Narrator {
    /// Produce narrative text for the given context.
    fn narrate(&self, context: &NarrationContext) -> String;
}
