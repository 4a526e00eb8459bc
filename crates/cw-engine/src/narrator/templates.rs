//! A deterministic, offline narrator.
//!
//! Renders each request kind from a fixed template. Used when no LLM is
//! wired in, and in tests where narration must be reproducible.

use super::context::NarrationContext;
use super::request::NarrationRequest;
use super::Narrator;

/// The built-in template narrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    /// Create a template narrator.
    pub fn new() -> Self {
        Self
    }
}

impl Narrator for TemplateNarrator {
    fn narrate(&self, context: &NarrationContext) -> String {
        match &context.request {
            NarrationRequest::Attack {
                target,
                hit,
                damage,
                ..
            } => {
                if *hit {
                    format!("Your swing connects with {target}, dealing {damage} damage!")
                } else {
                    format!("You lunge at {target}, but the blow goes wide.")
                }
            }
            NarrationRequest::Talk { npc, dialogue, .. } => {
                format!("The {npc} eyes you and says: {dialogue}")
            }
            NarrationRequest::SkillCheck {
                skill,
                roll,
                value,
                dc,
                success,
                ..
            } => {
                let verdict = if *success {
                    format!("Your {skill} does not fail you.")
                } else {
                    format!("Your {skill} comes up short.")
                };
                format!("({roll} + {value} against DC {dc}) {verdict}")
            }
            NarrationRequest::Use { item, target, .. } => {
                format!("You work the {item} against the {target}, to no visible effect.")
            }
            NarrationRequest::Flavor { command, .. } => {
                format!("You {command} with great commitment. The cave is unmoved.")
            }
            NarrationRequest::Discovery { verb, .. } => {
                format!("A new trick learned: '{verb}' is now part of your repertoire!")
            }
        }
    }
}
