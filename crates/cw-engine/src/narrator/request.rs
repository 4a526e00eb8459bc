//! Structured narration requests produced by action handlers.

use serde::{Deserialize, Serialize};

/// What happened this turn, in enough detail for a narrator to render
/// prose. Every variant carries a human-readable `message` summarizing the
/// outcome, used verbatim as the narrator's "last action outcome" line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NarrationRequest {
    /// An attack was attempted.
    Attack {
        /// Description of the target.
        target: String,
        /// Whether the blow landed.
        hit: bool,
        /// Damage dealt; 0 on a miss.
        damage: u32,
        /// Outcome summary.
        message: String,
    },
    /// The player spoke to an NPC.
    Talk {
        /// The NPC's name.
        npc: String,
        /// The NPC's canned dialogue line, for the narrator to voice.
        dialogue: String,
        /// Outcome summary.
        message: String,
    },
    /// A skill check was rolled.
    SkillCheck {
        /// The skill checked.
        skill: String,
        /// The die roll.
        roll: u32,
        /// The character's skill value.
        value: u32,
        /// The difficulty the total was compared against.
        dc: u32,
        /// Whether roll + value met the difficulty.
        success: bool,
        /// Outcome summary including the arithmetic.
        message: String,
    },
    /// An item was used on a target with no specific game logic.
    Use {
        /// The item used.
        item: String,
        /// The stated target.
        target: String,
        /// Whether anything mechanically happened.
        success: bool,
        /// Outcome summary.
        message: String,
    },
    /// A narrate-only flavor verb was attempted.
    Flavor {
        /// The verb typed.
        command: String,
        /// Any argument after the verb.
        argument: Option<String>,
        /// Always true; the attempt itself succeeds.
        success: bool,
        /// Outcome summary.
        message: String,
    },
    /// The player used an action for the first time; the narrator should
    /// congratulate them. Built by the caller, not by handlers.
    Discovery {
        /// The newly discovered verb.
        verb: String,
        /// Instructions for the narrator.
        message: String,
    },
}

impl NarrationRequest {
    /// Build the caller-side discovery override for a newly found verb.
    pub fn discovery(verb: &str) -> Self {
        Self::Discovery {
            verb: verb.to_string(),
            message: format!(
                "NEW ACTION DISCOVERED! Congratulate the player on discovering how to \
                 use the '{verb}' command and briefly explain its general purpose."
            ),
        }
    }

    /// The outcome summary line.
    pub fn summary(&self) -> &str {
        match self {
            Self::Attack { message, .. }
            | Self::Talk { message, .. }
            | Self::SkillCheck { message, .. }
            | Self::Use { message, .. }
            | Self::Flavor { message, .. }
            | Self::Discovery { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_tag_their_action_kind() {
        let request = NarrationRequest::Attack {
            target: "a goblin".to_string(),
            hit: true,
            damage: 5,
            message: "You attack the goblin.".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serializes");
        assert!(json.contains("\"action\":\"attack\""));
    }

    #[test]
    fn summary_returns_the_message_field() {
        let request = NarrationRequest::Flavor {
            command: "dance".to_string(),
            argument: None,
            success: true,
            message: "You try to dance.".to_string(),
        };
        assert_eq!(request.summary(), "You try to dance.");
    }
}
