//! Quest completion evaluation, run once per turn after the handler.

use std::collections::HashMap;

use cw_core::{Character, Quest};
use tracing::warn;

/// Canonical verbs whose turns never trigger a quest check; these are
/// read-only and cannot have changed anything worth checking.
pub const QUEST_EXEMPT_VERBS: &[&str] = &["status", "quests", "look", "inventory"];

/// Check the character's active quests in order and complete the first one
/// whose criteria are met; at most one quest completes per turn. Returns
/// the completion message, with a level-up line appended when the XP award
/// crossed a threshold.
pub fn evaluate(character: &mut Character, quests: &HashMap<String, Quest>) -> Option<String> {
    let mut completed: Option<&Quest> = None;
    for quest_id in &character.active_quests {
        let Some(quest) = quests.get(quest_id) else {
            warn!(quest_id = %quest_id, "active quest has no definition, skipping");
            continue;
        };
        if quest.criteria.is_met(character) {
            completed = Some(quest);
            break;
        }
    }

    let quest = completed?;
    character.remove_quest(&quest.id);
    let leveled_up = character.add_xp(quest.xp_reward);

    let mut message = format!("Quest Completed: {}! (+{} XP)", quest.name, quest.xp_reward);
    if leveled_up {
        message.push_str(&format!(
            "\n*** You reached Level {}! ***",
            character.level
        ));
    }
    Some(message)
}
