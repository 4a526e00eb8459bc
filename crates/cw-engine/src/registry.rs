//! The verb-to-handler registry, built once at session construction.

use std::collections::HashMap;

use tracing::warn;

use crate::actions::{self, HandlerFn};
use crate::vocabulary::Vocabulary;

/// What a registered verb dispatches to: a handler function, or nothing but
/// narration.
#[derive(Debug, Clone, Copy)]
pub enum RegistryEntry {
    /// A gameplay handler.
    Handler(HandlerFn),
    /// No game-logic effect; the verb is forwarded to narration.
    NarrateOnly,
}

/// Maps every registered verb and alias to its dispatch target. Read-only
/// after construction.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    entries: HashMap<String, RegistryEntry>,
    total_actions: usize,
}

impl ActionRegistry {
    /// Build the registry: canonical handlers first, then the narrate-only
    /// vocabulary (which never shadows a handler), then aliases (which take
    /// precedence over narrate-only verbs).
    pub fn standard(vocabulary: &Vocabulary) -> Self {
        let mut entries: HashMap<String, RegistryEntry> = actions::CANONICAL
            .iter()
            .map(|(verb, handler)| (verb.to_string(), RegistryEntry::Handler(*handler)))
            .collect();
        let total_actions = actions::CANONICAL.len();

        for verb in vocabulary.flavor_verbs() {
            if entries.contains_key(verb) {
                warn!(verb, "flavor verb conflicts with a canonical verb, skipping");
                continue;
            }
            entries.insert(verb.to_string(), RegistryEntry::NarrateOnly);
        }

        for (alias, canonical) in vocabulary.aliases() {
            let Some(entry) = entries.get(canonical).copied() else {
                warn!(alias, canonical, "alias targets an unregistered verb, skipping");
                continue;
            };
            if let Some(RegistryEntry::NarrateOnly) = entries.get(alias) {
                warn!(alias, "alias shadows a flavor verb");
            }
            entries.insert(alias.to_string(), entry);
        }

        Self {
            entries,
            total_actions,
        }
    }

    /// Look up a verb's dispatch target.
    pub fn lookup(&self, verb: &str) -> Option<RegistryEntry> {
        self.entries.get(verb).copied()
    }

    /// Number of distinct canonical handlers reachable through the
    /// registry. Used for discovery progress display, not gameplay.
    pub fn total_actions(&self) -> usize {
        self.total_actions
    }

    /// All registered verbs, aliases included.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_verbs_dispatch_to_handlers() {
        let registry = ActionRegistry::standard(&Vocabulary::standard());
        assert!(matches!(
            registry.lookup("go"),
            Some(RegistryEntry::Handler(_))
        ));
        assert!(matches!(
            registry.lookup("check"),
            Some(RegistryEntry::Handler(_))
        ));
    }

    #[test]
    fn flavor_verbs_are_narrate_only() {
        let registry = ActionRegistry::standard(&Vocabulary::standard());
        assert!(matches!(
            registry.lookup("xyzzy"),
            Some(RegistryEntry::NarrateOnly)
        ));
    }

    #[test]
    fn aliases_share_their_canonical_handler() {
        let registry = ActionRegistry::standard(&Vocabulary::standard());
        assert!(matches!(
            registry.lookup("take"),
            Some(RegistryEntry::Handler(_))
        ));
        // "journal" is both a flavor verb and an alias; the alias wins.
        assert!(matches!(
            registry.lookup("journal"),
            Some(RegistryEntry::Handler(_))
        ));
    }

    #[test]
    fn unknown_verbs_miss() {
        let registry = ActionRegistry::standard(&Vocabulary::standard());
        assert!(registry.lookup("frobnicate").is_none());
    }

    #[test]
    fn total_actions_counts_distinct_handlers() {
        let registry = ActionRegistry::standard(&Vocabulary::standard());
        assert_eq!(registry.total_actions(), 11);
    }
}
