//! Tracks which verbs a session has successfully used, for progress
//! display. Membership is monotone: verbs are never removed.

use std::collections::BTreeSet;

/// Two monotone sets: discovered canonical actions and discovered
/// narrate-only verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryTracker {
    actions: BTreeSet<String>,
    flavor_verbs: BTreeSet<String>,
}

impl DiscoveryTracker {
    /// Restore a tracker from persisted sets.
    pub fn new(actions: BTreeSet<String>, flavor_verbs: BTreeSet<String>) -> Self {
        Self {
            actions,
            flavor_verbs,
        }
    }

    /// Record a successful canonical action. Returns true exactly the
    /// first time the verb is recorded.
    pub fn record_action(&mut self, verb: &str) -> bool {
        self.actions.insert(verb.to_string())
    }

    /// Record a narrate-only verb. Returns true the first time, though the
    /// session never surfaces this as a turn-level discovery flag.
    pub fn record_flavor_verb(&mut self, verb: &str) -> bool {
        self.flavor_verbs.insert(verb.to_string())
    }

    /// Discovered canonical actions, sorted.
    pub fn actions(&self) -> &BTreeSet<String> {
        &self.actions
    }

    /// Discovered narrate-only verbs, sorted.
    pub fn flavor_verbs(&self) -> &BTreeSet<String> {
        &self.flavor_verbs
    }
}
