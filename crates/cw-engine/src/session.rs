//! The turn orchestrator: one [`GameSession`] per player, one turn at a
//! time.

use std::collections::{BTreeSet, HashMap};

use cw_core::modification::KIND_REPLACE_DESCRIPTION;
use cw_core::{Character, Location, ModificationRecord, Quest, content};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use strsim::jaro_winkler;
use tracing::{error, warn};

use crate::actions::flavor;
use crate::discovery::DiscoveryTracker;
use crate::error::{EngineError, EngineResult, HandlerError};
use crate::narrator::NarrationRequest;
use crate::parser;
use crate::patch::LocationPatch;
use crate::quests;
use crate::registry::{ActionRegistry, RegistryEntry};
use crate::tutorial::Tutorial;
use crate::vocabulary::Vocabulary;

/// The reserved message shown when a handler fails internally. Its prefix
/// marks the turn as an internal error rather than an in-fiction response.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "[Game Error: An internal error occurred performing that action.]";

/// Minimum similarity for an unknown-verb suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Previously persisted state used to resume a session, or defaults for a
/// fresh one.
#[derive(Debug, Clone, Default)]
pub struct SessionSeed {
    /// The character to resume, or `None` to start the built-in one.
    pub character: Option<Character>,
    /// Canonical actions already discovered.
    pub discovered_actions: BTreeSet<String>,
    /// Narrate-only verbs already discovered.
    pub discovered_flavor_verbs: BTreeSet<String>,
    /// Whether the tutorial tool was already taken.
    pub pickaxe_taken: bool,
    /// Whether the tutorial blockage was already cleared.
    pub blockage_cleared: bool,
}

impl SessionSeed {
    /// A fresh session with no prior state.
    pub fn fresh() -> Self {
        Self::default()
    }
}

/// The result of one processed turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// The display message for the player.
    pub message: String,
    /// Structured narration context, when the turn wants narration.
    pub narration: Option<NarrationRequest>,
    /// True exactly the first time a canonical action succeeds.
    pub newly_discovered: bool,
    /// The verb just discovered, when `newly_discovered` is true.
    pub discovered_verb: Option<String>,
}

/// Character progress numbers for display.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterStatus {
    /// Current HP.
    pub hp: u32,
    /// Maximum HP.
    pub max_hp: u32,
    /// Character level.
    pub level: u32,
    /// Total XP.
    pub xp: u32,
    /// XP required for the next level.
    pub xp_needed: u32,
}

/// A progress snapshot for UI display.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// Character progress numbers.
    pub character_status: CharacterStatus,
    /// Inventory item names.
    pub inventory: Vec<String>,
    /// Active quest names.
    pub active_quests: Vec<String>,
    /// Current location name.
    pub location_name: String,
    /// Discovered canonical actions, sorted.
    pub discovered_actions: Vec<String>,
    /// Total discoverable actions.
    pub total_actions: usize,
    /// Discovered narrate-only verbs, sorted.
    pub discovered_flavor_verbs: Vec<String>,
}

/// One player's game state and the machinery to advance it a turn at a
/// time. Turns are strictly sequential; the session is single-owner and
/// never shared between in-flight turns.
#[derive(Debug)]
pub struct GameSession {
    locations: HashMap<String, Location>,
    quests: HashMap<String, Quest>,
    character: Character,
    tutorial: Tutorial,
    discovery: DiscoveryTracker,
    vocabulary: Vocabulary,
    registry: ActionRegistry,
    pending_modifications: Vec<ModificationRecord>,
    rng: StdRng,
}

impl GameSession {
    /// Construct a session over the built-in world content.
    pub fn new(seed: SessionSeed, vocabulary: Vocabulary, rng: StdRng) -> EngineResult<Self> {
        Self::with_content(content::locations(), content::quests(), seed, vocabulary, rng)
    }

    /// Construct a fresh session with the standard vocabulary and an
    /// OS-seeded RNG.
    pub fn with_defaults() -> EngineResult<Self> {
        Self::new(
            SessionSeed::fresh(),
            Vocabulary::standard(),
            StdRng::from_os_rng(),
        )
    }

    /// Construct a session over explicit content tables. Content defects
    /// are reported but not fatal; a character starting in an unknown
    /// location is.
    pub fn with_content(
        locations: HashMap<String, Location>,
        quests: HashMap<String, Quest>,
        seed: SessionSeed,
        vocabulary: Vocabulary,
        rng: StdRng,
    ) -> EngineResult<Self> {
        if locations.is_empty() {
            return Err(EngineError::EmptyWorld);
        }
        if let Err(defect) = content::validate(&locations, &quests) {
            warn!(%defect, "world content failed validation");
        }

        let character = seed.character.unwrap_or_else(content::starting_character);
        if !locations.contains_key(&character.current_location_id) {
            return Err(EngineError::StartLocationNotFound(
                character.current_location_id.clone(),
            ));
        }

        let registry = ActionRegistry::standard(&vocabulary);
        Ok(Self {
            locations,
            quests,
            character,
            tutorial: Tutorial::new(seed.pickaxe_taken, seed.blockage_cleared),
            discovery: DiscoveryTracker::new(
                seed.discovered_actions,
                seed.discovered_flavor_verbs,
            ),
            vocabulary,
            registry,
            pending_modifications: Vec::new(),
            rng,
        })
    }

    /// Replay persisted world changes onto the freshly-loaded location
    /// table. Called once after construction.
    pub fn apply_modifications(&mut self, records: &[ModificationRecord]) {
        for record in records {
            let Some(location) = self.locations.get_mut(&record.location_id) else {
                warn!(
                    location_id = %record.location_id,
                    "modification targets an unknown location, skipping"
                );
                continue;
            };
            if let Some(patch) = LocationPatch::parse(record) {
                patch.apply(location);
            }
        }
    }

    /// Process one turn: parse, resolve aliases, dispatch, track
    /// discovery, evaluate quests, assemble the response.
    pub fn process_turn(&mut self, input: &str) -> TurnOutcome {
        let Some(parsed) = parser::parse_command(input) else {
            return TurnOutcome {
                message: "Please enter a command.".to_string(),
                narration: None,
                newly_discovered: false,
                discovered_verb: None,
            };
        };

        let raw_verb = parsed.verb;
        let mut argument = parsed.argument;
        let verb = self.vocabulary.canonical(&raw_verb).to_string();
        if verb == "go" {
            // A bare direction alias carries its direction as the argument.
            if let Some(direction) = self.vocabulary.direction(&raw_verb) {
                argument = Some(direction.to_string());
            }
        }

        let entry = self
            .registry
            .lookup(&verb)
            .or_else(|| self.registry.lookup(&raw_verb));

        let mut message;
        let mut narration = None;
        let mut newly_discovered = false;
        let mut discovered_verb = None;

        match entry {
            None => {
                message = format!("Sorry, I don't know how to '{verb}'.");
                if let Some(suggestion) = self.suggest_verb(&raw_verb) {
                    message.push_str(&format!(" Did you mean '{suggestion}'?"));
                }
            }
            Some(RegistryEntry::NarrateOnly) => {
                let reply = flavor::handle_flavor(self, &raw_verb, argument.as_deref());
                message = reply.message;
                narration = reply.narration;
                self.discovery.record_flavor_verb(&raw_verb);
            }
            Some(RegistryEntry::Handler(handler)) => match handler(self, argument.as_deref()) {
                Ok(reply) => {
                    if reply.mechanical_success && self.discovery.record_action(&verb) {
                        newly_discovered = true;
                        discovered_verb = Some(verb.clone());
                    }
                    message = reply.message;
                    narration = reply.narration;
                }
                Err(defect) => {
                    error!(verb = %verb, %defect, "handler failed");
                    message = INTERNAL_ERROR_MESSAGE.to_string();
                }
            },
        }

        if !quests::QUEST_EXEMPT_VERBS.contains(&verb.as_str()) {
            if let Some(quest_message) = quests::evaluate(&mut self.character, &self.quests) {
                if message.is_empty() {
                    message = quest_message;
                } else {
                    message.push_str("\n\n");
                    message.push_str(&quest_message);
                }
            }
        }

        TurnOutcome {
            message,
            narration,
            newly_discovered,
            discovered_verb,
        }
    }

    /// The live character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Mutable character access for handlers and quest evaluation.
    pub(crate) fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    /// The location table.
    pub fn locations(&self) -> &HashMap<String, Location> {
        &self.locations
    }

    /// The quest table.
    pub fn quests(&self) -> &HashMap<String, Quest> {
        &self.quests
    }

    /// The location the character currently occupies. The id always
    /// resolves with consistent content; a miss is an internal defect.
    pub fn current_location(&self) -> Result<&Location, HandlerError> {
        let id = &self.character.current_location_id;
        self.locations
            .get(id)
            .ok_or_else(|| HandlerError::LocationMissing(id.clone()))
    }

    /// Mutable access to the current location.
    pub(crate) fn current_location_mut(&mut self) -> Result<&mut Location, HandlerError> {
        let id = self.character.current_location_id.clone();
        self.locations
            .get_mut(&id)
            .ok_or(HandlerError::LocationMissing(id))
    }

    /// Tutorial gate state.
    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    /// Record that the tutorial tool was taken.
    pub(crate) fn mark_tool_taken(&mut self) {
        self.tutorial.pickaxe_taken = true;
    }

    /// Clear the tutorial blockage: flips the flag, rewrites the tutorial
    /// room's description in place, and queues the replacement for
    /// persistence.
    pub(crate) fn clear_blockage(&mut self) {
        self.tutorial.blockage_cleared = true;
        let Some(location) = self.locations.get_mut(content::TUTORIAL_ROOM) else {
            warn!("tutorial room missing; blockage clearing not recorded");
            return;
        };
        let description = location.description.replace(
            content::BLOCKAGE_SENTENCE,
            content::BLOCKAGE_CLEARED_SENTENCE,
        );
        location.description = description.clone();
        self.pending_modifications.push(ModificationRecord::new(
            content::TUTORIAL_ROOM,
            KIND_REPLACE_DESCRIPTION,
            description,
        ));
    }

    /// Queue a world change for the caller to persist.
    pub(crate) fn queue_modification(&mut self, record: ModificationRecord) {
        self.pending_modifications.push(record);
    }

    /// Drain the world changes queued since the last call. The caller
    /// persists these through its storage collaborator after each turn.
    pub fn take_pending_modifications(&mut self) -> Vec<ModificationRecord> {
        std::mem::take(&mut self.pending_modifications)
    }

    /// The session RNG, used by combat and skill checks.
    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Discovered canonical actions, sorted.
    pub fn discovered_actions(&self) -> &BTreeSet<String> {
        self.discovery.actions()
    }

    /// Discovered narrate-only verbs, sorted.
    pub fn discovered_flavor_verbs(&self) -> &BTreeSet<String> {
        self.discovery.flavor_verbs()
    }

    /// Total discoverable actions, for progress display.
    pub fn total_actions(&self) -> usize {
        self.registry.total_actions()
    }

    /// A progress snapshot for UI display.
    pub fn snapshot(&self) -> SessionSnapshot {
        let location_name = self
            .current_location()
            .map(|location| location.name.clone())
            .unwrap_or_else(|_| "Unknown".to_string());
        let active_quests = self
            .character
            .active_quests
            .iter()
            .map(|quest_id| {
                self.quests
                    .get(quest_id)
                    .map_or_else(|| quest_id.clone(), |quest| quest.name.clone())
            })
            .collect();

        SessionSnapshot {
            character_status: CharacterStatus {
                hp: self.character.hp,
                max_hp: self.character.max_hp,
                level: self.character.level,
                xp: self.character.xp,
                xp_needed: self.character.xp_needed(),
            },
            inventory: self.character.inventory.clone(),
            active_quests,
            location_name,
            discovered_actions: self.discovery.actions().iter().cloned().collect(),
            total_actions: self.registry.total_actions(),
            discovered_flavor_verbs: self.discovery.flavor_verbs().iter().cloned().collect(),
        }
    }

    fn suggest_verb(&self, input: &str) -> Option<String> {
        let mut best: Option<(&str, f64)> = None;
        for verb in self.registry.verbs() {
            let score = jaro_winkler(input, verb);
            if score >= SUGGESTION_THRESHOLD
                && best.is_none_or(|(_, best_score)| score > best_score)
            {
                best = Some((verb, score));
            }
        }
        best.map(|(verb, _)| verb.to_string())
    }
}
