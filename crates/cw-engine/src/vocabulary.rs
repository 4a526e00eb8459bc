//! Alias, direction, and flavor-verb lookup tables.
//!
//! These are immutable data injected into the session at construction, not
//! mutable class state. [`Vocabulary::standard`] builds the full built-in
//! vocabulary; tests can construct smaller ones.

use std::collections::HashMap;

/// Surface verbs mapped to their canonical verb.
const ALIASES: &[(&str, &str)] = &[
    ("north", "go"),
    ("n", "go"),
    ("south", "go"),
    ("s", "go"),
    ("east", "go"),
    ("e", "go"),
    ("west", "go"),
    ("w", "go"),
    ("up", "go"),
    ("u", "go"),
    ("down", "go"),
    ("d", "go"),
    ("l", "look"),
    ("examine", "look"),
    ("inv", "inventory"),
    ("i", "inventory"),
    ("stats", "status"),
    ("score", "status"),
    ("journal", "quests"),
    ("q", "quests"),
    ("take", "get"),
    ("ask", "talk"),
    ("hit", "attack"),
    ("fight", "attack"),
];

/// Direction aliases mapped to their full direction name. Used to turn a
/// bare "n" into `go north`.
const DIRECTIONS: &[(&str, &str)] = &[
    ("north", "north"),
    ("n", "north"),
    ("south", "south"),
    ("s", "south"),
    ("east", "east"),
    ("e", "east"),
    ("west", "west"),
    ("w", "west"),
    ("up", "up"),
    ("u", "up"),
    ("down", "down"),
    ("d", "down"),
];

/// Verbs with no mechanical effect, handled by narration alone. A large
/// open-ended vocabulary of flavor actions; adding one is a single line.
const FLAVOR_VERBS: &[&str] = &[
    // Generic flavor actions
    "dance", "sing", "ponder", "scream", "laugh", "cry", "wave", "sleep", "jump", "listen",
    "smell",
    // Classic text-adventure incantations
    "xyzzy", "plugh", "frobozz", "zork", "diagnose", "hello", "sailor", "sesame",
    // 80s pop culture
    "flux", "ghostbusters", "macgyver", "grayskull", "thriller", "pacman", "radical", "gnarly",
    "bodacious",
    // Hippies
    "peace", "love", "groovy", "incense", "tie-dye", "meditate", "protest", "commune", "tune-in",
    "drop-out",
    // Punks
    "pogo", "rebel", "safety-pin", "mohawk", "thrash", "sneer", "spit", "anarchy", "diy", "slam",
    // Disco dancers
    "boogie", "hustle", "strut", "funk", "groove", "spin", "pose", "shimmer", "platform",
    "leisure",
    // Yuppies
    "network", "power-lunch", "suspenders", "briefcase", "merger", "acquire", "cellphone",
    "uptown", "schmooze",
    // New wavers
    "synthesizer", "angular", "quirky", "keytar", "skinny-tie", "gel", "ironic", "devo", "bleep",
    // Metalheads
    "headbang", "shred", "riff", "metal", "leather", "denim", "horns", "moshing", "solo", "amp",
    // Grunge fans
    "flannel", "angst", "slouch", "feedback", "seattle", "mumble", "unplugged", "thrift",
    "overcast", "brood",
    // Riot grrrls
    "zine", "feminist", "shout", "marker", "manifesto", "empower", "underground", "kathleen",
    "bikini-kill", "fierce",
    // Dot-com entrepreneurs
    "ipo", "bubble", "burn-rate", "ping-pong", "stock-options", "disrupt", "synergy", "vaporware",
    "clickthrough", "iterate",
    // Skaters
    "ollie", "kickflip", "grind", "shove-it", "vert", "ramp", "deck", "trucks", "bail",
    // Ravers
    "glowstick", "trance", "techno", "plur", "warehouse", "sunrise", "hydrate", "kandi",
    "shuffle", "bass",
    // Hip hop heads
    "beatbox", "breakdance", "graffiti", "sample", "cypher", "freestyle", "turntable", "mic",
    "flow", "rhyme",
    // Emo kids
    "myspace", "sideswept", "tight-jeans", "heartache", "confessional", "acoustic", "journal",
    "eyeliner", "sensitive", "rawr",
    // Hipsters
    "irony", "fixed-gear", "vinyl", "artisan", "mustache", "obscure", "craft-beer", "fedora",
    "curated", "portland",
    // Silicon Valley techies
    "agile", "scrum", "standup", "unicorn", "ping", "server", "code", "deploy", "optimize",
    // Preppers
    "bunker", "stockpile", "shtf", "survival", "canned-goods", "generator", "off-grid", "barter",
    "bug-out", "cache",
    // Foodies
    "gourmet", "farm-to-table", "fusion", "umami", "deconstructed", "food-truck", "gastropub",
    "blog", "forage", "organic",
    // Gamers
    "level-up", "pwn", "noob", "respawn", "lag", "cheat-code", "easter-egg", "console",
    "joystick",
    // Environmentalists
    "recycle", "conserve", "earth", "solar", "wind-power", "sustainable", "activism", "green",
    "carbon-footprint", "native",
    // Cosplayers
    "costume", "convention", "wig", "craft-foam", "worbla", "anime", "manga", "panel",
    "autograph", "transform",
    // Modern slang
    "rizz", "gyat", "skibidi", "fanumtax", "sigma", "ohio", "delulu", "bet", "cap", "nocap",
    "sus", "bussin", "slay", "periodt", "giving", "ick", "simp", "yeet", "pog", "based", "mid",
    "glowup", "cook", "aura", "mog", "mewing", "brainrot", "goated", "touchgrass", "ate", "fr",
    "ngl", "tbh", "iykyk", "stan", "shook", "basic", "bougie", "cringe", "extra", "vibe", "yass",
    "zesty",
    // Musical lovers
    "encore", "intermission", "ovation", "spotlight", "chorus", "ballad", "showstopper",
    "matinee", "belt", "jazzhands",
    // Common verbs without game logic
    "walk", "run", "move", "step", "crawl", "climb", "push", "pull", "touch", "open", "close",
    "read", "write", "eat", "drink", "throw", "wait", "help", "sit", "stand",
];

/// Immutable verb lookup tables for one session.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    aliases: HashMap<String, String>,
    directions: HashMap<String, String>,
    flavor_verbs: Vec<String>,
}

impl Vocabulary {
    /// Build the full built-in vocabulary.
    pub fn standard() -> Self {
        Self::from_tables(ALIASES, DIRECTIONS, FLAVOR_VERBS)
    }

    /// Build a vocabulary from explicit tables.
    pub fn from_tables(
        aliases: &[(&str, &str)],
        directions: &[(&str, &str)],
        flavor_verbs: &[&str],
    ) -> Self {
        Self {
            aliases: aliases
                .iter()
                .map(|(alias, verb)| (alias.to_string(), verb.to_string()))
                .collect(),
            directions: directions
                .iter()
                .map(|(alias, name)| (alias.to_string(), name.to_string()))
                .collect(),
            flavor_verbs: flavor_verbs.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Resolve a surface verb to its canonical verb. Verbs without an alias
    /// entry are already canonical.
    pub fn canonical<'a>(&'a self, verb: &'a str) -> &'a str {
        self.aliases.get(verb).map_or(verb, String::as_str)
    }

    /// Resolve a direction alias to its full direction name.
    pub fn direction(&self, verb: &str) -> Option<&str> {
        self.directions.get(verb).map(String::as_str)
    }

    /// All alias pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, verb)| (alias.as_str(), verb.as_str()))
    }

    /// All flavor (narrate-only) verbs.
    pub fn flavor_verbs(&self) -> impl Iterator<Item = &str> {
        self.flavor_verbs.iter().map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
