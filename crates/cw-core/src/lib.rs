//! Core types for Caveward: the player character, the location table, quest
//! definitions, and the built-in world content.
//!
//! This crate defines the data model the game engine operates on. It is
//! independent of command dispatch — you can construct a character or a
//! location table programmatically or deserialize one from JSON.

/// The player character and its mutation methods.
pub mod character;
/// Built-in world content: starting character, locations, quests.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Locations, their items, NPCs, and exits.
pub mod location;
/// Persisted world-change records.
pub mod modification;
/// Quest definitions and completion criteria.
pub mod quest;

/// Re-export the character type.
pub use character::Character;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export location types.
pub use location::{Item, Location, Npc};
/// Re-export modification records.
pub use modification::ModificationRecord;
/// Re-export quest types.
pub use quest::{Quest, QuestCriteria};
