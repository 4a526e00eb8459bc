//! Save-file storage for Caveward sessions.
//!
//! The engine never touches storage itself; a caller loads state before
//! constructing a session and saves after each turn through the
//! [`SaveStore`] boundary. [`JsonStore`] is the built-in implementation:
//! one JSON document per character id in a data directory.

/// Error types for the store.
pub mod error;
/// The JSON-file store implementation.
pub mod json;
/// The storage boundary and the persisted state bundle.
pub mod store;

/// Re-export error types.
pub use error::{StoreError, StoreResult};
/// Re-export the JSON store.
pub use json::JsonStore;
/// Re-export the storage boundary.
pub use store::{SaveStore, SavedSession};
