//! Error types for the engine.

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal session errors. A session that cannot be constructed correctly
/// refuses to exist rather than run partially initialized.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The character's starting location id is not in the location table.
    #[error("starting location not found: '{0}'")]
    StartLocationNotFound(String),

    /// The location table is empty.
    #[error("no locations loaded")]
    EmptyWorld,
}

/// Internal handler failures: states a handler should never reach with
/// consistent content. The orchestrator converts these into the reserved
/// error message and suppresses discovery tracking for the turn.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The character's current location id is missing from the table.
    #[error("current location '{0}' is missing from the location table")]
    LocationMissing(String),

    /// An item was found in a location but could not be removed from it.
    #[error("item '{0}' was found but could not be removed from the location")]
    ItemStuck(String),

    /// An inventory item was found but could not be removed.
    #[error("inventory item '{0}' could not be removed")]
    InventoryStuck(String),

    /// An item could not be encoded for a persisted modification record.
    #[error("failed to encode item payload: {0}")]
    ItemEncoding(#[from] serde_json::Error),
}
