//! Error types for the core crate.

use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when validating world content.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An exit points at a location id that does not exist.
    #[error("location '{location}' exit '{direction}' points at unknown location '{target}'")]
    DanglingExit {
        /// Location holding the exit.
        location: String,
        /// Exit direction.
        direction: String,
        /// The missing target id.
        target: String,
    },

    /// A quest references a location id that does not exist.
    #[error("quest '{quest}' targets unknown location '{target}'")]
    UnknownQuestLocation {
        /// The offending quest id.
        quest: String,
        /// The missing location id.
        target: String,
    },
}
