//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An attribute name did not match any known attribute.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A track was not found on the character sheet.
    #[error("track '{0}' not found")]
    TrackNotFound(String),

    /// A meter's bounds or starting value are inconsistent.
    #[error("invalid meter '{name}': {reason}")]
    InvalidTrack {
        /// Meter name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A scripted roll sequence is unusable.
    #[error("invalid roll: {0}")]
    InvalidRoll(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
