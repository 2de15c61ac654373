//! Error types for narrative play.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading content or playing a session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// A scene id does not exist in the narrative.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A choice index is out of range for the current scene.
    #[error("invalid choice: {index} (scene has {available})")]
    InvalidChoice {
        /// The requested 1-based index.
        index: usize,
        /// How many choices the scene offers.
        available: usize,
    },

    /// The current scene offers no choices.
    #[error("the story has ended")]
    StoryFinished,

    /// Content could not be parsed.
    #[error("invalid content: {0}")]
    Content(#[from] serde_json::Error),

    /// Content could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Mechanics engine error.
    #[error("{0}")]
    Mechanics(#[from] gs_mechanics::MechError),
}
