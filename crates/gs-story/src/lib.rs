//! Narrative play for Grey Stratum.
//!
//! Provides the scene graph with branching choices, content loading,
//! the append-only mission log, and a [`GameSession`] that ties them to
//! the check resolver in `gs-mechanics`.

pub mod config;
pub mod content;
pub mod error;
pub mod log;
pub mod narrative;
pub mod session;

pub use config::SessionConfig;
pub use content::Content;
pub use error::{StoryError, StoryResult};
pub use log::{LogEntry, MissionLog};
pub use narrative::{Branch, Choice, Narrative, Scene, TrackEffect};
pub use session::{ChoiceReport, GameSession};
