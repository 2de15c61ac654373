//! Mission log entry types.

use chrono::{DateTime, Utc};
use gs_mechanics::CheckOutcome;
use serde::{Deserialize, Serialize};

/// A single entry in the mission log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogEntry {
    /// The player arrived in a scene.
    SceneEntered {
        /// Scene id.
        scene: String,
        /// Scene heading.
        title: String,
        /// When the scene was entered.
        timestamp: DateTime<Utc>,
    },
    /// The player picked a choice.
    ChoiceMade {
        /// Scene the choice was made in.
        scene: String,
        /// The choice's label.
        label: String,
        /// When the choice was made.
        timestamp: DateTime<Utc>,
    },
    /// A check was resolved.
    CheckResolved {
        /// The full outcome.
        outcome: CheckOutcome,
        /// When the check was rolled.
        timestamp: DateTime<Utc>,
    },
    /// A meter changed.
    TrackAdjusted {
        /// Meter name.
        track: String,
        /// Change applied after clamping to the meter's bounds.
        delta: i32,
        /// Value after clamping.
        value: i32,
        /// When the change was applied.
        timestamp: DateTime<Utc>,
    },
    /// A player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl LogEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SceneEntered { timestamp, .. }
            | Self::ChoiceMade { timestamp, .. }
            | Self::CheckResolved { timestamp, .. }
            | Self::TrackAdjusted { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}
