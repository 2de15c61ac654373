//! Loading characters and narratives from content files.
//!
//! Content is JSON with a `character` sheet and a `narrative` graph.
//! Every load builds fresh values; nothing is cached or shared.

use std::path::Path;

use gs_mechanics::CharacterSheet;
use serde::{Deserialize, Serialize};

use crate::error::StoryResult;
use crate::narrative::{self, Issue, Narrative};

const SAMPLE: &str = include_str!("../content/sample.json");

/// A playable bundle: the character and the narrative they play through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// The player character.
    pub character: CharacterSheet,
    /// The scene graph.
    pub narrative: Narrative,
}

impl Content {
    /// Parse content from a JSON string.
    pub fn from_json_str(json: &str) -> StoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a content file.
    pub fn from_path(path: &Path) -> StoryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// A fresh copy of the bundled sample mission.
    pub fn sample() -> StoryResult<Self> {
        Self::from_json_str(SAMPLE)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the narrative against the character.
    pub fn validate(&self) -> Vec<Issue> {
        narrative::validate(&self.narrative, &self.character)
    }
}
