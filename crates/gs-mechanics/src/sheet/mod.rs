//! The character status card.
//!
//! A sheet carries identity (name, role, level), attribute values, and
//! HUD meters. Checks read attributes from it but never change it.

pub mod track;

pub use track::Track;

use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, AttributeSet};
use crate::error::{MechError, MechResult};

/// A character's mechanical state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Role or class shown on the status card.
    #[serde(default)]
    pub role: String,
    /// Progression level.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Attribute values.
    pub attributes: AttributeSet,
    /// HUD meters, in display order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

fn default_level() -> u32 {
    1
}

impl CharacterSheet {
    /// Create a level-1 sheet with no role and no meters.
    pub fn new(name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            name: name.into(),
            role: String::new(),
            level: default_level(),
            attributes,
            tracks: Vec::new(),
        }
    }

    /// Builder-style role setter.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builder-style meter setter.
    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Current value of an attribute.
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    /// Get a meter by name (case-insensitive).
    pub fn track(&self, name: &str) -> MechResult<&Track> {
        self.tracks
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MechError::TrackNotFound(name.to_string()))
    }

    /// Get a mutable meter by name (case-insensitive).
    pub fn track_mut(&mut self, name: &str) -> MechResult<&mut Track> {
        self.tracks
            .iter_mut()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MechError::TrackNotFound(name.to_string()))
    }

    /// Returns true if a meter with this name exists.
    pub fn has_track(&self, name: &str) -> bool {
        self.track(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vega() -> CharacterSheet {
        CharacterSheet::new(
            "Vega",
            AttributeSet::new()
                .with(Attribute::Phy, 4)
                .with(Attribute::Int, 3),
        )
        .with_role("Surveyor")
        .with_track(Track::new("Integrity", 10).unwrap())
    }

    #[test]
    fn attribute_lookup() {
        let sheet = vega();
        assert_eq!(sheet.attribute(Attribute::Phy), 4);
        assert_eq!(sheet.attribute(Attribute::Def), 0);
    }

    #[test]
    fn track_lookup_is_case_insensitive() {
        let sheet = vega();
        assert_eq!(sheet.track("integrity").unwrap().max(), 10);
        assert!(sheet.has_track("INTEGRITY"));
    }

    #[test]
    fn track_error() {
        let sheet = vega();
        assert!(matches!(
            sheet.track("Focus"),
            Err(MechError::TrackNotFound(ref n)) if n == "Focus"
        ));
    }

    #[test]
    fn track_mut_adjust() {
        let mut sheet = vega();
        sheet.track_mut("Integrity").unwrap().adjust(-2);
        assert_eq!(sheet.track("Integrity").unwrap().current(), 8);
    }

    #[test]
    fn deserialize_with_defaults() {
        let sheet: CharacterSheet =
            serde_json::from_str(r#"{"name":"Ash","attributes":{"PHY":2}}"#).unwrap();
        assert_eq!(sheet.level, 1);
        assert!(sheet.role.is_empty());
        assert!(sheet.tracks.is_empty());
        assert_eq!(sheet.attribute(Attribute::Phy), 2);
    }
}
