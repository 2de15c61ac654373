//! Scenes and branching choices.
//!
//! A [`Narrative`] is a graph of [`Scene`]s keyed by id. Each scene offers
//! choices; a choice may carry a check, and branches on its outcome.

use std::collections::BTreeMap;

use gs_mechanics::{CharacterSheet, CheckRequest};
use serde::{Deserialize, Serialize};

/// A change to one of the character's meters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEffect {
    /// Meter name.
    pub track: String,
    /// Amount to change (positive or negative).
    pub delta: i32,
}

impl std::fmt::Display for TrackEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.delta >= 0 {
            write!(f, "{} +{}", self.track, self.delta)
        } else {
            write!(f, "{} {}", self.track, self.delta)
        }
    }
}

/// Where a choice leads, and what it costs or grants on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Scene to move to; `None` stays in the current scene.
    #[serde(default)]
    pub next: Option<String>,
    /// Meter changes applied when the branch is taken.
    #[serde(default)]
    pub effects: Vec<TrackEffect>,
}

impl Branch {
    /// A branch that moves to a scene with no effects.
    pub fn to(scene: impl Into<String>) -> Self {
        Self {
            next: Some(scene.into()),
            effects: Vec::new(),
        }
    }

    /// Builder-style effect setter.
    pub fn with_effect(mut self, track: impl Into<String>, delta: i32) -> Self {
        self.effects.push(TrackEffect {
            track: track.into(),
            delta,
        });
        self
    }
}

/// One option offered to the player in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown on the choice button.
    pub label: String,
    /// Check the choice requires, if any.
    #[serde(default)]
    pub check: Option<CheckRequest>,
    /// Taken when there is no check or the check succeeds.
    #[serde(default)]
    pub on_success: Branch,
    /// Taken when the check fails; falls back to `on_success`.
    #[serde(default)]
    pub on_failure: Option<Branch>,
}

impl Choice {
    /// The branch taken for a given check result.
    pub fn branch(&self, success: bool) -> &Branch {
        match (&self.on_failure, success) {
            (Some(fail), false) => fail,
            _ => &self.on_success,
        }
    }
}

/// A block of narrative text with the choices that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene id, unique within the narrative.
    pub id: String,
    /// Short heading.
    #[serde(default)]
    pub title: String,
    /// Narrative text.
    pub text: String,
    /// Choices offered; an empty list ends the story.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A graph of scenes with a designated start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// Id of the opening scene.
    pub start: String,
    /// All scenes, keyed by id.
    #[serde(with = "scene_list")]
    pub scenes: BTreeMap<String, Scene>,
}

impl Narrative {
    /// Build a narrative from a start id and a list of scenes.
    pub fn new(start: impl Into<String>, scenes: impl IntoIterator<Item = Scene>) -> Self {
        Self {
            start: start.into(),
            scenes: scenes.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }
}

/// Scenes are stored as a list in content files.
mod scene_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Scene;

    pub fn serialize<S: Serializer>(
        scenes: &BTreeMap<String, Scene>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let list: Vec<&Scene> = scenes.values().collect();
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Scene>, D::Error> {
        let list = Vec::<Scene>::deserialize(deserializer)?;
        let mut scenes = BTreeMap::new();
        for scene in list {
            if scenes.contains_key(&scene.id) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            scenes.insert(scene.id.clone(), scene);
        }
        Ok(scenes)
    }
}

/// How serious a content problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The content cannot be played as written.
    Error,
    /// The content plays, but likely not as intended.
    Warning,
}

/// A problem found in narrative content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// How serious the problem is.
    pub severity: Severity,
    /// Scene the problem was found in, if any.
    pub scene: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.scene {
            Some(scene) => write!(f, "{level} [{scene}]: {}", self.message),
            None => write!(f, "{level}: {}", self.message),
        }
    }
}

/// Check a narrative against the character it will be played with.
pub fn validate(narrative: &Narrative, sheet: &CharacterSheet) -> Vec<Issue> {
    let mut issues = Vec::new();

    if narrative.scene(&narrative.start).is_none() {
        issues.push(Issue {
            severity: Severity::Error,
            scene: None,
            message: format!("start scene '{}' does not exist", narrative.start),
        });
    }

    for scene in narrative.scenes.values() {
        let mut push = |severity, message: String| {
            issues.push(Issue {
                severity,
                scene: Some(scene.id.clone()),
                message,
            });
        };

        for (i, choice) in scene.choices.iter().enumerate() {
            let n = i + 1;
            if choice.check.is_none() && choice.on_failure.is_some() {
                push(
                    Severity::Warning,
                    format!("choice {n} has a failure branch but no check"),
                );
            }

            let branches = std::iter::once(&choice.on_success).chain(choice.on_failure.as_ref());
            for branch in branches {
                let dangling = branch
                    .next
                    .as_deref()
                    .filter(|next| narrative.scene(next).is_none());
                if let Some(next) = dangling {
                    push(
                        Severity::Error,
                        format!("choice {n} leads to missing scene '{next}'"),
                    );
                }
                for effect in &branch.effects {
                    if !sheet.has_track(&effect.track) {
                        push(
                            Severity::Error,
                            format!("choice {n} adjusts unknown meter '{}'", effect.track),
                        );
                    }
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_mechanics::{Attribute, AttributeSet, Track};

    fn sheet() -> CharacterSheet {
        CharacterSheet::new("Vega", AttributeSet::new()).with_track(Track::new("Integrity", 10).unwrap())
    }

    fn scene(id: &str, choices: Vec<Choice>) -> Scene {
        Scene {
            id: id.to_string(),
            title: String::new(),
            text: format!("{id} text"),
            choices,
        }
    }

    fn go(label: &str, next: &str) -> Choice {
        Choice {
            label: label.to_string(),
            check: None,
            on_success: Branch::to(next),
            on_failure: None,
        }
    }

    #[test]
    fn branch_selection() {
        let choice = Choice {
            label: "Climb".to_string(),
            check: Some(CheckRequest::new(Attribute::Phy, 4)),
            on_success: Branch::to("top"),
            on_failure: Some(Branch::to("bottom")),
        };
        assert_eq!(choice.branch(true).next.as_deref(), Some("top"));
        assert_eq!(choice.branch(false).next.as_deref(), Some("bottom"));
    }

    #[test]
    fn failure_falls_back_to_success_branch() {
        let choice = go("Wait", "later");
        assert_eq!(choice.branch(false).next.as_deref(), Some("later"));
    }

    #[test]
    fn effect_display() {
        let b = Branch::default().with_effect("Integrity", -2).with_effect("Focus", 1);
        assert_eq!(b.effects[0].to_string(), "Integrity -2");
        assert_eq!(b.effects[1].to_string(), "Focus +1");
    }

    #[test]
    fn valid_narrative_has_no_issues() {
        let n = Narrative::new("a", vec![scene("a", vec![go("on", "b")]), scene("b", vec![])]);
        assert!(validate(&n, &sheet()).is_empty());
    }

    #[test]
    fn missing_start() {
        let n = Narrative::new("nowhere", vec![scene("a", vec![])]);
        let issues = validate(&n, &sheet());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].scene.is_none());
    }

    #[test]
    fn dangling_branch_and_unknown_meter() {
        let mut choice = go("on", "ghost");
        choice.on_success = choice.on_success.with_effect("Morale", -1);
        let n = Narrative::new("a", vec![scene("a", vec![choice])]);
        let issues = validate(&n, &sheet());
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert!(issues[0].to_string().contains("missing scene 'ghost'"));
        assert!(issues[1].to_string().contains("unknown meter 'Morale'"));
    }

    #[test]
    fn failure_branch_without_check_warns() {
        let mut choice = go("on", "a");
        choice.on_failure = Some(Branch::to("a"));
        let n = Narrative::new("a", vec![scene("a", vec![choice])]);
        let issues = validate(&n, &sheet());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn scenes_load_from_list() {
        let json = r#"{
            "start": "a",
            "scenes": [
                {"id": "a", "text": "Go.", "choices": [
                    {"label": "Push", "check": {"attribute": "PHY", "difficulty": 3},
                     "on_success": {"next": "b"}}
                ]},
                {"id": "b", "text": "Done."}
            ]
        }"#;
        let n: Narrative = serde_json::from_str(json).unwrap();
        assert_eq!(n.scenes.len(), 2);
        let check = n.scene("a").unwrap().choices[0].check.unwrap();
        assert_eq!(check, CheckRequest::new(Attribute::Phy, 3));
    }

    #[test]
    fn duplicate_scene_ids_are_rejected() {
        let json = r#"{"start": "a", "scenes": [
            {"id": "a", "text": "one"}, {"id": "a", "text": "two"}
        ]}"#;
        let err = serde_json::from_str::<Narrative>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate scene id 'a'"));
    }
}
