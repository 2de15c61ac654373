//! Play sessions.
//!
//! `GameSession` owns the character, the narrative, the mission log and
//! the roll source. Each call to [`GameSession::choose`] resolves at most
//! one check.

use chrono::Utc;
use gs_mechanics::{CharacterSheet, CheckOutcome, RollSource, resolve_for, seeded, unseeded};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::content::Content;
use crate::error::{StoryError, StoryResult};
use crate::log::{LogEntry, MissionLog};
use crate::narrative::{Choice, Narrative, Scene, TrackEffect};

/// What happened when a choice was taken.
#[derive(Debug, Clone)]
pub struct ChoiceReport {
    /// Label of the chosen option.
    pub label: String,
    /// The check outcome, if the choice carried a check.
    pub outcome: Option<CheckOutcome>,
    /// Meter changes as applied, after clamping.
    pub effects: Vec<TrackEffect>,
    /// The scene the player is now in.
    pub scene: String,
}

/// An interactive play-through of a narrative.
pub struct GameSession {
    character: CharacterSheet,
    narrative: Narrative,
    current: Scene,
    log: MissionLog,
    rolls: Box<dyn RollSource>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("character", &self.character.name)
            .field("scene", &self.current.id)
            .field("log_entries", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Start a session, seeding rolls from the config.
    pub fn new(content: Content, config: &SessionConfig) -> StoryResult<Self> {
        let rolls: Box<dyn RollSource> = match config.seed {
            Some(seed) => Box::new(seeded(seed)),
            None => Box::new(unseeded()),
        };
        Self::with_rolls(content, rolls)
    }

    /// Start a session with an explicit roll source.
    pub fn with_rolls(content: Content, rolls: Box<dyn RollSource>) -> StoryResult<Self> {
        let Content {
            character,
            narrative,
        } = content;
        let start = lookup(&narrative, &narrative.start)?;

        let mut session = Self {
            character,
            narrative,
            current: start.clone(),
            log: MissionLog::new(),
            rolls,
        };
        session.enter(start);
        Ok(session)
    }

    /// The character being played.
    pub fn character(&self) -> &CharacterSheet {
        &self.character
    }

    /// The mission log so far.
    pub fn log(&self) -> &MissionLog {
        &self.log
    }

    /// The scene the player is in.
    pub fn current_scene(&self) -> &Scene {
        &self.current
    }

    /// Choices offered by the current scene.
    pub fn choices(&self) -> &[Choice] {
        &self.current_scene().choices
    }

    /// True once the player reaches a scene with no choices.
    pub fn is_finished(&self) -> bool {
        self.choices().is_empty()
    }

    /// Take the choice at `index` (1-based, as shown to the player).
    pub fn choose(&mut self, index: usize) -> StoryResult<ChoiceReport> {
        if self.is_finished() {
            return Err(StoryError::StoryFinished);
        }
        let available = self.choices().len();
        let choice = index
            .checked_sub(1)
            .and_then(|i| self.choices().get(i))
            .cloned()
            .ok_or(StoryError::InvalidChoice { index, available })?;

        self.check_branches(&choice)?;

        self.log.append(LogEntry::ChoiceMade {
            scene: self.current.id.clone(),
            label: choice.label.clone(),
            timestamp: Utc::now(),
        });

        let outcome = choice.check.map(|request| {
            let outcome = resolve_for(&self.character, &request, self.rolls.as_mut());
            debug!(
                attribute = %outcome.attribute,
                roll = outcome.roll,
                total = outcome.total,
                target = outcome.target,
                success = outcome.success,
                "check resolved"
            );
            self.log.append(LogEntry::CheckResolved {
                outcome,
                timestamp: Utc::now(),
            });
            outcome
        });

        let branch = choice.branch(outcome.is_none_or(|o| o.success));
        let mut applied = Vec::with_capacity(branch.effects.len());
        for effect in &branch.effects {
            let meter = self.character.track_mut(&effect.track)?;
            let delta = meter.adjust(effect.delta);
            self.log.append(LogEntry::TrackAdjusted {
                track: effect.track.clone(),
                delta,
                value: meter.current(),
                timestamp: Utc::now(),
            });
            applied.push(TrackEffect {
                track: effect.track.clone(),
                delta,
            });
        }

        if let Some(next) = &branch.next {
            let scene = lookup(&self.narrative, next)?;
            self.enter(scene);
        }

        Ok(ChoiceReport {
            label: choice.label.clone(),
            outcome,
            effects: applied,
            scene: self.current.id.clone(),
        })
    }

    /// Record a player note in the log.
    pub fn note(&mut self, text: impl Into<String>) {
        self.log.append(LogEntry::Note {
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    /// Reject a choice whose branches name missing scenes or meters.
    fn check_branches(&self, choice: &Choice) -> StoryResult<()> {
        let branches = std::iter::once(&choice.on_success).chain(choice.on_failure.as_ref());
        for branch in branches {
            let dangling = branch
                .next
                .as_ref()
                .filter(|next| self.narrative.scene(next).is_none());
            if let Some(next) = dangling {
                return Err(StoryError::UnknownScene(next.clone()));
            }
            for effect in &branch.effects {
                self.character.track(&effect.track)?;
            }
        }
        Ok(())
    }

    fn enter(&mut self, scene: Scene) {
        info!(scene = %scene.id, "entered scene");
        self.log.append(LogEntry::SceneEntered {
            scene: scene.id.clone(),
            title: scene.title.clone(),
            timestamp: Utc::now(),
        });
        self.current = scene;
    }
}

fn lookup(narrative: &Narrative, id: &str) -> StoryResult<Scene> {
    narrative
        .scene(id)
        .cloned()
        .ok_or_else(|| StoryError::UnknownScene(id.to_string()))
}
