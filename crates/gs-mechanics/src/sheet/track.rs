//! Status-card meters.
//!
//! A meter always satisfies `min <= current <= max`. Every way of building
//! one (constructors and deserialization) checks the bounds, and
//! [`Track::adjust`] clamps, so the invariant holds for the meter's life.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A named meter such as Integrity or Focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MeterSpec", into = "MeterSpec")]
pub struct Track {
    name: String,
    current: i32,
    min: i32,
    max: i32,
}

/// On-disk form of a meter. `current` defaults to full, `min` to zero.
#[derive(Serialize, Deserialize)]
struct MeterSpec {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<i32>,
    #[serde(default)]
    min: i32,
    max: i32,
}

impl TryFrom<MeterSpec> for Track {
    type Error = MechError;

    fn try_from(spec: MeterSpec) -> MechResult<Self> {
        let meter = Self::bounded(spec.name, spec.min, spec.max)?;
        match spec.current {
            Some(current) => meter.at(current),
            None => Ok(meter),
        }
    }
}

impl From<Track> for MeterSpec {
    fn from(t: Track) -> Self {
        Self {
            name: t.name,
            current: Some(t.current),
            min: t.min,
            max: t.max,
        }
    }
}

impl Track {
    /// A full meter on `0..=max`.
    pub fn new(name: impl Into<String>, max: i32) -> MechResult<Self> {
        Self::bounded(name, 0, max)
    }

    /// A full meter on `min..=max`. Fails when `min > max`.
    pub fn bounded(name: impl Into<String>, min: i32, max: i32) -> MechResult<Self> {
        let name = name.into();
        if min > max {
            return Err(MechError::InvalidTrack {
                name,
                reason: format!("min {min} is above max {max}"),
            });
        }
        Ok(Self {
            name,
            current: max,
            min,
            max,
        })
    }

    /// The same meter reading `current`. Fails outside `min..=max`.
    pub fn at(mut self, current: i32) -> MechResult<Self> {
        if !(self.min..=self.max).contains(&current) {
            return Err(MechError::InvalidTrack {
                reason: format!("{current} is outside {}..={}", self.min, self.max),
                name: self.name,
            });
        }
        self.current = current;
        Ok(self)
    }

    /// Meter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current reading.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Lowest reading.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Highest reading.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Move the reading by `delta`, stopping at the bounds.
    ///
    /// Returns the change actually applied, which is smaller than `delta`
    /// when the meter bottoms out or fills up.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        let before = self.current;
        self.current = before.saturating_add(delta).clamp(self.min, self.max);
        self.current.saturating_sub(before)
    }

    /// At the lowest reading.
    pub fn is_depleted(&self) -> bool {
        self.current == self.min
    }

    /// Share of the range that is filled, for drawing HUD bars.
    pub fn fill(&self) -> f64 {
        let span = i64::from(self.max) - i64::from(self.min);
        if span == 0 {
            return 1.0;
        }
        (i64::from(self.current) - i64::from(self.min)) as f64 / span as f64
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}
