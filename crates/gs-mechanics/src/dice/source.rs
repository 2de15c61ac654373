//! Roll sources: seeded generators and scripted sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Die;
use crate::error::{MechError, MechResult};

/// Anything that can produce die results.
pub trait RollSource {
    /// Roll one die, returning a value in `1..=die.sides()`.
    fn roll_die(&mut self, die: Die) -> u32;
}

impl RollSource for StdRng {
    fn roll_die(&mut self, die: Die) -> u32 {
        self.random_range(1..=die.sides())
    }
}

impl<R: RollSource + ?Sized> RollSource for Box<R> {
    fn roll_die(&mut self, die: Die) -> u32 {
        (**self).roll_die(die)
    }
}

/// Create a deterministic generator from a seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create a generator seeded from OS entropy.
pub fn unseeded() -> StdRng {
    StdRng::from_os_rng()
}

/// A scripted sequence of rolls, cycling when exhausted.
///
/// Values are returned as-is; a value larger than the die being rolled is
/// clamped to the die's highest face.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    values: Vec<u32>,
    next: usize,
}

impl FixedRolls {
    /// Create a scripted sequence. Fails on an empty list or a zero value.
    pub fn new(values: &[u32]) -> MechResult<Self> {
        if values.is_empty() {
            return Err(MechError::InvalidRoll("no rolls scripted".to_string()));
        }
        if values.contains(&0) {
            return Err(MechError::InvalidRoll("rolls start at 1".to_string()));
        }
        Ok(Self {
            values: values.to_vec(),
            next: 0,
        })
    }

    /// How many rolls have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RollSource for FixedRolls {
    fn roll_die(&mut self, die: Die) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.min(die.sides())
    }
}
