//! Dice and roll sources.
//!
//! Randomness enters the engine only through [`RollSource`], so callers
//! can swap a seeded generator for scripted rolls.

pub mod source;

pub use source::{FixedRolls, RollSource, seeded, unseeded};

use serde::{Deserialize, Serialize};

/// A die with a fixed number of sides, numbered 1 to `sides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die(u32);

impl Die {
    /// Six-sided die.
    pub const D6: Die = Die(6);

    /// Create a die with the given number of sides, or `None` below two.
    pub fn new(sides: u32) -> Option<Self> {
        (sides >= 2).then_some(Self(sides))
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.0
    }

    /// Returns true if `value` is a face of this die.
    pub fn contains(self, value: u32) -> bool {
        (1..=self.0).contains(&value)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d6_sides() {
        assert_eq!(Die::D6.sides(), 6);
    }

    #[test]
    fn new_rejects_degenerate_dice() {
        assert_eq!(Die::new(0), None);
        assert_eq!(Die::new(1), None);
        assert_eq!(Die::new(6), Some(Die::D6));
    }

    #[test]
    fn contains_faces() {
        assert!(Die::D6.contains(1));
        assert!(Die::D6.contains(6));
        assert!(!Die::D6.contains(0));
        assert!(!Die::D6.contains(7));
    }

    #[test]
    fn display() {
        assert_eq!(Die::D6.to_string(), "d6");
        assert_eq!(Die::new(20).map(|d| d.to_string()), Some("d20".to_string()));
    }
}
