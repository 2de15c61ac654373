//! Stat-check resolution.
//!
//! A check rolls one d6 and adds the character's attribute value. The
//! check succeeds when that total meets or beats `difficulty + 6`:
//!
//! ```text
//! total  = attribute_value + roll
//! target = difficulty + TARGET_OFFSET
//! success = total >= target
//! ```
//!
//! Resolution never fails and never touches the character: it consumes
//! one roll and returns a [`CheckOutcome`].

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;
use crate::dice::{Die, RollSource};
use crate::sheet::CharacterSheet;

/// Added to a check's difficulty to form its target.
pub const TARGET_OFFSET: i64 = 6;

/// The die rolled for every check.
pub const CHECK_DIE: Die = Die::D6;

/// A request to test an attribute against a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The attribute being tested.
    pub attribute: Attribute,
    /// Content-authored difficulty.
    pub difficulty: u32,
}

impl CheckRequest {
    /// Create a check request.
    pub fn new(attribute: Attribute, difficulty: u32) -> Self {
        Self {
            attribute,
            difficulty,
        }
    }

    /// The total a roll must reach for this check to succeed.
    pub fn target(&self) -> i64 {
        i64::from(self.difficulty) + TARGET_OFFSET
    }
}

/// The result of a resolved check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The attribute that was tested.
    pub attribute: Attribute,
    /// The attribute's value at the time of the check.
    pub attribute_value: i32,
    /// The check's difficulty.
    pub difficulty: u32,
    /// The die result.
    pub roll: u32,
    /// `attribute_value + roll`.
    pub total: i64,
    /// `difficulty + TARGET_OFFSET`.
    pub target: i64,
    /// Whether `total >= target`.
    pub success: bool,
}

impl CheckOutcome {
    /// How far the total landed from the target (negative on a miss).
    pub fn margin(&self) -> i64 {
        self.total - self.target
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} + {} = {} vs {} — {}",
            self.attribute,
            self.attribute_value,
            self.roll,
            self.total,
            self.target,
            if self.success { "Success" } else { "Failure" }
        )
    }
}

/// Evaluate a check for a known roll.
pub fn evaluate(
    attribute: Attribute,
    attribute_value: i32,
    difficulty: u32,
    roll: u32,
) -> CheckOutcome {
    let total = i64::from(attribute_value) + i64::from(roll);
    let target = i64::from(difficulty) + TARGET_OFFSET;
    CheckOutcome {
        attribute,
        attribute_value,
        difficulty,
        roll,
        total,
        target,
        success: total >= target,
    }
}

/// Roll the check die and evaluate the request.
pub fn resolve<R: RollSource + ?Sized>(
    request: &CheckRequest,
    attribute_value: i32,
    rolls: &mut R,
) -> CheckOutcome {
    let roll = rolls.roll_die(CHECK_DIE);
    evaluate(request.attribute, attribute_value, request.difficulty, roll)
}

/// Resolve a request against a character's current attribute value.
pub fn resolve_for<R: RollSource + ?Sized>(
    sheet: &CharacterSheet,
    request: &CheckRequest,
    rolls: &mut R,
) -> CheckOutcome {
    resolve(request, sheet.attribute(request.attribute), rolls)
}
