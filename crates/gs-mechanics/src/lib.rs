//! Game mechanics for Grey Stratum.
//!
//! Provides dice and injectable roll sources, character attributes,
//! the status-card character sheet, and the stat-check resolver
//! (`attribute + 1d6` against `difficulty + 6`).

pub mod attributes;
pub mod check;
pub mod dice;
pub mod error;
pub mod sheet;

pub use attributes::{Attribute, AttributeSet};
pub use check::{
    CHECK_DIE, CheckOutcome, CheckRequest, TARGET_OFFSET, evaluate, resolve, resolve_for,
};
pub use dice::{Die, FixedRolls, RollSource, seeded, unseeded};
pub use error::{MechError, MechResult};
pub use sheet::{CharacterSheet, Track};
