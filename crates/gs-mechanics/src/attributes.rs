//! Character attributes.
//!
//! Attributes are named integer capabilities (physical, intellect,
//! defense). Values may be zero or negative; nothing here validates them.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// A named attribute a check can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Attribute {
    /// Physical prowess.
    Phy,
    /// Intellect.
    Int,
    /// Defense.
    Def,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 3] = [Self::Phy, Self::Int, Self::Def];

    /// The short code shown on the status card.
    pub fn code(self) -> &'static str {
        match self {
            Self::Phy => "PHY",
            Self::Int => "INT",
            Self::Def => "DEF",
        }
    }

    /// The long-form name.
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Phy => "physical",
            Self::Int => "intellect",
            Self::Def => "defense",
        }
    }
}

impl FromStr for Attribute {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(&lower) || a.long_name() == lower)
            .ok_or_else(|| MechError::UnknownAttribute(s.to_string()))
    }
}

impl TryFrom<String> for Attribute {
    type Error = MechError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Attribute> for String {
    fn from(a: Attribute) -> Self {
        a.code().to_string()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A character's attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<Attribute, i32>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Current value of an attribute; unset attributes read as 0.
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.values.get(&attribute).copied().unwrap_or(0)
    }

    /// Set an attribute's value.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        self.values.insert(attribute, value);
    }

    /// Iterate over set attributes in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.values.iter().map(|(a, v)| (*a, *v))
    }
}
