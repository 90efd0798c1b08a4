//! Strength score and the tiers derived from it.

use std::fmt;

use crate::criteria::CRITERIA_COUNT;

/// Number of satisfied criteria, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = CRITERIA_COUNT as u8;

    pub(crate) fn from_mask(mask: &[bool; CRITERIA_COUNT]) -> Self {
        Self(mask.iter().filter(|&&met| met).count() as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Share of satisfied criteria, 0 to 100.
    pub fn percentage(&self) -> u8 {
        (u16::from(self.0) * 100 / u16::from(Self::MAX)) as u8
    }

    pub fn level(&self) -> StrengthLevel {
        match self.0 {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            _ => StrengthLevel::Strong,
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Three-tier strength classification used for meter colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Strong,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
