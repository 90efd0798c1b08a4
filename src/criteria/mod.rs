//! Password strength criteria
//!
//! Each criterion checks one aspect of password composition. The score is
//! the number of criteria a password satisfies.

mod length;
mod variety;

use secrecy::{ExposeSecret, SecretString};

use crate::score::StrengthScore;

pub use length::MIN_LENGTH;

/// A single composition rule with its human-readable description.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    description: &'static str,
    check: fn(&str) -> bool,
}

impl Criterion {
    pub const fn new(description: &'static str, check: fn(&str) -> bool) -> Self {
        Self { description, check }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_met(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

/// Number of criteria, and therefore the maximum score.
pub const CRITERIA_COUNT: usize = 5;

/// The fixed criterion list, in display order.
pub static CRITERIA: [Criterion; CRITERIA_COUNT] = [
    Criterion::new("At least 8 characters long", length::meets_min_length),
    Criterion::new("Contains uppercase letter", variety::has_uppercase),
    Criterion::new("Contains lowercase letter", variety::has_lowercase),
    Criterion::new("Contains number", variety::has_digit),
    Criterion::new("Contains special character", variety::has_special),
];

/// Returns one flag per criterion, in [`CRITERIA`] order.
pub fn satisfied_mask(password: &SecretString) -> [bool; CRITERIA_COUNT] {
    let pwd = password.expose_secret();
    CRITERIA.map(|criterion| criterion.is_met(pwd))
}

/// Counts the criteria the password satisfies.
pub fn strength_score(password: &SecretString) -> StrengthScore {
    StrengthScore::from_mask(&satisfied_mask(password))
}
