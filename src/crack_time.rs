//! Brute-force crack time estimation.
//!
//! The model assumes every character is drawn from the 95 printable ASCII
//! characters, whatever the password actually contains, and an attacker
//! testing one billion guesses per second.

use std::fmt;

/// Printable ASCII characters assumed for every position.
pub const KEYSPACE_ALPHABET: f64 = 95.0;

pub const GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Year counts from here on are shown in exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Bucketed crack time estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrackTime {
    LessThanAMinute,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    /// Whole years, already floored.
    Years(f64),
    /// Keyspace too large for `f64`; shown as an infinite year count.
    Saturated,
}

impl CrackTime {
    /// Bucket ordering: longer passwords never rank lower.
    pub fn rank(&self) -> u8 {
        match self {
            CrackTime::LessThanAMinute => 0,
            CrackTime::Minutes(_) => 1,
            CrackTime::Hours(_) => 2,
            CrackTime::Days(_) => 3,
            CrackTime::Years(_) | CrackTime::Saturated => 4,
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::LessThanAMinute => f.write_str("less than a minute"),
            CrackTime::Minutes(n) => write!(f, "{} minutes", n),
            CrackTime::Hours(n) => write!(f, "{} hours", n),
            CrackTime::Days(n) => write!(f, "{} days", n),
            CrackTime::Years(n) if *n < EXPONENT_THRESHOLD => write!(f, "{} years", n),
            CrackTime::Years(n) => {
                // Signed exponent, e.g. `1.2e+21`
                let scientific = format!("{:e}", n).replacen('e', "e+", 1);
                write!(f, "{} years", scientific)
            }
            CrackTime::Saturated => f.write_str("Infinity years"),
        }
    }
}

/// Seconds needed to exhaust the keyspace for `length` characters.
///
/// Returns `None` once `95^length` no longer fits in an `f64`.
pub fn crack_seconds(length: usize) -> Option<f64> {
    let exponent = i32::try_from(length).ok()?;
    let combinations = KEYSPACE_ALPHABET.powi(exponent);
    combinations
        .is_finite()
        .then(|| combinations / GUESSES_PER_SECOND)
}

/// Estimates how long a brute-force attack needs for a password of
/// `length` characters.
pub fn estimate_crack_time(length: usize) -> CrackTime {
    let Some(seconds) = crack_seconds(length) else {
        return CrackTime::Saturated;
    };

    if seconds < MINUTE {
        CrackTime::LessThanAMinute
    } else if seconds < HOUR {
        CrackTime::Minutes((seconds / MINUTE).floor() as u64)
    } else if seconds < DAY {
        CrackTime::Hours((seconds / HOUR).floor() as u64)
    } else if seconds < YEAR {
        CrackTime::Days((seconds / DAY).floor() as u64)
    } else {
        CrackTime::Years((seconds / YEAR).floor())
    }
}
