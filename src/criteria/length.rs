//! Length criterion - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in characters, not bytes, so multi-byte input is
/// not rewarded for its encoding.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
