//! Character variety criteria - uppercase, lowercase, numbers, special chars.
//!
//! Character classes are ASCII ranges. Anything outside `A-Z`, `a-z` and
//! `0-9` (including accented letters and emoji) is a special character.

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
