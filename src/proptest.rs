//! Property-based tests for the scoring functions.
//!
//! These tests use proptest to verify invariants around:
//! - Score bounds and agreement with the criteria mask
//! - Crack time bucket monotonicity
//! - Denylist case-insensitivity

use crate::{
    CRITERIA_COUNT, CommonPasswords, DEFAULT_COMMON_PASSWORDS, estimate_crack_time,
    satisfied_mask, strength_score,
};
use proptest::prelude::*;
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

/// Strategy for case variations of a built-in common password.
fn arb_common_variant() -> impl Strategy<Value = String> {
    (
        prop::sample::select(DEFAULT_COMMON_PASSWORDS.to_vec()),
        prop::collection::vec(any::<bool>(), 8),
    )
        .prop_map(|(pwd, upper)| {
            pwd.chars()
                .zip(upper.into_iter().cycle())
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
}

proptest! {
    /// Score stays in bounds and equals the number of satisfied criteria.
    #[test]
    fn score_matches_mask(pwd in any::<String>()) {
        let pwd = secret(&pwd);
        let score = strength_score(&pwd).value();
        let met = satisfied_mask(&pwd).iter().filter(|&&m| m).count();

        prop_assert!(usize::from(score) <= CRITERIA_COUNT);
        prop_assert_eq!(usize::from(score), met);
    }

    /// Any non-alphanumeric ASCII or non-ASCII character satisfies the special criterion.
    #[test]
    fn special_criterion_detects_symbols(prefix in "[A-Za-z0-9]{0,10}", special in "[^A-Za-z0-9]") {
        let pwd = secret(&format!("{}{}", prefix, special));
        prop_assert!(satisfied_mask(&pwd)[4]);
    }

    /// Longer passwords never land in a smaller crack time bucket.
    #[test]
    fn crack_time_rank_is_monotonic(length in 0usize..400, extra in 0usize..50) {
        let shorter = estimate_crack_time(length).rank();
        let longer = estimate_crack_time(length + extra).rank();
        prop_assert!(shorter <= longer);
    }

    /// Common password matching ignores ASCII case.
    #[test]
    fn common_match_is_case_insensitive(pwd in arb_common_variant()) {
        prop_assert!(CommonPasswords::builtin().is_common(&pwd));
    }
}
