//! Password strength checking library
//!
//! This library scores passwords against a fixed list of composition
//! criteria, estimates brute-force crack time, flags common passwords and
//! generates random ones.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Path to an external common password list, read by
//!   [`CommonPasswords::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{CommonPasswords, evaluate_password, generate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Pa$$w0rd123".to_string().into());
//! let evaluation = evaluate_password(&password, CommonPasswords::builtin());
//!
//! assert_eq!(evaluation.score.value(), 5);
//! assert!(!evaluation.is_common);
//! println!("Time to crack: {}", evaluation.crack_time);
//!
//! let generated = generate_password();
//! let evaluation = evaluate_password(&generated, CommonPasswords::builtin());
//! println!("Generated password strength: {}", evaluation.score.level());
//! ```

// Internal modules
mod crack_time;
mod criteria;
mod denylist;
mod evaluator;
mod generator;
mod score;

#[cfg(test)]
mod proptest;

// Public API
pub use crack_time::{
    CrackTime, GUESSES_PER_SECOND, KEYSPACE_ALPHABET, crack_seconds, estimate_crack_time,
};
pub use criteria::{CRITERIA, CRITERIA_COUNT, Criterion, MIN_LENGTH, satisfied_mask, strength_score};
pub use denylist::{
    CommonPasswords, DEFAULT_COMMON_PASSWORDS, DENYLIST_PATH_ENV, DenylistError,
    get_denylist_path, is_common_password,
};
pub use evaluator::{PasswordEvaluation, evaluate_password};
pub use generator::{CHARSET, PASSWORD_LENGTH, generate_password, generate_password_with};
pub use score::{StrengthLevel, StrengthScore};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DELAY, evaluate_password_tx};
