//! Random password generation.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::SecretString;

pub const PASSWORD_LENGTH: usize = 16;

/// Lowercase, uppercase, digits and `!@#$%^&*()_+`.
pub const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+";

/// Generates a [`PASSWORD_LENGTH`] character password using the operating
/// system's CSPRNG.
pub fn generate_password() -> SecretString {
    generate_password_with(&mut OsRng)
}

/// Generates a password drawing from the given random source.
///
/// Every position is sampled uniformly and independently from [`CHARSET`].
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    let password: String = (0..PASSWORD_LENGTH)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    SecretString::new(password.into())
}
