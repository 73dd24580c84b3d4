//! Admin password hashing and verification.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`) carrying their own
//! salt and parameters, so `admin_users.password_hash` is self-describing.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

pub use argon2::password_hash::Error as PasswordError;

/// Minimum length accepted for a provisioned admin password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check `password` against a stored PHC hash.
///
/// A mismatch is `Ok(false)`. A stored value that does not parse as a PHC
/// string is an error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordError::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Whether `hash` is an Argon2 PHC string [`verify_password`] can check.
///
/// Accounts carried over from an older deployment hold bcrypt hashes
/// (`$2a$10$...`), which this returns `false` for.
pub fn is_argon2_hash(hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| parsed.algorithm.as_str().starts_with("argon2"))
}

/// Burn one verification against a throwaway hash.
///
/// Login calls this when the email is unknown so that the response takes
/// about as long as a wrong password for a real account.
pub fn verify_unknown_account(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let dummy = DUMMY_HASH.get_or_init(|| hash_password("schoolsite-unknown-account").ok());
    if let Some(hash) = dummy {
        let _ = verify_password(password, hash);
    }
}

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    Ok(())
}
