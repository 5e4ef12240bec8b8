//! Argon2 password hashing primitives.
//!
//! # Invariants
//! - Every hash call generates a fresh random salt; hashing the same
//!   password twice never yields the same PHC string.
//! - Verification uses the constant-time check provided by the hashing
//!   primitive; a mismatch is a normal `Ok(false)`, not an error.

use argon2::password_hash::{Error as HashError, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand_core::OsRng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PasswordResult<T> = Result<T, PasswordError>;

/// Failure inside the hashing primitive (malformed stored hash, parameter
/// errors). Never produced for a simple wrong password.
#[derive(Debug)]
pub struct PasswordError(HashError);

impl Display for PasswordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "password hashing failed: {}", self.0)
    }
}

impl Error for PasswordError {}

impl From<HashError> for PasswordError {
    fn from(value: HashError) -> Self {
        Self(value)
    }
}

/// Hashes a raw password into a PHC-format Argon2id string.
pub fn hash_password(raw_password: &str) -> PasswordResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(raw_password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a raw password against a stored PHC string.
pub fn verify_password(raw_password: &str, stored_hash: &str) -> PasswordResult<bool> {
    let parsed = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(raw_password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
