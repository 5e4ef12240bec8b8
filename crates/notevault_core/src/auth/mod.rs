//! Credential hashing and verification.
//!
//! # Responsibility
//! - Own the password hashing discipline (slow KDF, fresh per-call salt).
//! - Provide register/verify use-cases over account persistence.
//!
//! # Invariants
//! - Plaintext passwords never cross into the repository layer or logs.
//! - Uniqueness of usernames relies on the storage constraint, surfaced
//!   here as `CredentialError::DuplicateUsername`.

pub mod credential_store;
pub mod password;
