//! User account model and identifier validation.
//!
//! # Responsibility
//! - Define the persisted account record.
//! - Normalize and validate username input before it reaches storage.
//!
//! # Invariants
//! - `password_hash` holds a PHC-format salted hash, never a plaintext
//!   password, and is excluded from serialized output.
//! - Usernames are unique across all users (storage-level constraint).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Stable identifier for a registered user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,31}$").expect("valid username regex"));

/// Persisted account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// SQLite-assigned stable id.
    pub id: UserId,
    /// Globally unique login name, immutable after creation.
    pub username: String,
    /// Salted Argon2 hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Normalizes one username according to the account contract.
///
/// Returns the trimmed name, or `None` when the input is empty or contains
/// characters outside `[A-Za-z0-9_.-]` (max 32 chars, leading alphanumeric).
pub fn normalize_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if USERNAME_RE.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_username, User};

    #[test]
    fn normalize_accepts_plain_names_and_trims() {
        assert_eq!(normalize_username("alice").as_deref(), Some("alice"));
        assert_eq!(normalize_username("  bob-2  ").as_deref(), Some("bob-2"));
        assert_eq!(normalize_username("a.b_c-9").as_deref(), Some("a.b_c-9"));
    }

    #[test]
    fn normalize_rejects_empty_and_invalid_input() {
        assert_eq!(normalize_username(""), None);
        assert_eq!(normalize_username("   "), None);
        assert_eq!(normalize_username("has space"), None);
        assert_eq!(normalize_username(".leading-dot"), None);
        assert_eq!(normalize_username(&"x".repeat(33)), None);
    }

    #[test]
    fn serialized_user_never_contains_password_hash() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password_hash"));
    }
}
