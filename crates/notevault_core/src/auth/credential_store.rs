//! Credential store: account registration and verification.
//!
//! # Responsibility
//! - Validate username/password input, hash credentials, persist accounts.
//! - Verify a login attempt against the stored hash.
//!
//! # Invariants
//! - `UserNotFound` and `InvalidCredentials` stay distinct at this layer;
//!   collapsing them for anti-enumeration is the account service's job.
//! - One repository call per operation; no partial writes.

use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::model::user::{normalize_username, UserId};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Typed failure for register/verify use-cases.
#[derive(Debug)]
pub enum CredentialError {
    /// Username is empty or contains characters outside the allowed set.
    InvalidUsername(String),
    /// Empty passwords are rejected before hashing.
    EmptyPassword,
    /// A row with this username already exists.
    DuplicateUsername(String),
    /// No account matches the given username.
    UserNotFound,
    /// The password does not match the stored hash.
    InvalidCredentials,
    Password(PasswordError),
    Repo(RepoError),
}

impl Display for CredentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername(name) => write!(f, "invalid username: `{name}`"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::DuplicateUsername(name) => write!(f, "username already taken: `{name}`"),
            Self::UserNotFound => write!(f, "no such user"),
            Self::InvalidCredentials => write!(f, "password mismatch"),
            Self::Password(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CredentialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Password(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PasswordError> for CredentialError {
    fn from(value: PasswordError) -> Self {
        Self::Password(value)
    }
}

impl From<RepoError> for CredentialError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateUsername(name) => Self::DuplicateUsername(name),
            other => Self::Repo(other),
        }
    }
}

/// Account credential store over a user repository.
pub struct CredentialStore<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> CredentialStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account and returns its assigned id.
    ///
    /// # Contract
    /// - Rejects empty/invalid usernames and empty passwords.
    /// - Hashes with a fresh per-call salt; persists `(username, hash)` as a
    ///   single statement.
    /// - A concurrent or earlier registration of the same name surfaces as
    ///   `DuplicateUsername` via the storage constraint.
    pub fn register(&self, username: &str, raw_password: &str) -> Result<UserId, CredentialError> {
        let username = normalize_username(username)
            .ok_or_else(|| CredentialError::InvalidUsername(username.trim().to_string()))?;
        if raw_password.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }

        let password_hash = hash_password(raw_password)?;
        let user_id = self.repo.insert_user(&username, &password_hash)?;
        info!("event=register module=auth status=ok user_id={user_id}");
        Ok(user_id)
    }

    /// Verifies a login attempt and returns the matched account id.
    pub fn verify(&self, username: &str, raw_password: &str) -> Result<UserId, CredentialError> {
        let Some(user) = self.repo.find_by_username(username.trim())? else {
            return Err(CredentialError::UserNotFound);
        };

        if verify_password(raw_password, &user.password_hash)? {
            Ok(user.id)
        } else {
            Err(CredentialError::InvalidCredentials)
        }
    }
}
