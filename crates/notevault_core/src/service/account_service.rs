//! Account orchestration: signup, login, logout.
//!
//! # Responsibility
//! - Drive the credential store and write login results into the
//!   client-supplied session.
//! - Coarsen authentication failures for the client boundary.
//!
//! # Invariants
//! - Signup never touches the session (no auto-login).
//! - Unknown-user and wrong-password failures are logged with distinct
//!   reason codes but collapse to one `AuthenticationFailed` whose display
//!   text reveals neither case (anti-enumeration).

use crate::auth::credential_store::{CredentialError, CredentialStore};
use crate::auth::password::PasswordError;
use crate::model::user::UserId;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use crate::session::Session;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Client-facing failure for account operations.
#[derive(Debug)]
pub enum AccountError {
    InvalidUsername(String),
    EmptyPassword,
    DuplicateUsername(String),
    /// Wrong password or unknown user; intentionally indistinct.
    AuthenticationFailed,
    Password(PasswordError),
    Storage(RepoError),
}

impl Display for AccountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername(name) => write!(f, "invalid username: `{name}`"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::DuplicateUsername(name) => write!(f, "username already taken: `{name}`"),
            Self::AuthenticationFailed => write!(f, "invalid username or password"),
            Self::Password(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AccountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Password(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CredentialError> for AccountError {
    fn from(value: CredentialError) -> Self {
        match value {
            CredentialError::InvalidUsername(name) => Self::InvalidUsername(name),
            CredentialError::EmptyPassword => Self::EmptyPassword,
            CredentialError::DuplicateUsername(name) => Self::DuplicateUsername(name),
            CredentialError::UserNotFound | CredentialError::InvalidCredentials => {
                Self::AuthenticationFailed
            }
            CredentialError::Password(err) => Self::Password(err),
            CredentialError::Repo(err) => Self::Storage(err),
        }
    }
}

/// Account use-case service over a user repository.
pub struct AccountService<R: UserRepository> {
    credentials: CredentialStore<R>,
}

impl<R: UserRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            credentials: CredentialStore::new(repo),
        }
    }

    /// Registers a new account. The caller must log in separately.
    pub fn signup(&self, username: &str, raw_password: &str) -> Result<UserId, AccountError> {
        match self.credentials.register(username, raw_password) {
            Ok(user_id) => {
                info!("event=signup module=account status=ok user_id={user_id}");
                Ok(user_id)
            }
            Err(CredentialError::DuplicateUsername(name)) => {
                warn!("event=signup module=account status=rejected reason=duplicate_username");
                Err(AccountError::DuplicateUsername(name))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Authenticates and records the identity in the supplied session.
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        raw_password: &str,
    ) -> Result<UserId, AccountError> {
        match self.credentials.verify(username, raw_password) {
            Ok(user_id) => {
                session.set(user_id);
                info!("event=login module=account status=ok user_id={user_id}");
                Ok(user_id)
            }
            Err(CredentialError::UserNotFound) => {
                warn!("event=login module=account status=denied reason=unknown_user");
                Err(AccountError::AuthenticationFailed)
            }
            Err(CredentialError::InvalidCredentials) => {
                warn!("event=login module=account status=denied reason=password_mismatch");
                Err(AccountError::AuthenticationFailed)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Clears the session. Always succeeds.
    pub fn logout(&self, session: &mut Session) {
        if let Some(user_id) = session.current() {
            info!("event=logout module=account status=ok user_id={user_id}");
        }
        session.clear();
    }
}
