//! Ephemeral authentication session.
//!
//! # Responsibility
//! - Record which user, if any, is currently authenticated.
//!
//! # Invariants
//! - Holds zero or one identity; a fresh session starts unset.
//! - Never persisted; owned by the client and passed explicitly into
//!   account operations, not ambient global state.
//! - Repositories are owner-id-parameterized and never consult the session;
//!   the orchestrating caller gates note operations on `current()`.

use crate::model::user::UserId;

/// The single authority for "is anyone logged in" within one client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user_id: Option<UserId>,
}

impl Session {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the authenticated identity, overwriting any prior value.
    pub fn set(&mut self, user_id: UserId) {
        self.current_user_id = Some(user_id);
    }

    /// Unsets the identity (logout).
    pub fn clear(&mut self) {
        self.current_user_id = None;
    }

    /// Read-only accessor for the authenticated identity.
    pub fn current(&self) -> Option<UserId> {
        self.current_user_id
    }

    /// Convenience predicate for client-side gating.
    pub fn is_authenticated(&self) -> bool {
        self.current_user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Session;

    #[test]
    fn fresh_session_is_unset() {
        let session = Session::new();
        assert_eq!(session.current(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_overwrites_and_clear_unsets() {
        let mut session = Session::new();
        session.set(1);
        assert_eq!(session.current(), Some(1));

        session.set(2);
        assert_eq!(session.current(), Some(2));

        session.clear();
        assert_eq!(session.current(), None);
    }
}
