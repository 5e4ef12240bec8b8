//! Note use-case service.
//!
//! # Responsibility
//! - Provide owner-scoped create/list/delete entry points for clients.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Every operation takes an explicit owner id; the service never consults
//!   session state (callers gate on `Session::current()`).
//! - Note content is never validated here and never logged.

use crate::model::note::{Note, NoteId};
use crate::model::user::UserId;
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for note operations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one note for the given owner and returns its id.
    pub fn create_note(&self, owner_id: UserId, content: &str) -> RepoResult<NoteId> {
        let note_id = self.repo.insert_note(owner_id, content)?;
        info!("event=note_create module=notes status=ok note_id={note_id} owner_id={owner_id}");
        Ok(note_id)
    }

    /// Lists the owner's notes, oldest first. Recomputed fresh per call.
    pub fn list_notes(&self, owner_id: UserId) -> RepoResult<Vec<Note>> {
        self.repo.list_for_owner(owner_id)
    }

    /// Deletes one owned note.
    ///
    /// Returns `Ok(false)` as a no-op when nothing matched — the id is
    /// absent, or it belongs to a different owner.
    pub fn delete_note(&self, note_id: NoteId, owner_id: UserId) -> RepoResult<bool> {
        let removed = self.repo.delete_note(note_id, owner_id)?;
        let status = if removed { "ok" } else { "noop" };
        info!(
            "event=note_delete module=notes status={status} note_id={note_id} owner_id={owner_id}"
        );
        Ok(removed)
    }
}
