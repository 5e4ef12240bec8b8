//! Note model.
//!
//! # Responsibility
//! - Define the persisted note record read back by list operations.
//!
//! # Invariants
//! - `owner_id` references exactly one user and is never reassigned.
//! - Content is arbitrary text; the storage layer does not forbid empty
//!   content (clients reject empty submissions).

use crate::model::user::UserId;
use serde::Serialize;

/// Stable identifier for a persisted note.
pub type NoteId = i64;

/// Persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// SQLite-assigned stable id; reflects insertion order per owner.
    pub id: NoteId,
    /// The user this note belongs to.
    pub owner_id: UserId,
    /// Free-form note text.
    pub content: String,
}
