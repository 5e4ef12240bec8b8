//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist, list and delete notes scoped to a single owner.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - List results are constrained to one owner and ordered by `id ASC`
//!   (insertion order via rowid).
//! - Delete matches `(id, owner_id)` together in one atomic statement, so a
//!   caller can only remove rows it owns; zero matched rows is a no-op.
//! - No application-level owner existence check on insert; the declared
//!   schema reference is the only guard.

use crate::model::note::{Note, NoteId};
use crate::model::user::UserId;
use crate::repo::{ensure_table, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for note persistence.
pub trait NoteRepository {
    /// Inserts one note row and returns its assigned id.
    fn insert_note(&self, owner_id: UserId, content: &str) -> RepoResult<NoteId>;
    /// Lists all notes owned by `owner_id`, oldest first.
    fn list_for_owner(&self, owner_id: UserId) -> RepoResult<Vec<Note>>;
    /// Deletes one owned note. Returns `false` when no row matched, whether
    /// the id is absent or belongs to another owner.
    fn delete_note(&self, note_id: NoteId, owner_id: UserId) -> RepoResult<bool>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "notes")?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, owner_id: UserId, content: &str) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (owner_id, content) VALUES (?1, ?2);",
            params![owner_id, content],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_for_owner(&self, owner_id: UserId) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner_id, content
             FROM notes
             WHERE owner_id = ?1
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([owner_id])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(Note {
                id: row.get("id")?,
                owner_id: row.get("owner_id")?,
                content: row.get("content")?,
            });
        }

        Ok(notes)
    }

    fn delete_note(&self, note_id: NoteId, owner_id: UserId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM notes WHERE id = ?1 AND owner_id = ?2;",
            params![note_id, owner_id],
        )?;

        Ok(changed > 0)
    }
}
