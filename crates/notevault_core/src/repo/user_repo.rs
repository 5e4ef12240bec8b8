//! User account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist `(username, password_hash)` rows and look them up by name.
//! - Surface the storage-level uniqueness constraint as a semantic error.
//!
//! # Invariants
//! - Duplicate usernames are detected from the UNIQUE constraint on insert,
//!   never via a separate existence check (no check-then-insert race).
//! - One read or one write against the `users` relation per call.

use crate::model::user::{User, UserId};
use crate::repo::{ensure_table, RepoError, RepoResult};
use rusqlite::{params, Connection, ErrorCode};

/// Repository interface for account persistence.
pub trait UserRepository {
    /// Inserts one account row and returns its assigned id.
    fn insert_user(&self, username: &str, password_hash: &str) -> RepoResult<UserId>;
    /// Looks up one account by exact username.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed account repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "users")?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, username: &str, password_hash: &str) -> RepoResult<UserId> {
        let inserted = self.conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2);",
            params![username, password_hash],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_unique_violation(&err, "users.username") => {
                Err(RepoError::DuplicateUsername(username.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, password_hash
             FROM users
             WHERE username = ?1;",
        )?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(User {
                id: row.get("id")?,
                username: row.get("username")?,
                password_hash: row.get("password_hash")?,
            }));
        }

        Ok(None)
    }
}

fn is_unique_violation(err: &rusqlite::Error, constraint: &str) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(code, message) => {
            code.code == ErrorCode::ConstraintViolation
                && message.as_deref().map_or(false, |m| m.contains(constraint))
        }
        _ => false,
    }
}
