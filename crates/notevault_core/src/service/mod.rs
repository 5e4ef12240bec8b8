//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate credential store, session and repositories into the
//!   operations the client consumes.
//! - Keep presentation layers decoupled from storage details.

pub mod account_service;
pub mod note_service;
