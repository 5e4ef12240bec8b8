use notevault_core::db::open_db_in_memory;
use notevault_core::{
    AccountService, NoteService, Session, SqliteNoteRepository, SqliteUserRepository, UserId,
};
use rusqlite::Connection;

fn register(conn: &Connection, username: &str) -> UserId {
    let service = AccountService::new(SqliteUserRepository::try_new(conn).unwrap());
    service.signup(username, "s3cret").unwrap()
}

#[test]
fn list_returns_notes_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let owner = register(&conn, "alice");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    service.create_note(owner, "first").unwrap();
    service.create_note(owner, "second").unwrap();
    service.create_note(owner, "third").unwrap();

    let notes = service.list_notes(owner).unwrap();
    let contents: Vec<&str> = notes.iter().map(|note| note.content.as_str()).collect();
    assert_eq!(contents, ["first", "second", "third"]);
    assert!(notes.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn list_never_leaks_another_owners_notes() {
    let conn = open_db_in_memory().unwrap();
    let alice = register(&conn, "alice");
    let bob = register(&conn, "bob");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    service.create_note(alice, "alice one").unwrap();
    service.create_note(bob, "bob one").unwrap();
    service.create_note(alice, "alice two").unwrap();

    let alice_notes = service.list_notes(alice).unwrap();
    assert_eq!(alice_notes.len(), 2);
    assert!(alice_notes.iter().all(|note| note.owner_id == alice));

    let bob_notes = service.list_notes(bob).unwrap();
    assert_eq!(bob_notes.len(), 1);
    assert_eq!(bob_notes[0].content, "bob one");
}

#[test]
fn list_is_empty_for_an_owner_without_notes() {
    let conn = open_db_in_memory().unwrap();
    let owner = register(&conn, "alice");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    assert!(service.list_notes(owner).unwrap().is_empty());
}

#[test]
fn delete_removes_an_owned_note() {
    let conn = open_db_in_memory().unwrap();
    let owner = register(&conn, "alice");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let keep = service.create_note(owner, "keep").unwrap();
    let discard = service.create_note(owner, "discard").unwrap();

    assert!(service.delete_note(discard, owner).unwrap());

    let remaining = service.list_notes(owner).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
}

#[test]
fn delete_of_a_missing_note_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let owner = register(&conn, "alice");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    assert!(!service.delete_note(9999, owner).unwrap());
}

#[test]
fn delete_requires_the_matching_owner() {
    let conn = open_db_in_memory().unwrap();
    let alice = register(&conn, "alice");
    let bob = register(&conn, "bob");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let note_id = service.create_note(alice, "private").unwrap();

    // Bob holds a valid note id but does not own the row.
    assert!(!service.delete_note(note_id, bob).unwrap());

    let alice_notes = service.list_notes(alice).unwrap();
    assert_eq!(alice_notes.len(), 1);
    assert_eq!(alice_notes[0].id, note_id);
}

#[test]
fn storage_accepts_empty_content() {
    // Rejecting empty submissions is the client's job, not the core's.
    let conn = open_db_in_memory().unwrap();
    let owner = register(&conn, "alice");
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    service.create_note(owner, "").unwrap();
    let notes = service.list_notes(owner).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "");
}

#[test]
fn full_account_and_note_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let accounts = AccountService::new(SqliteUserRepository::try_new(&conn).unwrap());
    let notes = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
    let mut session = Session::new();

    accounts.signup("alice", "s3cret").unwrap();
    let user_id = accounts.login(&mut session, "alice", "s3cret").unwrap();
    assert_eq!(user_id, 1);

    let owner = session.current().unwrap();
    let note_id = notes.create_note(owner, "buy milk").unwrap();
    assert_eq!(note_id, 1);

    let listed = notes.list_notes(owner).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!((listed[0].id, listed[0].content.as_str()), (1, "buy milk"));

    assert!(notes.delete_note(note_id, owner).unwrap());
    assert!(notes.list_notes(owner).unwrap().is_empty());

    accounts.logout(&mut session);
    assert_eq!(session.current(), None);
}
