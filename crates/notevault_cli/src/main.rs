//! Interactive line client for the NoteVault core.
//!
//! # Responsibility
//! - Own process startup (schema check, fatal on failure) and shutdown.
//! - Drive core services one command at a time and render their results.
//!
//! This crate carries no invariants of its own; every contract lives in
//! `notevault_core`. The storage connection is acquired per command and
//! dropped on every exit path.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use notevault_core::{
    default_log_level, init_logging, open_db, AccountService, NoteId, NoteService, Session,
    SqliteNoteRepository, SqliteUserRepository, UserId,
};
use rusqlite::Connection;

const DEFAULT_DB_FILE: &str = "notevault.db";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("NOTEVAULT_LOG_DIR") {
        let level = std::env::var("NOTEVAULT_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let db_path = std::env::var("NOTEVAULT_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE));

    // An unusable store is fatal at startup; once the loop runs, every
    // failure is reported and the process keeps going.
    if let Err(err) = open_db(&db_path) {
        eprintln!(
            "error: cannot open note store `{}`: {err}",
            db_path.display()
        );
        return ExitCode::FAILURE;
    }

    println!(
        "notevault {} — type `help` for commands",
        notevault_core::core_version()
    );

    let mut session = Session::new();
    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: cannot read input: {err}");
                return ExitCode::FAILURE;
            }
        }

        if let Outcome::Quit = run_command(&db_path, &mut session, line.trim()) {
            return ExitCode::SUCCESS;
        }
    }
}

enum Outcome {
    Continue,
    Quit,
}

fn run_command(db_path: &Path, session: &mut Session, line: &str) -> Outcome {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "quit" | "exit" => return Outcome::Quit,
        "signup" => match split_credentials(rest) {
            Some((username, password)) => report(signup(db_path, username, password)),
            None => println!("usage: signup <username> <password>"),
        },
        "login" => match split_credentials(rest) {
            Some((username, password)) => report(login(db_path, session, username, password)),
            None => println!("usage: login <username> <password>"),
        },
        "logout" => report(logout(db_path, session)),
        "add" | "list" | "del" => match session.current() {
            None => println!("not logged in"),
            Some(owner_id) => match command {
                "add" if rest.is_empty() => println!("cannot save an empty note"),
                "add" => report(add_note(db_path, owner_id, rest)),
                "list" => report(list_notes(db_path, owner_id)),
                "del" => match rest.parse::<NoteId>() {
                    Ok(note_id) => report(delete_note(db_path, owner_id, note_id)),
                    Err(_) => println!("usage: del <note-id>"),
                },
                _ => unreachable!(),
            },
        },
        other => println!("unknown command `{other}`; type `help`"),
    }

    Outcome::Continue
}

fn report(result: Result<String, Box<dyn Error>>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => println!("error: {err}"),
    }
}

fn split_credentials(rest: &str) -> Option<(&str, &str)> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(username), Some(password), None) => Some((username, password)),
        _ => None,
    }
}

fn account_service(
    conn: &Connection,
) -> Result<AccountService<SqliteUserRepository<'_>>, Box<dyn Error>> {
    Ok(AccountService::new(SqliteUserRepository::try_new(conn)?))
}

fn note_service(
    conn: &Connection,
) -> Result<NoteService<SqliteNoteRepository<'_>>, Box<dyn Error>> {
    Ok(NoteService::new(SqliteNoteRepository::try_new(conn)?))
}

fn signup(db_path: &Path, username: &str, password: &str) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    account_service(&conn)?.signup(username, password)?;
    Ok("account created; log in to continue".to_string())
}

fn login(
    db_path: &Path,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let user_id = account_service(&conn)?.login(session, username, password)?;
    Ok(format!("logged in as `{username}` (user {user_id})"))
}

fn logout(db_path: &Path, session: &mut Session) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    account_service(&conn)?.logout(session);
    Ok("logged out".to_string())
}

fn add_note(db_path: &Path, owner_id: UserId, content: &str) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let note_id = note_service(&conn)?.create_note(owner_id, content)?;
    Ok(format!("saved note {note_id}"))
}

fn list_notes(db_path: &Path, owner_id: UserId) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let notes = note_service(&conn)?.list_notes(owner_id)?;
    if notes.is_empty() {
        return Ok("no notes yet".to_string());
    }

    let mut out = String::new();
    for note in &notes {
        out.push_str(&format!("{:>4}  {}\n", note.id, note.content));
    }
    out.pop();
    Ok(out)
}

fn delete_note(db_path: &Path, owner_id: UserId, note_id: NoteId) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let removed = note_service(&conn)?.delete_note(note_id, owner_id)?;
    if removed {
        Ok(format!("deleted note {note_id}"))
    } else {
        Ok(format!("no note {note_id}"))
    }
}

fn print_help() {
    println!("commands:");
    println!("  signup <username> <password>   create an account");
    println!("  login <username> <password>    authenticate");
    println!("  logout                         end the session");
    println!("  add <text>                     save a note");
    println!("  list                           show your notes");
    println!("  del <note-id>                  delete one of your notes");
    println!("  quit                           exit");
}
