//! Interactive terminal frontend for the eventbook core.
//!
//! # Responsibility
//! - Supply the form-input, confirmation and rendering collaborators the
//!   core store treats as external.
//! - Keep all mutation gating (confirmation prompts) outside the store.

use eventbook_core::db::open_db;
use eventbook_core::{
    default_log_level, format_long, init_logging, parse_ymd, Event, EventId, EventStore,
    SlotRepository, SqliteSlotRepository, StoreError,
};
use std::io::{self, BufRead, Write};

fn main() {
    if let Err(message) = run() {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "eventbook.db".to_string());

    let log_dir = std::env::temp_dir().join("eventbook-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(message) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    let conn = open_db(&db_path).map_err(|err| format!("failed to open `{db_path}`: {err}"))?;
    let repo = SqliteSlotRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let mut store = EventStore::load(repo).map_err(|err| err.to_string())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("eventbook {} ({db_path})", eventbook_core::core_version());
    render_events(store.list());
    print_help();

    loop {
        let Some(line) = prompt_line(&mut input, "> ")? else {
            break;
        };
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("add") => add_event(&mut store, &mut input)?,
            Some("list") => render_events(store.list()),
            Some("delete") => delete_event(&mut store, &mut input, parts.next())?,
            Some("samples") => add_samples(&mut store)?,
            Some("clear") => clear_events(&mut store, &mut input)?,
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
        }
    }

    Ok(())
}

/// Form-input collaborator: collects the four event fields line by line.
fn add_event<R: SlotRepository>(
    store: &mut EventStore<R>,
    input: &mut impl BufRead,
) -> Result<(), String> {
    let Some(title) = prompt_line(input, "Title: ")? else {
        return Ok(());
    };

    let date = loop {
        let Some(raw) = prompt_line(input, "Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        match parse_ymd(&raw) {
            Some(date) => break date,
            None => println!("Could not read `{}` as a date, try again.", raw.trim()),
        }
    };

    let Some(category) = prompt_line(input, "Category: ")? else {
        return Ok(());
    };
    let Some(description) = prompt_line(input, "Description: ")? else {
        return Ok(());
    };

    let id = store.next_id();
    let event = Event::new(id, title.trim(), date, category.trim(), description.trim());
    match store.add(event) {
        Ok(()) => {
            println!("Event Added!");
            render_events(store.list());
        }
        Err(StoreError::Validation(err)) => println!("{err}"),
        Err(err) => return Err(err.to_string()),
    }

    Ok(())
}

fn delete_event<R: SlotRepository>(
    store: &mut EventStore<R>,
    input: &mut impl BufRead,
    arg: Option<&str>,
) -> Result<(), String> {
    let id: EventId = match arg.and_then(|raw| raw.parse().ok()) {
        Some(id) => id,
        None => {
            println!("usage: delete <id>");
            return Ok(());
        }
    };

    if !confirm(input, "Are you sure you want to delete this event?")? {
        return Ok(());
    }

    match store.remove_by_id(id) {
        Ok(true) => render_events(store.list()),
        Ok(false) => println!("No event with id {id}."),
        Err(err) => return Err(err.to_string()),
    }

    Ok(())
}

fn clear_events<R: SlotRepository>(
    store: &mut EventStore<R>,
    input: &mut impl BufRead,
) -> Result<(), String> {
    if store.is_empty() {
        println!("No events to clear!");
        return Ok(());
    }

    if confirm(input, "Are you sure you want to delete all events?")? {
        store.clear().map_err(|err| err.to_string())?;
        render_events(store.list());
    }

    Ok(())
}

fn add_samples<R: SlotRepository>(store: &mut EventStore<R>) -> Result<(), String> {
    match store.add_sample_batch() {
        Ok(()) => {
            println!("Upcoming events added successfully!");
            render_events(store.list());
        }
        Err(StoreError::SampleBatchExists) => println!("Sample events have already been added!"),
        Err(err) => return Err(err.to_string()),
    }

    Ok(())
}

/// Confirmation-prompt collaborator: y/N question, defaults to no.
fn confirm(input: &mut impl BufRead, question: &str) -> Result<bool, String> {
    let Some(answer) = prompt_line(input, &format!("{question} [y/N] "))? else {
        return Ok(false);
    };
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

/// Rendering collaborator: redraws the full list after every mutation.
fn render_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events yet. Add your first event!");
        return;
    }

    for event in events {
        println!("#{} {} [{}]", event.id, event.title, event.category);
        println!("    {}", format_long(event.date));
        if !event.description.is_empty() {
            println!("    {}", event.description);
        }
    }
}

fn print_help() {
    println!("commands: add, list, delete <id>, samples, clear, help, quit");
}

/// Reads one input line after printing a prompt; `None` on end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|err| format!("failed to flush stdout: {err}"))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|err| format!("failed to read input: {err}"))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
