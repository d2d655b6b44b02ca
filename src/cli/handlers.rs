use std::io::{self, Read};
use std::path::PathBuf;

use tracing::info;

use crate::app::{App, Submit};
use crate::config::Config;
use crate::error::{JotterError, Result};
use crate::note::Note;
use crate::search::{filter, Header};
use crate::shell;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::view::{render_list, render_note};

const NOTHING_SAVED: &str = "Nothing saved: title and text are required.";

fn open_app(data_dir: Option<PathBuf>) -> Result<App<SqliteStore>> {
    let config = Config::load(data_dir)?;
    let store = SqliteStore::open(&config.data_dir)?;
    App::load(store, &config)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

fn print_notes(header: Header<'_>, notes: &[&Note], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(notes)?);
    } else {
        print!("{}", render_list(&header, notes));
    }
    Ok(())
}

pub fn handle_list(data_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let app = open_app(data_dir)?;
    print_notes(Header::Title, &app.visible_notes(), json)
}

pub fn handle_search(data_dir: Option<PathBuf>, query: String, json: bool) -> Result<()> {
    let app = open_app(data_dir)?;
    let results = filter(app.notes().as_slice(), &query);
    print_notes(Header::SearchBox(&query), &results, json)
}

pub fn handle_show(data_dir: Option<PathBuf>, id: String, json: bool) -> Result<()> {
    let app = open_app(data_dir)?;
    let note = app.notes().find_by_prefix(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        print!("{}", render_note(note));
    }
    Ok(())
}

pub fn handle_add(
    data_dir: Option<PathBuf>,
    title: String,
    text: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut app = open_app(data_dir)?;

    let text = if stdin {
        read_stdin()?
    } else {
        text.unwrap_or_default()
    };

    match app.create(title, text)? {
        Submit::Saved(note) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else {
                println!("Created note ({}) - {}", note.short_id(), note.title);
            }
        }
        Submit::Ignored => println!("{}", NOTHING_SAVED),
    }

    Ok(())
}

pub fn handle_edit(
    data_dir: Option<PathBuf>,
    id: String,
    title: Option<String>,
    text: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut app = open_app(data_dir)?;

    let text = if stdin { Some(read_stdin()?) } else { text };

    match app.update(&id, title, text)? {
        Submit::Saved(note) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else {
                println!("Updated note ({}) - {}", note.short_id(), note.title);
            }
        }
        Submit::Ignored => println!("{}", NOTHING_SAVED),
    }

    Ok(())
}

pub fn handle_delete(data_dir: Option<PathBuf>, id: String, force: bool) -> Result<()> {
    let mut app = open_app(data_dir)?;
    let note = app.notes().find_by_prefix(&id)?.clone();

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete note ({}) - {}? [y/N] ", note.short_id(), note.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            // Non-interactive mode without --force, abort
            return Err(JotterError::ConfirmationRequired);
        }
    }

    app.remove(&note.id)?;
    println!("Deleted note ({}) - {}", note.short_id(), note.title);

    Ok(())
}

pub fn handle_shell(data_dir: Option<PathBuf>, ephemeral: bool) -> Result<()> {
    let config = Config::load(data_dir)?;
    let disk = SqliteStore::open(&config.data_dir)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if ephemeral {
        // Start from a copy of the saved notes and never write back.
        let mut memory = MemoryStore::new();
        if let Some(raw) = disk.get(&config.storage_key)? {
            memory.set(&config.storage_key, &raw)?;
        }
        info!("ephemeral session, changes are not saved");
        let mut app = App::load(memory, &config)?;
        shell::run(&mut app, stdin.lock(), &mut stdout)
    } else {
        let mut app = App::load(disk, &config)?;
        shell::run(&mut app, stdin.lock(), &mut stdout)
    }
}
