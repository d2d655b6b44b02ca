//! Interactive session: one command per line, the current view redrawn after each.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::app::App;
use crate::error::{JotterError, Result};
use crate::selection::Mode;
use crate::storage::KeyValueStore;
use crate::view::{render_form, render_list};

const HELP: &str = "\
List view:
  new               start a new note
  open <n|id>       edit the n-th listed note, or a note by id prefix
  search            open or close the search box
  query <text>      filter titles (opens the search box)
  list              redraw the list
Edit view:
  title <text>      set the title
  text <line>       append a line to the body
  clear             empty the body
  save              save and return to the list (needs title and text)
  delete            delete the open note
  back              return to the list without saving
Anywhere:
  help, quit
";

enum Step {
    Continue,
    Quit,
}

/// Run commands from `input` until `quit` or end of input.
pub fn run<S, R, W>(app: &mut App<S>, input: R, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    draw(app, out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt(app, out)?;
            continue;
        }

        debug!(command = line, "shell command");
        match execute(app, line, out) {
            Ok(Step::Quit) => return Ok(()),
            Ok(Step::Continue) => {}
            Err(e) if is_user_error(&e) => writeln!(out, "! {}", e)?,
            Err(e) => return Err(e),
        }
        draw(app, out)?;
    }

    Ok(())
}

fn execute<S, W>(app: &mut App<S>, line: &str, out: &mut W) -> Result<Step>
where
    S: KeyValueStore,
    W: Write,
{
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "quit" | "exit" | "q" => return Ok(Step::Quit),
        "help" | "?" => write!(out, "{}", HELP)?,
        "list" | "ls" => {}
        "new" | "+" => app.new_note()?,
        "open" => {
            let id = resolve_target(app, arg)?;
            app.open(&id)?;
        }
        "search" => app.toggle_search(),
        "query" => {
            if !app.search().is_active() {
                app.toggle_search();
            }
            app.set_query(arg);
        }
        "title" => app.set_title(arg)?,
        "text" => app.append_text(arg)?,
        "clear" => app.set_text(String::new())?,
        // An incomplete form stays open without comment.
        "save" => {
            app.submit()?;
        }
        "delete" => {
            app.delete()?;
        }
        "back" => app.back()?,
        other => writeln!(out, "Unknown command '{}'. Type 'help'.", other)?,
    }

    Ok(Step::Continue)
}

/// Turn a list position or id prefix into a note id.
fn resolve_target<S: KeyValueStore>(app: &App<S>, arg: &str) -> Result<String> {
    if arg.is_empty() {
        return Err(JotterError::NoteNotFound(String::new()));
    }

    if let Ok(position) = arg.parse::<usize>() {
        let visible = app.visible_notes();
        if position >= 1 && position <= visible.len() {
            return Ok(visible[position - 1].id.clone());
        }
    }

    Ok(app.notes().find_by_prefix(arg)?.id.clone())
}

fn draw<S: KeyValueStore, W: Write>(app: &App<S>, out: &mut W) -> Result<()> {
    writeln!(out)?;
    match (app.mode(), app.form()) {
        (Mode::Editing(_), Some(form)) => write!(out, "{}", render_form(form))?,
        _ => write!(out, "{}", render_list(&app.search().header(), &app.visible_notes()))?,
    }
    prompt(app, out)
}

/// `[list] > `, `[new note] > ` or `[editing 1a2b3c4] > `.
fn prompt<S: KeyValueStore, W: Write>(app: &App<S>, out: &mut W) -> Result<()> {
    write!(out, "[{}] > ", app.mode())?;
    out.flush()?;
    Ok(())
}

fn is_user_error(e: &JotterError) -> bool {
    matches!(
        e,
        JotterError::NoteNotFound(_)
            | JotterError::AmbiguousId(..)
            | JotterError::InvalidTransition { .. }
            | JotterError::NotEditing
    )
}
