//! List/edit mode and the note being edited.

use std::fmt;

use tracing::debug;

use crate::error::{JotterError, Result};
use crate::note::Note;

/// Whether the list or the edit form is showing.
///
/// `Editing(None)` is a new note, `Editing(Some(_))` holds a copy of the
/// note that was opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Viewing,
    Editing(Option<Note>),
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing(_))
    }

    /// The note being edited, if an existing one was opened.
    pub fn selected(&self) -> Option<&Note> {
        match self {
            Mode::Editing(Some(note)) => Some(note),
            _ => None,
        }
    }

    /// Viewing -> Editing(None).
    pub fn begin_new(&mut self) -> Result<()> {
        self.expect_viewing("create a note")?;
        debug!("mode: editing new note");
        *self = Mode::Editing(None);
        Ok(())
    }

    /// Viewing -> Editing(Some(note)).
    pub fn select(&mut self, note: Note) -> Result<()> {
        self.expect_viewing("open a note")?;
        debug!(id = %note.id, "mode: editing existing note");
        *self = Mode::Editing(Some(note));
        Ok(())
    }

    /// Editing -> Viewing. Used for back, save and delete.
    pub fn finish(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(JotterError::InvalidTransition {
                action: "leave the editor",
                state: self.label(),
            });
        }
        debug!("mode: viewing");
        *self = Mode::Viewing;
        Ok(())
    }

    fn expect_viewing(&self, action: &'static str) -> Result<()> {
        if self.is_editing() {
            return Err(JotterError::InvalidTransition {
                action,
                state: self.label(),
            });
        }
        Ok(())
    }

    fn label(&self) -> &'static str {
        match self {
            Mode::Viewing => "viewing the list",
            Mode::Editing(_) => "editing a note",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Viewing => write!(f, "list"),
            Mode::Editing(None) => write!(f, "new note"),
            Mode::Editing(Some(note)) => write!(f, "editing {}", note.short_id()),
        }
    }
}
