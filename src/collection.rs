//! The ordered, in-memory set of notes for a session.

use tracing::debug;

use crate::error::{JotterError, Result};
use crate::note::Note;

/// Ordered notes. New notes go to the back, edited notes to the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Insert `note`, or replace the record with the same id and move it to the front.
    pub fn add_or_update(&mut self, note: Note) {
        match self.notes.iter().position(|n| n.id == note.id) {
            Some(pos) => {
                debug!(id = %note.id, from = pos, "updating note");
                self.notes.remove(pos);
                self.notes.insert(0, note);
            }
            None => {
                debug!(id = %note.id, "appending note");
                self.notes.push(note);
            }
        }
    }

    /// Remove the note with `id`. Returns the removed note, if any.
    pub fn delete(&mut self, id: &str) -> Option<Note> {
        let pos = self.notes.iter().position(|n| n.id == id)?;
        debug!(id, "deleting note");
        Some(self.notes.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Look a note up by full id or unique id prefix.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Note> {
        if let Some(note) = self.get(prefix) {
            return Ok(note);
        }
        if prefix.is_empty() {
            return Err(JotterError::NoteNotFound(prefix.to_string()));
        }

        let mut matches = self.notes.iter().filter(|n| n.id.starts_with(prefix));
        match (matches.next(), matches.count()) {
            (Some(note), 0) => Ok(note),
            (Some(_), rest) => Err(JotterError::AmbiguousId(prefix.to_string(), rest + 1)),
            (None, _) => Err(JotterError::NoteNotFound(prefix.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
