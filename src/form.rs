//! The single-note edit form.

use crate::note::{new_id, Note};

/// Editable fields, pre-filled from the opened note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub text: String,
    editing: Option<Note>,
}

impl NoteForm {
    /// Empty form for a new note.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form for `note`, or a blank one when `None`.
    pub fn for_note(note: Option<&Note>) -> Self {
        match note {
            Some(note) => Self {
                title: note.title.clone(),
                text: note.text.clone(),
                editing: Some(note.clone()),
            },
            None => Self::blank(),
        }
    }

    /// Delete is only offered for a note that already exists.
    pub fn can_delete(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.text.is_empty()
    }

    /// Build the note to save, or `None` when title or text is empty.
    pub fn submit(&self, date: String) -> Option<Note> {
        if !self.is_valid() {
            return None;
        }

        let id = match &self.editing {
            Some(note) => note.id.clone(),
            None => new_id(),
        };

        Some(Note {
            id,
            title: self.title.clone(),
            text: self.text.clone(),
            date,
        })
    }
}
