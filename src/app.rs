//! Application state: the note collection, list/edit mode, the open form and
//! the search box, with every mutation going through the methods here.
//!
//! The store is written once after each confirmed change to the collection
//! (a valid save or a delete). Navigation, searching and rejected submits
//! never touch the store.

use chrono::Local;
use tracing::{debug, info};

use crate::collection::NoteCollection;
use crate::config::Config;
use crate::error::{JotterError, Result};
use crate::form::NoteForm;
use crate::note::{format_date, Note};
use crate::search::SearchState;
use crate::selection::Mode;
use crate::storage::{KeyValueStore, NoteStore};

/// Outcome of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// The note was stored and the editor closed.
    Saved(Note),
    /// Title or text was empty. Nothing changed.
    Ignored,
}

pub struct App<S> {
    notes: NoteCollection,
    mode: Mode,
    form: Option<NoteForm>,
    search: SearchState,
    store: NoteStore<S>,
    date_format: String,
}

impl<S: KeyValueStore> App<S> {
    /// Load notes from `backend` and start on the list view.
    ///
    /// Fails if `config` does not validate.
    pub fn load(backend: S, config: &Config) -> Result<Self> {
        config.validate()?;
        let store = NoteStore::new(backend, config.storage_key.clone());
        let notes = NoteCollection::from_notes(store.load());
        info!(count = notes.len(), "session started");

        Ok(Self {
            notes,
            mode: Mode::default(),
            form: None,
            search: SearchState::new(),
            store,
            date_format: config.date_format.clone(),
        })
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The open form, when editing.
    pub fn form(&self) -> Option<&NoteForm> {
        self.form.as_ref()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// Notes shown on the list view after the search query is applied.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.search.apply(self.notes.as_slice())
    }

    /// Open an empty form for a new note.
    pub fn new_note(&mut self) -> Result<()> {
        self.mode.begin_new()?;
        self.form = Some(NoteForm::blank());
        Ok(())
    }

    /// Open the note with this id or unique id prefix.
    pub fn open(&mut self, id: &str) -> Result<Note> {
        let note = self.notes.find_by_prefix(id)?.clone();
        self.mode.select(note.clone())?;
        self.form = Some(NoteForm::for_note(Some(&note)));
        Ok(note)
    }

    /// Leave the form without saving.
    pub fn back(&mut self) -> Result<()> {
        self.mode.finish()?;
        self.form = None;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.form_mut()?.title = title.into();
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.form_mut()?.text = text.into();
        Ok(())
    }

    /// Add a line to the end of the body.
    pub fn append_text(&mut self, line: &str) -> Result<()> {
        let form = self.form_mut()?;
        if !form.text.is_empty() {
            form.text.push('\n');
        }
        form.text.push_str(line);
        Ok(())
    }

    /// Save the form. Empty title or text is ignored and leaves everything as it was.
    pub fn submit(&mut self) -> Result<Submit> {
        let form = self.form.as_ref().ok_or(JotterError::NotEditing)?;
        if !form.is_valid() {
            debug!("submit ignored: title and text are required");
            return Ok(Submit::Ignored);
        }

        let date = format_date(&Local::now(), &self.date_format)?;
        let note = form.submit(date).ok_or(JotterError::NotEditing)?;

        self.notes.add_or_update(note.clone());
        self.persist()?;
        self.mode.finish()?;
        self.form = None;
        Ok(Submit::Saved(note))
    }

    /// Delete the note open in the form and return to the list.
    pub fn delete(&mut self) -> Result<Option<Note>> {
        let id = match &self.mode {
            Mode::Editing(Some(note)) => note.id.clone(),
            Mode::Editing(None) => {
                return Err(JotterError::InvalidTransition {
                    action: "delete",
                    state: "editing a new note",
                })
            }
            Mode::Viewing => return Err(JotterError::NotEditing),
        };

        let removed = self.notes.delete(&id);
        if removed.is_some() {
            self.persist()?;
        }
        self.mode.finish()?;
        self.form = None;
        Ok(removed)
    }

    /// Open or close the search box.
    pub fn toggle_search(&mut self) {
        self.search.toggle();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// Create a note in one step. Same rules as the form.
    pub fn create(&mut self, title: String, text: String) -> Result<Submit> {
        self.new_note()?;
        self.set_title(title)?;
        self.set_text(text)?;
        self.submit_or_back()
    }

    /// Edit a note in one step. Fields left as `None` keep their value.
    pub fn update(&mut self, id: &str, title: Option<String>, text: Option<String>) -> Result<Submit> {
        self.open(id)?;
        if let Some(title) = title {
            self.set_title(title)?;
        }
        if let Some(text) = text {
            self.set_text(text)?;
        }
        self.submit_or_back()
    }

    /// Delete a note by id or unique prefix in one step.
    pub fn remove(&mut self, id: &str) -> Result<Option<Note>> {
        self.open(id)?;
        self.delete()
    }

    fn submit_or_back(&mut self) -> Result<Submit> {
        let outcome = self.submit()?;
        if outcome == Submit::Ignored {
            self.back()?;
        }
        Ok(outcome)
    }

    fn form_mut(&mut self) -> Result<&mut NoteForm> {
        self.form.as_mut().ok_or(JotterError::NotEditing)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(self.notes.as_slice())
    }
}
