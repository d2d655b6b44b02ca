//! Search module: title filtering and the list header's search toggle.

use crate::note::Note;

/// Return the notes whose title contains `query`, ignoring case.
///
/// An empty query matches every note. Order is preserved.
///
/// # Examples
///
/// ```ignore
/// let hits = filter(&notes, "GRO");
/// assert_eq!(hits[0].title, "Groceries");
/// ```
pub fn filter<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.title.to_lowercase().contains(&needle))
        .collect()
}

/// What the list header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header<'a> {
    /// Plain title, search closed.
    Title,
    /// Search box with the current query.
    SearchBox(&'a str),
}

/// Live query plus whether the search box is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    active: bool,
}

impl SearchState {
    /// Create a closed search with an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or close the search box. Closing clears the query.
    pub fn toggle(&mut self) {
        self.active = !self.active;
        if !self.active {
            self.query.clear();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn header(&self) -> Header<'_> {
        if self.active {
            Header::SearchBox(&self.query)
        } else {
            Header::Title
        }
    }

    /// Apply the current query to `notes`.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        filter(notes, &self.query)
    }
}
