use tracing::{debug, warn};

use super::KeyValueStore;
use crate::error::Result;
use crate::note::Note;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Reads and writes the whole note list as one JSON array under one key.
pub struct NoteStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the persisted notes.
    ///
    /// Missing, unreadable or malformed data is treated as an empty list.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read notes, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                debug!(key = %self.key, count = notes.len(), "loaded notes");
                notes
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed notes data");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `notes`.
    pub fn save(&mut self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string(notes)?;
        self.backend.set(&self.key, &json)?;
        debug!(key = %self.key, count = notes.len(), "saved notes");
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SqliteStore};
    use tempfile::TempDir;

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            text: "body".to_string(),
            date: "12/03/2023".to_string(),
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = NoteStore::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set("notes", "{not json").unwrap();
        let store = NoteStore::new(backend, "notes");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set("notes", r#"[{"id": 1}]"#).unwrap();
        let store = NoteStore::new(backend, "notes");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_writes_json_array() {
        let mut store = NoteStore::new(MemoryStore::new(), "notes");
        store.save(&[note("a", "A")]).unwrap();

        let raw = store.backend().get("notes").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["title"], "A");

        store.save(&[]).unwrap();
        assert_eq!(store.backend().get("notes").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let notes = vec![note("c", "C"), note("a", "A"), note("b", "B")];
        {
            let mut store = NoteStore::new(SqliteStore::open(tmp.path()).unwrap(), "notes");
            store.save(&notes).unwrap();
        }

        let store = NoteStore::new(SqliteStore::open(tmp.path()).unwrap(), "notes");
        assert_eq!(store.load(), notes);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut backend = MemoryStore::new();
        backend.set("other", "[]").unwrap();
        let mut store = NoteStore::new(backend, "mine");
        store.save(&[note("a", "A")]).unwrap();
        assert_eq!(store.key(), "mine");
        assert_eq!(store.backend().get("other").unwrap().unwrap(), "[]");
    }
}
