mod memory;
mod note_store;
mod sqlite_store;

pub use memory::MemoryStore;
pub use note_store::{NoteStore, DEFAULT_STORAGE_KEY};
pub use sqlite_store::SqliteStore;

use crate::error::Result;

/// A string key/value store with whole-value reads and writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}
