pub mod app;
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod form;
pub mod note;
pub mod search;
pub mod selection;
pub mod shell;
pub mod storage;
pub mod view;

pub use app::{App, Submit};
pub use collection::NoteCollection;
pub use config::Config;
pub use error::{JotterError, Result};
pub use note::Note;
pub use storage::{KeyValueStore, MemoryStore, NoteStore, SqliteStore};
