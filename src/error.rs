use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Ambiguous id '{0}' matches {1} notes. Use more characters.")]
    AmbiguousId(String, usize),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("No note is open for editing")]
    NotEditing,

    #[error("Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, JotterError>;
