use crate::validate::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid directory file {} (line {line}: expected 4 fields, found {fields})", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("No file is open!")]
    NoFileOpen,

    #[error("You have unsaved changes!")]
    UnsavedChanges,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("{count} entries are named \"{name}\"; select one by index")]
    AmbiguousEntry { name: String, count: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
