//! # Storage Layer
//!
//! A directory lives in a single delimited text file. The [`DirectoryStore`]
//! trait keeps the command layer unaware of where entries actually go.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One line per entry, fields separated by `;`, lines ended by `\n`
//!   - Field order: name, phone, email, favorite marker
//!   - Fields holding `;`, `"` or a line break are quoted, everything else is bare
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keyed by path, no filesystem access
//!
//! ## File Format
//!
//! ```text
//! Alice;5550100;alice@example.com;☆
//! Bob;5550199;;
//! "Doe; Jane";;jane@example.org;
//! ```
//!
//! A load either yields every row or fails; there is no partial result.
//! Any non-empty favorite column reads as a favorite, whatever glyph it holds.

use crate::error::Result;
use crate::model::Entry;
use std::path::Path;

/// A directory as read from storage.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadedDirectory {
    pub entries: Vec<Entry>,
    /// Distinct non-empty favorite-column values, in first-seen order
    pub markers: Vec<String>,
}

pub mod fs;
pub mod memory;

/// Abstract interface for directory persistence.
pub trait DirectoryStore {
    /// Read every entry of the directory at `path`, in file order
    fn load(&self, path: &Path) -> Result<Vec<Entry>>;

    /// Like [`load`](Self::load), also reporting the favorite glyphs found.
    /// Stores that keep no glyphs report none.
    fn load_directory(&self, path: &Path) -> Result<LoadedDirectory> {
        Ok(LoadedDirectory {
            entries: self.load(path)?,
            markers: Vec::new(),
        })
    }

    /// Replace the directory at `path` with `entries`
    fn save(&mut self, path: &Path, entries: &[Entry]) -> Result<()>;

    /// Whether a directory already exists at `path`
    fn exists(&self, path: &Path) -> bool;
}
