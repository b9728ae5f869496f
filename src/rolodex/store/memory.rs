use super::DirectoryStore;
use crate::error::{Result, RolodexError};
use crate::model::Entry;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, Vec<Entry>>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves, across all paths.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn contents(&self, path: &Path) -> Option<&[Entry]> {
        self.files.get(path).map(Vec::as_slice)
    }
}

impl DirectoryStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<Vec<Entry>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RolodexError::FileAccess {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            })
    }

    fn save(&mut self, path: &Path, entries: &[Entry]) -> Result<()> {
        self.files.insert(path.to_path_buf(), entries.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const FIXTURE_PATH: &str = "contacts.csv";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        entries: Vec<Entry>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                entries: Vec::new(),
            }
        }

        pub fn path() -> PathBuf {
            PathBuf::from(FIXTURE_PATH)
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = self.entries.len() + 1;
                self.entries.push(Entry::new(
                    format!("Contact {}", n),
                    format!("55501{:02}", i),
                    "",
                    false,
                ));
            }
            self
        }

        pub fn with_entry(mut self, name: &str, phone: &str, email: &str) -> Self {
            self.entries.push(Entry::new(name, phone, email, false));
            self
        }

        pub fn with_favorite(mut self, name: &str, phone: &str, email: &str) -> Self {
            self.entries.push(Entry::new(name, phone, email, true));
            self
        }

        /// Writes the collected entries to [`FIXTURE_PATH`] and returns the store.
        pub fn build(mut self) -> InMemoryStore {
            self.store
                .files
                .insert(Self::path(), std::mem::take(&mut self.entries));
            self.store
        }
    }
}
