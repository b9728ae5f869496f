//! # Session State
//!
//! Everything the application remembers between two user actions:
//!
//! - the path of the open directory file (a file is open iff there is one)
//! - whether the in-memory directory differs from what was last written
//! - whether the user is looking at search results or at the full directory
//! - the entries themselves, and the last search results
//!
//! A fresh session has no file, no unsaved changes, and shows the (empty)
//! full directory. Only the command layer mutates a session.

use crate::model::{Entry, FavoriteMarker};
use crate::search::{matching_positions, SearchField};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub field: SearchField,
    pub criterion: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) path: Option<PathBuf>,
    pub(crate) unsaved: bool,
    pub(crate) showing_search_results: bool,
    pub(crate) entries: Vec<Entry>,
    pub(crate) search_results: Vec<Entry>,
    /// Directory position of each entry in `search_results`
    pub(crate) search_positions: Vec<usize>,
    pub(crate) last_query: Option<SearchQuery>,
    pub(crate) marker: FavoriteMarker,
}

/// Outcome of asking to close the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Nothing would be lost
    Close,
    /// Closing now discards unsaved changes; ask first
    ConfirmDiscard,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, marker: FavoriteMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn is_file_open(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn is_showing_search_results(&self) -> bool {
        self.showing_search_results
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn search_results(&self) -> &[Entry] {
        &self.search_results
    }

    pub fn last_query(&self) -> Option<&SearchQuery> {
        self.last_query.as_ref()
    }

    pub fn marker(&self) -> &FavoriteMarker {
        &self.marker
    }

    /// The list the user is currently looking at.
    pub fn visible_entries(&self) -> &[Entry] {
        if self.showing_search_results {
            &self.search_results
        } else {
            &self.entries
        }
    }

    /// Position in the full directory of the `shown`-th visible entry.
    pub fn directory_position(&self, shown: usize) -> Option<usize> {
        if self.showing_search_results {
            self.search_positions.get(shown).copied()
        } else {
            (shown < self.entries.len()).then_some(shown)
        }
    }

    pub fn close_decision(&self) -> CloseDecision {
        if self.unsaved {
            CloseDecision::ConfirmDiscard
        } else {
            CloseDecision::Close
        }
    }

    /// Switches the session to a freshly loaded or created directory.
    pub(crate) fn replace_directory(&mut self, path: PathBuf, entries: Vec<Entry>) {
        self.path = Some(path);
        self.entries = entries;
        self.unsaved = false;
        self.showing_search_results = false;
        self.search_results.clear();
        self.search_positions.clear();
        self.last_query = None;
    }

    pub(crate) fn run_query(&mut self, query: SearchQuery) {
        self.search_positions = matching_positions(
            &query.criterion,
            query.field,
            &self.entries,
            &self.marker,
        );
        self.search_results = self
            .search_positions
            .iter()
            .map(|&i| self.entries[i].clone())
            .collect();
        self.last_query = Some(query);
        self.showing_search_results = true;
    }

    /// Recomputes displayed results after the directory changed underneath them.
    pub(crate) fn refresh_results(&mut self) {
        if !self.showing_search_results {
            return;
        }
        if let Some(query) = self.last_query.clone() {
            self.run_query(query);
        }
    }

    pub(crate) fn mark_changed(&mut self) {
        self.unsaved = true;
        self.refresh_results();
    }
}
