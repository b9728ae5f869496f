//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! storage backend and the [`Session`], and is the single entry point for all
//! rolodex operations regardless of the UI in front of it (one-shot CLI
//! commands or the interactive shell).
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O**: No stdout, stderr, or terminal formatting
//!
//! ## Generic Over DirectoryStore
//!
//! `RolodexApi<S: DirectoryStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::EntrySelector;
use crate::model::{EntryDraft, FavoriteMarker};
use crate::search::{favorite_criterion, SearchField};
use crate::session::{CloseDecision, Session};
use crate::store::DirectoryStore;
use std::path::Path;

/// The main API facade for rolodex operations.
pub struct RolodexApi<S: DirectoryStore> {
    store: S,
    session: Session,
    paths: commands::RolodexPaths,
}

impl<S: DirectoryStore> RolodexApi<S> {
    pub fn new(store: S, session: Session, paths: commands::RolodexPaths) -> Self {
        Self {
            store,
            session,
            paths,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn marker(&self) -> &FavoriteMarker {
        self.session.marker()
    }

    pub fn new_directory(&mut self, path: &Path, overwrite: bool) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &mut self.session, path, overwrite)
    }

    pub fn open(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::open::run(&self.store, &mut self.session, path)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &mut self.session)
    }

    pub fn save_as(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::save::run_as(&mut self.store, &mut self.session, path)
    }

    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.session, draft)
    }

    pub fn edit_entry(
        &mut self,
        selector: impl Into<EntrySelector>,
        draft: EntryDraft,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.session, &selector.into(), draft)
    }

    /// Current values of an entry, for pre-filling an edit.
    pub fn edit_draft(&self, selector: impl Into<EntrySelector>) -> Result<EntryDraft> {
        commands::edit::draft_for(&self.session, &selector.into())
    }

    pub fn remove_entry(
        &mut self,
        selector: impl Into<EntrySelector>,
    ) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.session, &selector.into())
    }

    pub fn search(&mut self, field: SearchField, criterion: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.session, field, criterion)
    }

    /// Favorite search from a yes/no choice rather than a raw marker.
    pub fn search_favorites(&mut self, favorite: bool) -> Result<commands::CmdResult> {
        let criterion = favorite_criterion(favorite, self.session.marker());
        commands::search::run(&mut self.session, SearchField::Favorite, &criterion)
    }

    pub fn reset_search(&mut self) -> Result<commands::CmdResult> {
        commands::search::reset(&mut self.session)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.session)
    }

    pub fn close_decision(&self) -> CloseDecision {
        self.session.close_decision()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::RolodexPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RolodexPaths};
