use crate::error::{Result, RolodexError};
use crate::index::EntrySelector;
use crate::session::Session;
use std::path::PathBuf;

/// Path of the open directory, or [`RolodexError::NoFileOpen`].
pub fn require_open(session: &Session) -> Result<PathBuf> {
    session
        .path
        .clone()
        .ok_or(RolodexError::NoFileOpen)
}

/// Refuses to leave a directory that has unsaved changes.
pub fn require_saved(session: &Session) -> Result<()> {
    if session.unsaved {
        return Err(RolodexError::UnsavedChanges);
    }
    Ok(())
}

/// Resolves `selector` against the visible list and returns the position of
/// that entry in the full directory.
///
/// A name shared by several visible rows is refused; the index still works.
pub fn resolve_in_directory(session: &Session, selector: &EntrySelector) -> Result<usize> {
    let visible = session.visible_entries();
    let named = selector.name_count(visible);
    if named > 1 {
        return Err(RolodexError::AmbiguousEntry {
            name: selector.as_str().to_string(),
            count: named,
        });
    }

    selector
        .resolve(visible)
        .and_then(|shown| session.directory_position(shown))
        .ok_or_else(|| RolodexError::EntryNotFound(selector.to_string()))
}
