use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DirectoryStore;
use std::path::Path;

use super::helpers::require_open;

/// Writes the directory back to the open file.
pub fn run<S: DirectoryStore>(store: &mut S, session: &mut Session) -> Result<CmdResult> {
    let path = require_open(session)?;
    store.save(&path, &session.entries)?;
    session.unsaved = false;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} entries to {}",
        session.entries.len(),
        path.display()
    ))))
}

/// Writes the directory to `path` and makes that the open file.
pub fn run_as<S: DirectoryStore>(
    store: &mut S,
    session: &mut Session,
    path: &Path,
) -> Result<CmdResult> {
    require_open(session)?;
    store.save(path, &session.entries)?;
    session.path = Some(path.to_path_buf());
    session.unsaved = false;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} entries to {}",
        session.entries.len(),
        path.display()
    ))))
}
