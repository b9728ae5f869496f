use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::session::Session;
use crate::store::DirectoryStore;
use std::path::Path;

use super::helpers::require_saved;

/// Starts a new, empty directory at `path` and writes it out immediately.
pub fn run<S: DirectoryStore>(
    store: &mut S,
    session: &mut Session,
    path: &Path,
    overwrite: bool,
) -> Result<CmdResult> {
    require_saved(session)?;

    if store.exists(path) && !overwrite {
        return Err(RolodexError::Api(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    store.save(path, &[])?;
    session.replace_directory(path.to_path_buf(), Vec::new());

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created directory {}",
        path.display()
    ))))
}
