use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DirectoryStore;
use std::path::Path;

use super::helpers::require_saved;

/// Loads the directory at `path`, replacing whatever the session held.
///
/// On any failure the session keeps its previous directory.
pub fn run<S: DirectoryStore>(store: &S, session: &mut Session, path: &Path) -> Result<CmdResult> {
    require_saved(session)?;

    let loaded = store.load_directory(path)?;
    let count = loaded.entries.len();
    session.replace_directory(path.to_path_buf(), loaded.entries);

    let mut result = CmdResult::default().with_message(CmdMessage::info(format!(
        "Loaded {} entries from {}",
        count,
        path.display()
    )));
    let marker = session.marker().as_str();
    for glyph in loaded.markers.iter().filter(|g| g.as_str() != marker) {
        result.add_message(CmdMessage::info(format!(
            "Favorite marker '{}' read as favorite; it is saved as '{}'",
            glyph, marker
        )));
    }
    Ok(result)
}
