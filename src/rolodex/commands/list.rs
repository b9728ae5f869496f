use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_entries;
use crate::session::Session;

/// Lists what the user is currently looking at: search results while they are
/// shown, the full directory otherwise.
pub fn run(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(index_entries(session.visible_entries())))
}
