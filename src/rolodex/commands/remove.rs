use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::EntrySelector;
use crate::session::Session;

use super::helpers::{require_open, resolve_in_directory};

pub fn run(session: &mut Session, selector: &EntrySelector) -> Result<CmdResult> {
    require_open(session)?;
    let position = resolve_in_directory(session, selector)?;

    let entry = session.entries.remove(position);
    session.mark_changed();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Entry removed: {}", entry.name)))
        .with_affected_entries(vec![entry]))
}
