use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::EntrySelector;
use crate::model::{Entry, EntryDraft};
use crate::session::Session;
use crate::validate::{validate, Mutation};

use super::helpers::{require_open, resolve_in_directory};

/// Rewrites all four fields of the selected entry in place.
pub fn run(session: &mut Session, selector: &EntrySelector, draft: EntryDraft) -> Result<CmdResult> {
    require_open(session)?;
    let position = resolve_in_directory(session, selector)?;

    let original_name = session.entries[position].name.clone();
    let entry = Entry::from(draft);
    validate(
        &session.entries,
        Mutation::Edit {
            original_name: &original_name,
        },
        &entry.name,
        &entry.phone,
        &entry.email,
    )?;

    session.entries[position] = entry.clone();
    session.mark_changed();

    let message = if original_name == entry.name {
        format!("Entry updated: {}", entry.name)
    } else {
        format!("Entry updated: {} (renamed from {})", entry.name, original_name)
    };

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_entries(vec![entry]))
}

/// The draft an edit form starts from: the selected entry's current values.
pub fn draft_for(session: &Session, selector: &EntrySelector) -> Result<EntryDraft> {
    require_open(session)?;
    let position = resolve_in_directory(session, selector)?;
    Ok(EntryDraft::from_entry(&session.entries[position]))
}
