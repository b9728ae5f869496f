use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, EntryDraft};
use crate::session::Session;
use crate::validate::{validate, Mutation};

use super::helpers::require_open;

pub fn run(session: &mut Session, draft: EntryDraft) -> Result<CmdResult> {
    require_open(session)?;

    let entry = Entry::from(draft);
    validate(
        &session.entries,
        Mutation::Add,
        &entry.name,
        &entry.phone,
        &entry.email,
    )?;

    session.entries.push(entry.clone());
    session.mark_changed();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry added: {}", entry.name)));
    Ok(result.with_affected_entries(vec![entry]))
}
