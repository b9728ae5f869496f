use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_entries;
use crate::session::Session;
use crate::validate::validate_with;
use std::collections::HashMap;

use super::helpers::require_open;

/// Reports entries that would not pass validation today.
///
/// Files are not validated on load, so hand-edited or older directories can
/// hold duplicates or malformed values. Nothing is changed here.
pub fn run(session: &Session) -> Result<CmdResult> {
    require_open(session)?;

    let mut result = CmdResult::default();
    let mut flagged = Vec::new();

    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for entry in &session.entries {
        *name_counts.entry(entry.name.as_str()).or_default() += 1;
    }

    for (i, entry) in session.entries.iter().enumerate() {
        let duplicate = name_counts.get(entry.name.as_str()).is_some_and(|n| *n > 1);
        if let Err(reason) = validate_with(duplicate, &entry.name, &entry.phone, &entry.email) {
            result.add_message(CmdMessage::warning(format!(
                "{}. {}: {}",
                i + 1,
                if entry.name.is_empty() {
                    "(no name)"
                } else {
                    entry.name.as_str()
                },
                reason
            )));
            flagged.push(entry.clone());
        }
    }

    if flagged.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "All {} entries are valid",
            session.entries.len()
        )));
    }

    let listed = index_entries(&flagged);
    Ok(result.with_listed_entries(listed))
}
