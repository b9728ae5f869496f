use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_entries;
use crate::search::SearchField;
use crate::session::{SearchQuery, Session};

use super::helpers::require_open;

/// Replaces the shown list with the entries whose `field` matches `criterion`.
///
/// Text criteria are trimmed; a favorite criterion is a marker and is used as is.
pub fn run(session: &mut Session, field: SearchField, criterion: &str) -> Result<CmdResult> {
    require_open(session)?;

    let criterion = match field {
        SearchField::Favorite => criterion,
        _ => criterion.trim(),
    };

    session.run_query(SearchQuery {
        field,
        criterion: criterion.to_string(),
    });

    let listed = index_entries(session.search_results());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} of {} entries match {} \"{}\"",
        listed.len(),
        session.entries().len(),
        field,
        criterion
    )));
    Ok(result.with_listed_entries(listed))
}

/// Goes back to showing the full directory.
pub fn reset(session: &mut Session) -> Result<CmdResult> {
    session.showing_search_results = false;
    Ok(CmdResult::default().with_listed_entries(index_entries(session.entries())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::open;
    use crate::error::RolodexError;
    use crate::model::FavoriteMarker;
    use crate::search::favorite_criterion;
    use crate::store::memory::fixtures::StoreFixture;

    fn session() -> Session {
        let store = StoreFixture::new()
            .with_favorite("Alice", "5550100", "alice@example.com")
            .with_entry("Bob", "5550199", "")
            .with_favorite("Malik", "", "malik@example.org")
            .build();
        let mut session = Session::new();
        open::run(&store, &mut session, &StoreFixture::path()).unwrap();
        session
    }

    #[test]
    fn shows_results_and_sets_flag() {
        let mut session = session();
        let result = run(&mut session, SearchField::Email, "example").unwrap();

        assert!(session.is_showing_search_results());
        assert_eq!(result.listed_entries.len(), 2);
        assert_eq!(result.listed_entries[1].index, 2);
        assert_eq!(result.listed_entries[1].entry.name, "Malik");
        assert_eq!(session.entries().len(), 3);
    }

    #[test]
    fn favorites_by_marker() {
        let mut session = session();
        let marker = FavoriteMarker::default();

        let result = run(
            &mut session,
            SearchField::Favorite,
            &favorite_criterion(true, &marker),
        )
        .unwrap();
        let names: Vec<&str> = result
            .listed_entries
            .iter()
            .map(|d| d.entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Malik"]);

        let result = run(
            &mut session,
            SearchField::Favorite,
            &favorite_criterion(false, &marker),
        )
        .unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].entry.name, "Bob");
    }

    #[test]
    fn text_criteria_ignore_surrounding_spaces() {
        let mut session = session();
        let result = run(&mut session, SearchField::Name, "  Ali ").unwrap();

        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].entry.name, "Alice");
        assert_eq!(session.last_query().unwrap().criterion, "Ali");
    }

    #[test]
    fn reset_shows_full_directory() {
        let mut session = session();
        run(&mut session, SearchField::Name, "Bob").unwrap();
        assert_eq!(session.visible_entries().len(), 1);

        let result = reset(&mut session).unwrap();
        assert!(!session.is_showing_search_results());
        assert_eq!(result.listed_entries.len(), 3);
        assert_eq!(session.visible_entries().len(), 3);
    }

    #[test]
    fn requires_open_file() {
        let mut session = Session::new();
        assert!(matches!(
            run(&mut session, SearchField::Name, "a"),
            Err(RolodexError::NoFileOpen)
        ));
        assert!(!session.is_showing_search_results());
    }

    #[test]
    fn does_not_mark_unsaved() {
        let mut session = session();
        run(&mut session, SearchField::Name, "A").unwrap();
        assert!(!session.has_unsaved_changes());
    }
}
