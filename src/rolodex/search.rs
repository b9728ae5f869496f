//! Single-field search over a directory.
//!
//! Text fields (name, phone, email) match on case-sensitive substring, which
//! also covers exact equality. The favorite field only matches exactly: the
//! criterion is compared with the marker the entry would be written with, so
//! the marker glyph selects favorites and an empty criterion selects
//! everything else.
//!
//! Results are copies in directory order and are recomputed from scratch on
//! every call.

use crate::model::{Entry, FavoriteMarker};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Phone,
    Email,
    Favorite,
}

impl SearchField {
    pub fn all() -> &'static [SearchField] {
        &[
            SearchField::Name,
            SearchField::Phone,
            SearchField::Email,
            SearchField::Favorite,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Phone => "phone",
            SearchField::Email => "email",
            SearchField::Favorite => "favorite",
        }
    }

    fn value_of<'a>(&self, entry: &'a Entry, marker: &'a FavoriteMarker) -> &'a str {
        match self {
            SearchField::Name => &entry.name,
            SearchField::Phone => &entry.phone,
            SearchField::Email => &entry.email,
            SearchField::Favorite => marker.render(entry.favorite),
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "phone" => Ok(SearchField::Phone),
            "email" | "e-mail" => Ok(SearchField::Email),
            "favorite" | "fav" => Ok(SearchField::Favorite),
            other => Err(format!(
                "Unknown search field: {} (expected name, phone, email or favorite)",
                other
            )),
        }
    }
}

/// Builds the favorite-field criterion from a yes/no choice.
pub fn favorite_criterion(favorite: bool, marker: &FavoriteMarker) -> String {
    marker.render(favorite).to_string()
}

/// Returns copies of the entries whose `field` matches `criterion`.
pub fn search(
    criterion: &str,
    field: SearchField,
    entries: &[Entry],
    marker: &FavoriteMarker,
) -> Vec<Entry> {
    matching_positions(criterion, field, entries, marker)
        .into_iter()
        .map(|i| entries[i].clone())
        .collect()
}

/// Positions in `entries` of the matches `search` would return, in order.
pub fn matching_positions(
    criterion: &str,
    field: SearchField,
    entries: &[Entry],
    marker: &FavoriteMarker,
) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            let value = field.value_of(entry, marker);
            match field {
                SearchField::Favorite => value == criterion,
                _ => value.contains(criterion),
            }
        })
        .map(|(i, _)| i)
        .collect()
}
