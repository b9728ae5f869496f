use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_FAVORITE_MARKER: &str = "☆";

/// One contact record.
///
/// The name doubles as the key: it is unique within a directory and is what
/// edits and removals are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub favorite: bool,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        favorite: bool,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            favorite,
        }
    }
}

impl From<EntryDraft> for Entry {
    fn from(draft: EntryDraft) -> Self {
        let draft = draft.trimmed();
        Self {
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            favorite: draft.favorite,
        }
    }
}

/// Raw form values for an entry, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub favorite: bool,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        favorite: bool,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            favorite,
        }
    }

    /// Pre-populates a draft from an existing entry (the edit form).
    pub fn from_entry(entry: &Entry) -> Self {
        Self::new(
            entry.name.clone(),
            entry.phone.clone(),
            entry.email.clone(),
            entry.favorite,
        )
    }

    /// Surrounding whitespace never reaches validation or the file.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            favorite: self.favorite,
        }
    }
}

/// The glyph written in the favorite column for favorite entries.
/// Non-favorites always get an empty column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteMarker(String);

impl FavoriteMarker {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, favorite: bool) -> &str {
        if favorite {
            &self.0
        } else {
            ""
        }
    }
}

impl Default for FavoriteMarker {
    fn default() -> Self {
        Self(DEFAULT_FAVORITE_MARKER.to_string())
    }
}

impl fmt::Display for FavoriteMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
