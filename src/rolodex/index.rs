//! # Display Indexes
//!
//! Listings number entries from 1 in the order they are shown. Those numbers
//! only make sense for the list the user is looking at: while a search result
//! is displayed, `2` means the second *result*, not the second entry of the
//! directory.
//!
//! Commands that act on one entry take an [`EntrySelector`], which is either
//! an exact entry name or a display index. Names win: if an entry is literally
//! called `3`, selecting `3` picks that entry rather than the third row.

use crate::model::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

/// Numbers a list of entries from 1, preserving order.
pub fn index_entries(entries: &[Entry]) -> Vec<DisplayEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry: entry.clone(),
        })
        .collect()
}

/// User input naming one entry of the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySelector(String);

impl EntrySelector {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 1-based display index this selector spells, if any.
    pub fn position(&self) -> Option<usize> {
        self.0.trim().parse::<usize>().ok().filter(|n| *n > 0)
    }

    /// Position within `visible` of the selected entry.
    ///
    /// A name matching more than one row selects nothing.
    pub fn resolve(&self, visible: &[Entry]) -> Option<usize> {
        let mut named = visible
            .iter()
            .enumerate()
            .filter(|(_, e)| e.name == self.0)
            .map(|(i, _)| i);
        match (named.next(), named.next()) {
            (Some(i), None) => return Some(i),
            (Some(_), Some(_)) => return None,
            _ => {}
        }
        self.position()
            .filter(|n| *n <= visible.len())
            .map(|n| n - 1)
    }

    /// How many rows of `visible` carry exactly this name.
    pub fn name_count(&self, visible: &[Entry]) -> usize {
        visible.iter().filter(|e| e.name == self.0).count()
    }
}

impl std::fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "\"{}\"", self.0),
        }
    }
}

impl From<&str> for EntrySelector {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntrySelector {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible() -> Vec<Entry> {
        vec![
            Entry::new("Alice", "1", "", false),
            Entry::new("Bob", "2", "", false),
            Entry::new("3", "3", "", false),
        ]
    }

    #[test]
    fn indexes_start_at_one() {
        let listed = index_entries(&visible());
        let indexes: Vec<usize> = listed.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert_eq!(listed[1].entry.name, "Bob");
    }

    #[test]
    fn resolves_by_name() {
        assert_eq!(EntrySelector::new("Bob").resolve(&visible()), Some(1));
    }

    #[test]
    fn resolves_by_position() {
        assert_eq!(EntrySelector::new("1").resolve(&visible()), Some(0));
        assert_eq!(EntrySelector::new("2").resolve(&visible()), Some(1));
    }

    #[test]
    fn exact_name_beats_position() {
        assert_eq!(EntrySelector::new("3").resolve(&visible()), Some(2));
        let without_named = &visible()[..2];
        assert_eq!(EntrySelector::new("3").resolve(without_named), None);
    }

    #[test]
    fn out_of_range_and_zero_do_not_resolve() {
        assert_eq!(EntrySelector::new("0").resolve(&visible()), None);
        assert_eq!(EntrySelector::new("9").resolve(&visible()), None);
        assert_eq!(EntrySelector::new("Carol").resolve(&visible()), None);
    }

    #[test]
    fn shared_name_selects_nothing() {
        let visible = vec![
            Entry::new("Dup", "111", "", false),
            Entry::new("Dup", "222", "", false),
        ];
        assert_eq!(EntrySelector::new("Dup").name_count(&visible), 2);
        assert_eq!(EntrySelector::new("Dup").resolve(&visible), None);
        assert_eq!(EntrySelector::new("2").resolve(&visible), Some(1));
    }

    #[test]
    fn display_quotes_names() {
        assert_eq!(EntrySelector::new("Bob").to_string(), "\"Bob\"");
        assert_eq!(EntrySelector::new("2").to_string(), "2");
    }
}
