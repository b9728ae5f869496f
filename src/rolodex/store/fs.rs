use super::{DirectoryStore, LoadedDirectory};
use crate::error::{Result, RolodexError};
use crate::model::{Entry, FavoriteMarker};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const DELIMITER: u8 = b';';
pub const FIELD_COUNT: usize = 4;

/// File-backed directory storage.
pub struct FileStore {
    marker: FavoriteMarker,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            marker: FavoriteMarker::default(),
        }
    }

    pub fn with_marker(mut self, marker: FavoriteMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn marker(&self) -> &FavoriteMarker {
        &self.marker
    }
}

impl DirectoryStore for FileStore {
    fn load(&self, path: &Path) -> Result<Vec<Entry>> {
        Ok(self.load_directory(path)?.entries)
    }

    fn load_directory(&self, path: &Path) -> Result<LoadedDirectory> {
        let file = File::open(path).map_err(|source| RolodexError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        read_directory(file, path)
    }

    fn save(&mut self, path: &Path, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| RolodexError::FileAccess {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = File::create(path).map_err(|source| RolodexError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        write_entries(file, entries, &self.marker)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Parses a directory from `reader`. `origin` only labels errors.
///
/// Every row must have exactly [`FIELD_COUNT`] fields; the first row that
/// does not fails the whole read. Blank lines are skipped.
pub fn read_entries<R: Read>(reader: R, origin: &Path) -> Result<Vec<Entry>> {
    Ok(read_directory(reader, origin)?.entries)
}

/// [`read_entries`], keeping the favorite glyphs seen along the way.
pub fn read_directory<R: Read>(reader: R, origin: &Path) -> Result<LoadedDirectory> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = LoadedDirectory::default();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() != FIELD_COUNT {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(RolodexError::MalformedRow {
                path: PathBuf::from(origin),
                line,
                fields: record.len(),
            });
        }

        let glyph = &record[3];
        if !glyph.is_empty() && !loaded.markers.iter().any(|m| m == glyph) {
            loaded.markers.push(glyph.to_string());
        }

        loaded.entries.push(Entry {
            name: record[0].to_string(),
            phone: record[1].to_string(),
            email: record[2].to_string(),
            favorite: !glyph.is_empty(),
        });
    }

    Ok(loaded)
}

/// Writes one `;`-separated, `\n`-terminated line per entry.
pub fn write_entries<W: Write>(writer: W, entries: &[Entry], marker: &FavoriteMarker) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for entry in entries {
        csv_writer.write_record([
            entry.name.as_str(),
            entry.phone.as_str(),
            entry.email.as_str(),
            marker.render(entry.favorite),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("contacts.csv")
    }

    fn to_text(entries: &[Entry], marker: &FavoriteMarker) -> String {
        let mut buffer = Vec::new();
        write_entries(&mut buffer, entries, marker).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn writes_plain_rows() {
        let entries = vec![
            Entry::new("Alice", "5550100", "alice@example.com", true),
            Entry::new("Bob", "5550199", "", false),
        ];
        let text = to_text(&entries, &FavoriteMarker::default());
        assert_eq!(text, "Alice;5550100;alice@example.com;☆\nBob;5550199;;\n");
    }

    #[test]
    fn reads_plain_rows_in_order() {
        let text = "Alice;5550100;alice@example.com;☆\nBob;5550199;;\n";
        let entries = read_entries(text.as_bytes(), origin()).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new("Alice", "5550100", "alice@example.com", true),
                Entry::new("Bob", "5550199", "", false),
            ]
        );
    }

    #[test]
    fn any_marker_glyph_reads_as_favorite() {
        let entries = read_entries("Alice;1;;★\n".as_bytes(), origin()).unwrap();
        assert!(entries[0].favorite);
    }

    #[test]
    fn collects_each_favorite_glyph_once() {
        let text = "Alice;1;;★\nBob;2;;\nCara;3;;☆\nDan;4;;★\n";
        let loaded = read_directory(text.as_bytes(), origin()).unwrap();
        assert_eq!(loaded.entries.len(), 4);
        assert_eq!(loaded.markers, vec!["★", "☆"]);
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let text = "Alice;1;;☆\r\n\r\nBob;2;;\r\n";
        let entries = read_entries(text.as_bytes(), origin()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "Bob");
    }

    #[test]
    fn rejects_short_row_with_line_number() {
        let text = "Alice;1;;☆\nBob;2\n";
        match read_entries(text.as_bytes(), origin()) {
            Err(RolodexError::MalformedRow { line, fields, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(fields, 2);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn rejects_long_row() {
        let text = "Alice;1;a@b.co;☆;extra\n";
        assert!(matches!(
            read_entries(text.as_bytes(), origin()),
            Err(RolodexError::MalformedRow { fields: 5, .. })
        ));
    }

    #[test]
    fn quotes_fields_with_delimiter_and_reads_them_back() {
        let entries = vec![Entry::new("Doe; Jane", "", "jane@example.org", false)];
        let marker = FavoriteMarker::default();
        let text = to_text(&entries, &marker);
        assert_eq!(text, "\"Doe; Jane\";;jane@example.org;\n");

        let back = read_entries(text.as_bytes(), origin()).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn empty_directory_is_empty_file() {
        assert_eq!(to_text(&[], &FavoriteMarker::default()), "");
        let entries = read_entries("".as_bytes(), origin()).unwrap();
        assert!(entries.is_empty());
    }
}
