use rolodex::error::RolodexError;
use rolodex::model::{Entry, FavoriteMarker};
use rolodex::store::fs::FileStore;
use rolodex::store::DirectoryStore;
use std::fs;
use tempfile::TempDir;

fn sample() -> Vec<Entry> {
    vec![
        Entry::new("Alice", "5550100", "alice@example.com", true),
        Entry::new("Doe; Jane", "", "jane@example.org", false),
        Entry::new("Bob \"the builder\"", "5550101", "", false),
    ]
}

#[test]
fn saved_directory_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.csv");
    let mut store = FileStore::new();

    store.save(&path, &sample()).unwrap();
    assert!(store.exists(&path));
    assert_eq!(store.load(&path).unwrap(), sample());
}

#[test]
fn file_layout_is_plain_semicolons() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.csv");
    let mut store = FileStore::new().with_marker(FavoriteMarker::new("*"));

    store
        .save(
            &path,
            &[
                Entry::new("Alice", "5550100", "", true),
                Entry::new("Bob", "", "bob@example.org", false),
            ],
        )
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Alice;5550100;;*\nBob;;bob@example.org;\n"
    );
}

#[test]
fn any_marker_reads_as_favorite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.csv");
    fs::write(&path, "Alice;1;;★\nBob;2;;x\nCarol;3;;\n").unwrap();

    let entries = FileStore::new().load(&path).unwrap();
    let favorites: Vec<bool> = entries.iter().map(|e| e.favorite).collect();
    assert_eq!(favorites, vec![true, true, false]);
}

#[test]
fn save_creates_missing_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("contacts.csv");

    FileStore::new().save(&path, &sample()).unwrap();
    assert!(path.is_file());
}

#[test]
fn short_row_fails_the_whole_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.csv");
    fs::write(&path, "Alice;1;;\nBob;2;\n").unwrap();

    match FileStore::new().load(&path) {
        Err(RolodexError::MalformedRow { line, fields, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(fields, 3);
        }
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn missing_file_is_a_file_access_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.csv");

    let store = FileStore::new();
    assert!(!store.exists(&path));
    assert!(matches!(
        store.load(&path),
        Err(RolodexError::FileAccess { .. })
    ));
}

#[test]
fn directory_path_is_not_a_file() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new();

    assert!(!store.exists(temp.path()));
    assert!(matches!(
        store.save(temp.path(), &sample()),
        Err(RolodexError::FileAccess { .. })
    ));
}
