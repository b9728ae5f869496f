use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp dir holding both the config dir and the directory file.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn file(&self) -> PathBuf {
        self.dir.path().join("contacts.csv")
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// `rolodex` with an isolated config dir and no file given.
    fn bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolodex").unwrap();
        cmd.env("ROLODEX_CONFIG_DIR", self.config_dir())
            .env_remove("ROLODEX_FILE")
            .env("NO_COLOR", "1");
        cmd
    }

    /// `rolodex --file <sandbox file>`.
    fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--file").arg(self.file());
        cmd
    }

    fn write(&self, contents: &str) {
        fs::write(self.file(), contents).unwrap();
    }

    fn read(&self) -> String {
        fs::read_to_string(self.file()).unwrap()
    }

    fn add(&self, args: &[&str]) {
        self.cmd().arg("add").args(args).assert().success();
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn new_creates_an_empty_file_and_refuses_to_clobber() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory"));
    assert_eq!(sb.read(), "");

    sb.write("Alice;1;;\n");
    sb.cmd()
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(sb.read(), "Alice;1;;\n");

    sb.cmd().args(["new", "--force"]).assert().success();
    assert_eq!(sb.read(), "");
}

#[test]
fn new_accepts_an_explicit_path() {
    let sb = Sandbox::new();
    let other = sb.dir.path().join("nested").join("other.csv");
    sb.bare().arg("new").arg(&other).assert().success();
    assert_eq!(read(&other), "");
}

#[test]
fn add_writes_the_file() {
    let sb = Sandbox::new();
    sb.write("");
    sb.cmd()
        .args(["add", "--name", "Alice", "--phone", "5550100", "--favorite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added: Alice"));
    sb.add(&["--name", "Bob", "--email", "bob@example.org"]);

    assert_eq!(sb.read(), "Alice;5550100;;☆\nBob;;bob@example.org;\n");
}

#[test]
fn invalid_add_fails_and_leaves_the_file_alone() {
    let sb = Sandbox::new();
    sb.write("Alice;5550100;;\n");

    sb.cmd()
        .args(["add", "--name", "Bob", "--phone", "555-0101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone"));
    sb.cmd()
        .args(["add", "--name", "Alice", "--phone", "5550101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name already exists"));
    sb.cmd()
        .args(["add", "--name", "Carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No phone or email provided"));
    sb.cmd()
        .args(["add", "--name", "Dan", "--email", "dan@nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email"));

    assert_eq!(sb.read(), "Alice;5550100;;\n");
}

#[test]
fn list_shows_entries_with_indexes() {
    let sb = Sandbox::new();
    sb.write("Alice;5550100;alice@example.com;☆\nBob;;bob@example.org;\n");

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1  ☆  Alice"))
        .stdout(predicate::str::contains("bob@example.org"));

    // no subcommand lists too
    sb.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn empty_directory_lists_nothing() {
    let sb = Sandbox::new();
    sb.write("");
    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn edit_keeps_omitted_fields() {
    let sb = Sandbox::new();
    sb.write("Alice;5550100;alice@example.com;☆\nBob;5550101;;\n");

    sb.cmd()
        .args(["edit", "1", "--phone", "5550199", "--favorite", "no"])
        .assert()
        .success();
    sb.cmd()
        .args(["edit", "Bob", "--name", "Robert"])
        .assert()
        .success();

    assert_eq!(
        sb.read(),
        "Alice;5550199;alice@example.com;\nRobert;5550101;;\n"
    );
}

#[test]
fn edit_rejects_bad_input() {
    let sb = Sandbox::new();
    sb.write("Alice;5550100;;\nBob;5550101;;\n");

    sb.cmd()
        .args(["edit", "2", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name already exists"));
    sb.cmd()
        .args(["edit", "Zed", "--phone", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
    sb.cmd()
        .args(["edit", "1", "--favorite", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yes or no"));

    assert_eq!(sb.read(), "Alice;5550100;;\nBob;5550101;;\n");
}

#[test]
fn remove_by_name_or_index() {
    let sb = Sandbox::new();
    sb.write("Alice;1;;\nBob;2;;\nCarol;3;;\n");

    sb.cmd()
        .args(["remove", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry removed: Bob"));
    sb.cmd().args(["rm", "2"]).assert().success();

    assert_eq!(sb.read(), "Alice;1;;\n");
    sb.cmd().args(["remove", "5"]).assert().failure();
}

#[test]
fn search_by_field() {
    let sb = Sandbox::new();
    sb.write("Alice;5550100;alice@example.com;☆\nBob;5550101;bob@example.org;\n");

    sb.cmd()
        .args(["search", "email", "example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Alice").not());

    sb.cmd()
        .args(["search", "favorite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Bob").not());

    sb.cmd()
        .args(["search", "favorite", "no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Alice").not());

    sb.cmd()
        .args(["search", "name", "Zed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));

    sb.cmd().args(["search", "address", "x"]).assert().failure();
}

#[test]
fn check_reports_broken_entries() {
    let sb = Sandbox::new();
    sb.write("Alice;1;;\nAlice;2;;\nBob;12-34;;\n");

    sb.cmd()
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Name already exists"))
        .stdout(predicate::str::contains("3. Bob: Invalid phone"));

    sb.write("Alice;1;;\n");
    sb.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 entries are valid"));
}

#[test]
fn malformed_file_is_reported() {
    let sb = Sandbox::new();
    sb.write("Alice;1;;\nBob;2\n");
    sb.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 4 fields, found 2"));
}

#[test]
fn missing_file_is_an_error() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access"));
}

#[test]
fn a_file_is_required() {
    let sb = Sandbox::new();
    sb.bare()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No directory file given"));
}

#[test]
fn file_can_come_from_env_or_config() {
    let sb = Sandbox::new();
    sb.write("Alice;1;;\n");

    sb.bare()
        .env("ROLODEX_FILE", sb.file())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    sb.bare()
        .arg("config")
        .arg("directory")
        .arg(sb.file())
        .assert()
        .success()
        .stdout(predicate::str::contains("directory set to"));
    sb.bare()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn configured_marker_is_written() {
    let sb = Sandbox::new();
    sb.write("");

    sb.bare()
        .args(["config", "favorite-marker", "★"])
        .assert()
        .success();
    sb.bare()
        .args(["config", "favorite-marker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("★"));
    sb.add(&["--name", "Alice", "--phone", "1", "--favorite"]);

    assert_eq!(sb.read(), "Alice;1;;★\n");
}

#[test]
fn config_rejects_bad_values() {
    let sb = Sandbox::new();
    sb.bare()
        .args(["config", "favorite-marker", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("single character"));
    sb.bare()
        .args(["config", "colour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn shell_reads_piped_commands() {
    let sb = Sandbox::new();
    sb.write("Alice;1;;\n");

    sb.cmd()
        .arg("shell")
        .write_stdin("add --name \"Jane Doe\" --phone 2\nsave\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added: Jane Doe"))
        .stdout(predicate::str::contains("Jane Doe"));

    assert_eq!(sb.read(), "Alice;1;;\nJane Doe;2;;\n");
}

#[test]
fn shell_does_not_save_without_being_asked() {
    let sb = Sandbox::new();
    sb.write("Alice;1;;\n");

    sb.cmd()
        .arg("shell")
        .write_stdin("remove Alice\nquit\ny\n")
        .assert()
        .success();

    assert_eq!(sb.read(), "Alice;1;;\n");
}

#[test]
fn about_and_help() {
    let sb = Sandbox::new();
    sb.bare()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    sb.bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry Commands:"));
    sb.bare()
        .args(["help", "edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--favorite"));
}
