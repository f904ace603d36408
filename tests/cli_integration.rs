use assert_cmd::Command;
use predicates::prelude::*;
use uuid::Uuid;

fn shelf(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--file").arg(dir.path().join("library.json"));
    cmd
}

/// The `add` message ends with the generated id.
fn add_book(dir: &tempfile::TempDir, title: &str, author: &str, year: &str) -> Uuid {
    let output = shelf(dir)
        .args(["add", title, author, year])
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let last = stdout.split_whitespace().last().unwrap();
    Uuid::parse_str(last).unwrap()
}

#[test]
fn list_on_a_fresh_catalog_reports_empty() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}

#[test]
fn add_then_list_shows_the_book_as_available() {
    let dir = tempfile::tempdir().unwrap();
    add_book(&dir, "1984", "George Orwell", "1949");

    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1984"))
        .stdout(predicate::str::contains("George Orwell"))
        .stdout(predicate::str::contains("1949"))
        .stdout(predicate::str::contains("available"));
}

#[test]
fn add_persists_a_json_array_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    add_book(&dir, "1984", "George Orwell", "1949");

    let content = std::fs::read_to_string(dir.path().join("library.json")).unwrap();
    assert!(content.trim_start().starts_with('['));
    assert!(content.contains("\"title\": \"1984\""));
    assert!(content.contains("\"status\": \"available\""));
}

#[test]
fn status_update_is_visible_in_a_later_list() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_book(&dir, "1984", "George Orwell", "1949");

    shelf(&dir)
        .args(["status", &id.to_string(), "checked-out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now checked-out"));

    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("checked-out"));
}

#[test]
fn remove_empties_the_catalog_and_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_book(&dir, "1984", "George Orwell", "1949");

    shelf(&dir)
        .args(["remove", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"1984\""));

    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));

    let content = std::fs::read_to_string(dir.path().join("library.json")).unwrap();
    assert_eq!(content.trim(), "[]");
}

#[test]
fn remove_of_an_unknown_id_warns_and_leaves_the_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    add_book(&dir, "1984", "George Orwell", "1949");
    let before = std::fs::read(dir.path().join("library.json")).unwrap();

    shelf(&dir)
        .args(["remove", &Uuid::new_v4().to_string()])
        .assert()
        .success()
        .stderr(predicate::str::contains("No book with id"));

    let after = std::fs::read(dir.path().join("library.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn malformed_id_is_reported_without_touching_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["remove", "not-a-uuid"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid book id"));
}

#[test]
fn find_by_year_matches_the_stringified_value() {
    let dir = tempfile::tempdir().unwrap();
    add_book(&dir, "1984", "George Orwell", "1949");

    shelf(&dir)
        .args(["find", "year", "1949"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1984"));

    shelf(&dir)
        .args(["find", "year", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing found."));
}

#[test]
fn find_with_an_unknown_field_reports_and_shows_nothing() {
    let dir = tempfile::tempdir().unwrap();
    add_book(&dir, "1984", "George Orwell", "1949");

    shelf(&dir)
        .args(["find", "isbn", "whatever"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown search field"))
        .stdout(predicate::str::contains("1984").not());
}

#[test]
fn unknown_status_is_rejected_at_the_cli() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_book(&dir, "1984", "George Orwell", "1949");

    shelf(&dir)
        .args(["status", &id.to_string(), "lost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown status"));

    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("available"));
}

#[test]
fn corrupt_catalog_file_degrades_to_empty_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("library.json"), "{ this is not json").unwrap();

    shelf(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("not valid JSON"))
        .stdout(predicate::str::contains("The catalog is empty."));
}
