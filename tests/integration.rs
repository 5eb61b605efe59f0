use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Each run gets its own working directory, since the output path is fixed.
fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("masto_to_bsky").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn read_output(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("output.csv")).unwrap()
}

#[test]
fn test_sample_follows() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg(fixture("follows.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Conversion complete. The updated addresses are saved in 'output.csv'.",
        ));

    let output = read_output(&dir);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Account address",
            "@alice.mastodon.social.ap.brid.gy",
            "@dave.hachyderm.io.ap.brid.gy",
            "@erin.fosstodon.org.ap.brid.gy",
        ]
    );
}

#[test]
fn test_missing_argument() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: masto_to_bsky <filename>.csv"));

    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_extra_arguments_ignored() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg(fixture("follows.csv"))
        .arg("ignored.csv")
        .assert()
        .success();

    assert!(read_output(&dir).contains("@alice.mastodon.social.ap.brid.gy"));
}

#[test]
fn test_all_excluded_writes_header_only() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg(fixture("all_excluded.csv"))
        .assert()
        .success();

    assert_eq!(read_output(&dir), "Account address\r\n");
}

#[test]
fn test_malformed_address_aborts() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg(fixture("malformed.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("weird"))
        .stdout(predicate::str::contains("Conversion complete").not());

    let output = read_output(&dir);
    assert!(output.contains("@alice.mastodon.social.ap.brid.gy"));
    assert!(!output.contains("dave"));
}

#[test]
fn test_missing_column_fails() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg(fixture("missing_column.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account address"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .arg(dir.path().join("does_not_exist.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_existing_output_truncated() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("output.csv"), "stale,data\nmore,stale\n").unwrap();

    cmd_in(&dir)
        .arg(fixture("all_excluded.csv"))
        .assert()
        .success();

    assert_eq!(read_output(&dir), "Account address\r\n");
}

#[test]
fn test_link_page() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("link_page")
        .unwrap()
        .current_dir(dir.path())
        .arg(fixture("profiles.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "HTML page created successfully. Open 'output.html' to view the links.",
        ));

    let page = std::fs::read_to_string(dir.path().join("output.html")).unwrap();

    assert!(page.contains(
        r#"<a href="https://bsky.app/profile/alice.mastodon.social.ap.brid.gy" target="_blank" rel="noopener noreferrer">"#
    ));
    let alice = page.find("alice.mastodon.social").unwrap();
    let dave = page.find("dave.hachyderm.io").unwrap();
    assert!(alice < dave);
}

#[test]
fn test_link_page_missing_argument() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("link_page")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: link_page <filename>.csv"));

    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn test_link_page_missing_column() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("link_page")
        .unwrap()
        .current_dir(dir.path())
        .arg(fixture("follows.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile URL"));

    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn test_bsky_handles() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("bsky_handles")
        .unwrap()
        .current_dir(dir.path())
        .arg(fixture("follows"))
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV file created successfully."));

    let output = std::fs::read_to_string(dir.path().join("accountHandles.csv")).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Handle",
            "did:plc:z72i7hdynmk6r22z27h6tvur",
            "did:plc:ewvi7nxzyoun6zhxrhs64oiz",
        ]
    );
}

#[test]
fn test_bsky_handles_missing_argument() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("bsky_handles")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: bsky_handles <directory>"));

    assert!(!dir.path().join("accountHandles.csv").exists());
}

#[test]
fn test_bsky_handles_invalid_record() {
    let dir = TempDir::new().unwrap();
    let follows = dir.path().join("follows");
    std::fs::create_dir(&follows).unwrap();
    std::fs::write(follows.join("broken.json"), "{\"subject\":").unwrap();

    Command::cargo_bin("bsky_handles")
        .unwrap()
        .current_dir(dir.path())
        .arg(&follows)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));

    assert!(!dir.path().join("accountHandles.csv").exists());
}
