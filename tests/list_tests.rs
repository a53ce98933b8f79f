//! Integration tests for list command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{config_path, jot_cmd, journal_path};

const THREE_DAYS: &str = "2015-06-01 : one\n2015-06-01 : one again\n2015-06-02 : two\n2015-06-03 : three";

fn setup(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(journal_path(temp.path()), content).unwrap();
    temp
}

fn list_output(temp: &TempDir, args: &[&str]) -> String {
    let output = jot_cmd(temp.path()).arg("list").args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_list_no_journal() {
    let temp = TempDir::new().unwrap();

    jot_cmd(temp.path())
        .args(["list", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    // Listing never creates the journal
    assert!(!journal_path(temp.path()).exists());
}

#[test]
fn test_list_all_groups_by_date() {
    let temp = setup(THREE_DAYS);

    assert_eq!(
        list_output(&temp, &["all"]),
        "# 2015-06-01\none\none again\n# 2015-06-02\ntwo\n# 2015-06-03\nthree\n"
    );
}

#[test]
fn test_list_for_single_date() {
    let temp = setup(THREE_DAYS);

    assert_eq!(list_output(&temp, &["for", "2015-06-02"]), "# 2015-06-02\ntwo\n");
    assert_eq!(list_output(&temp, &["2015-06-01"]), "# 2015-06-01\none\none again\n");
}

#[test]
fn test_list_range_exclusive() {
    let temp = setup(THREE_DAYS);

    jot_cmd(temp.path())
        .args(["list", "from", "2015-06-01", "to", "2015-06-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2015-06-01"))
        .stdout(predicate::str::contains("# 2015-06-02"))
        .stdout(predicate::str::contains("three").not());
}

#[test]
fn test_list_range_inclusive() {
    for keyword in ["inc", "inclusive"] {
        let temp = setup(THREE_DAYS);

        jot_cmd(temp.path())
            .args(["list", "from", "2015-06-02", "to", "2015-06-03", keyword])
            .assert()
            .success()
            .stdout(predicate::str::contains("two"))
            .stdout(predicate::str::contains("three"))
            .stdout(predicate::str::contains("one").not());
    }
}

#[test]
fn test_list_from_without_to() {
    let temp = setup(THREE_DAYS);

    assert_eq!(
        list_output(&temp, &["from", "2015-06-02"]),
        "# 2015-06-02\ntwo\n# 2015-06-03\nthree\n"
    );
}

#[test]
fn test_list_expand() {
    let temp = setup("2015-06-01 : one\n2015-06-01 : two");

    let output = jot_cmd(temp.path())
        .args(["-x", "list", "all"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "# 2015-06-01\none\n\ntwo\n\n");
}

#[test]
fn test_list_wraps_to_configured_width() {
    let temp = setup("2015-06-01 : alpha beta gamma");
    fs::write(config_path(temp.path()), "wrap_width = 10\n").unwrap();

    assert_eq!(
        list_output(&temp, &["all"]),
        "# 2015-06-01\nalpha beta\ngamma\n"
    );
}

#[test]
fn test_list_expand_from_config() {
    let temp = setup("2015-06-01 : one");
    fs::write(config_path(temp.path()), "expand = true\n").unwrap();

    assert_eq!(list_output(&temp, &["all"]), "# 2015-06-01\none\n\n");
}

#[test]
fn test_list_does_not_rewrite_journal() {
    let content = "2015-06-02 : out of order\n\n2015-06-01 : hand edited\n";
    let temp = setup(content);

    // Stored order is trusted, not re-sorted
    assert_eq!(
        list_output(&temp, &["all"]),
        "# 2015-06-02\nout of order\n# 2015-06-01\nhand edited\n"
    );
    assert_eq!(fs::read_to_string(journal_path(temp.path())).unwrap(), content);
}

#[test]
fn test_list_bad_grammar() {
    let temp = setup(THREE_DAYS);

    jot_cmd(temp.path())
        .args(["list", "from", "2015-06-01", "until", "2015-06-03"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unexpected arguments"));
}

#[test]
fn test_list_malformed_journal() {
    let temp = setup("2015-06-01 : fine\nbroken\n");

    jot_cmd(temp.path())
        .args(["list", "all"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("line 2"));
}
