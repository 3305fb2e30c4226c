// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A cmc command isolated from any user configuration.
fn cmc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cmc").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("CMC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn accepts_well_formed_message_from_stdin() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .arg("check")
        .write_stdin("Add retry to uploader\n\nRetries three times.\nFIX=DMS00123456\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("INF: Commit message contains 4 lines"))
        .stdout(predicate::str::contains("0 error(s).\n0 warning(s)."));
}

#[test]
fn default_command_reads_stdin() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .write_stdin("Fix bug\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WRN: It is recommended not to make commit messages"))
        .stdout(predicate::str::contains("0 error(s).\n1 warning(s)."));
}

#[test]
fn rejects_missing_blank_line() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .arg("check")
        .write_stdin("Title\nBody line\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "ERR: Line #1: Title must be followed by a blank line.",
        ))
        .stderr(predicate::str::contains("Commit message rejected"));
}

#[test]
fn rejects_empty_message() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .arg("check")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERR: Commit message is empty"))
        .stdout(predicate::str::contains("1 error(s)."));
}

#[test]
fn prints_offending_line_after_its_errors() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .args(["--no-color", "check"])
        .write_stdin("Title\n\nfix = abc\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "ERR: Line #3: Invalid tag \"fix = \". Must not contain spaces.\n     fix = abc\n",
        ));
}

#[test]
fn checks_file_with_comments() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(
        &path,
        "Add uploader\n\nBody text\n# Please enter the commit message for your changes. Lines starting\n# with '#' will be ignored, and an empty message aborts the commit.\n",
    )
    .unwrap();

    cmc(&dir)
        .args(["check", "--strip-comments"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("contains 3 lines"));

    cmc(&dir)
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("contains 5 lines"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .args(["check", "--strict"])
        .write_stdin("Fix bug")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let output = cmc(&dir)
        .args(["--format", "json", "check"])
        .write_stdin("Fix crash DMS00123456")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["accepted"], true);
    assert_eq!(json["error_count"], 0);
    assert_eq!(json["warning_count"], 2);
    assert_eq!(json["diagnostics"][0]["severity"], "info");
    assert_eq!(json["diagnostics"][2]["code"], "title-issue-tag");
}

#[test]
fn raw_commit_object() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .args(["check", "--raw"])
        .write_stdin(
            "tree 9bedf67800b2923982bdf60c89c57ce6ee2c7a22\n\
             author A U Thor <author@example.com> 1112912053 -0700\n\
             committer A U Thor <author@example.com> 1112912053 -0700\n\
             \n\
             Add feature\n\
             \n\
             Body\n",
        )
        .assert()
        .success();

    cmc(&dir)
        .args(["check", "--raw"])
        .write_stdin("tree abc\nsomething else\n\nTitle\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected token at line 2"));
}

#[test]
fn rejects_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .arg("check")
        .write_stdin(vec![b'T', b'i', 0xfe, b'\n'])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn config_limits_apply() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cmc.toml"),
        "[rules]\nmax_title_length = 10\n",
    )
    .unwrap();

    cmc(&dir)
        .arg("check")
        .write_stdin("A title over ten\n\nBody")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Maximum length is 10 chars."));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    cmc(&dir).arg("init").assert().success();
    assert!(dir.path().join("cmc.toml").exists());

    cmc(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // The generated config excludes merge commits.
    cmc(&dir)
        .arg("check")
        .write_stdin("Merge branch 'topic'\nno blank line")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found excluded commit type"));
}

#[test]
fn version_command() {
    let dir = TempDir::new().unwrap();
    cmc(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cmc "));
}

#[test]
fn checks_revision_range() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let first = repo
        .commit(Some("HEAD"), &sig, &sig, "Initial commit\n\nSet up.\n", &tree, &[])
        .unwrap();
    let first = repo.find_commit(first).unwrap();
    repo.commit(
        Some("HEAD"),
        &sig,
        &sig,
        "Second commit\nno blank line\n",
        &tree,
        &[&first],
    )
    .unwrap();

    cmc(&dir)
        .args(["check", "--rev", "HEAD~1"])
        .assert()
        .success();

    cmc(&dir)
        .args(["check", "--rev", "HEAD~1..HEAD"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Title must be followed by a blank line."));
}

#[test]
fn rejects_non_utf8_revision() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();

    let mut object = format!(
        "tree {}\n\
         author Test <test@example.com> 1112912053 -0700\n\
         committer Test <test@example.com> 1112912053 -0700\n\n",
        tree_id
    )
    .into_bytes();
    object.extend_from_slice(b"Fix \xff\xfe crash\n\nBody\n");
    let oid = repo
        .odb()
        .unwrap()
        .write(git2::ObjectType::Commit, &object)
        .unwrap();

    cmc(&dir)
        .args(["--no-color", "check", "--rev"])
        .arg(oid.to_string())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Commit message is empty").not())
        .stderr(predicate::str::contains("not valid UTF-8"));
}
