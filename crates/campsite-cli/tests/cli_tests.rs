use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn campsite_info(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("campsite-info").unwrap();
    cmd.env_remove("CAMPSITE_INFO_CONFIG")
        .env_remove("CAMPSITE_INFO_DATA")
        .arg("--no-color")
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

fn initialized() -> TempDir {
    let temp = TempDir::new().unwrap();
    campsite_info(temp.path())
        .arg("init")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success();
    temp
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("campsite-info")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("comment"));
}

#[test]
fn init_writes_data_and_config() {
    let temp = initialized();
    assert!(temp.path().join("campsites.json").exists());
    let config = fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(config.contains("campsites.json"));
    assert!(config.contains("author_max_length = 15"));
}

#[test]
fn list_shows_comment_counts() {
    let temp = initialized();
    campsite_info(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("React Lake Campground"))
        .stdout(predicate::str::contains("(2 comments)"))
        .stdout(predicate::str::contains("Chrome River"));
}

#[test]
fn show_prints_detail() {
    let temp = initialized();
    campsite_info(temp.path())
        .args(["show", "0", "--no-tui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory / React Lake Campground"))
        .stdout(predicate::str::contains("-- Tinus Lorvaldes Oct 25, 2018"))
        .stdout(predicate::str::contains("Submit Comment"));
}

#[test]
fn show_unknown_campsite_fails() {
    let temp = initialized();
    campsite_info(temp.path())
        .args(["show", "42", "--no-tui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No campsite with ID 42"));
}

#[test]
fn show_without_data_points_at_init() {
    let temp = TempDir::new().unwrap();
    campsite_info(temp.path())
        .arg("--data")
        .arg(temp.path().join("missing.json"))
        .args(["show", "0", "--no-tui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("campsite-info init"));
}

#[test]
fn comment_is_stored_and_shown() {
    let temp = initialized();
    campsite_info(temp.path())
        .args(["comment", "1", "--rating", "4", "--author", "Alice", "--text", "Cold water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment #2 added"));

    campsite_info(temp.path())
        .args(["show", "1", "--no-tui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cold water"))
        .stdout(predicate::str::contains("-- Alice "));
}

#[test]
fn invalid_comment_reports_every_field() {
    let temp = initialized();
    campsite_info(temp.path())
        .args(["comment", "0", "--author", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a rating"))
        .stderr(predicate::str::contains("Must be at least 2 characters"));

    campsite_info(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 comments)"));
}

#[test]
fn long_author_is_rejected() {
    let temp = initialized();
    campsite_info(temp.path())
        .args(["comment", "0", "--rating", "3", "--author", "Sixteen chars!!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be 15 characters or less"));
}

#[test]
fn config_bounds_apply_to_comments() {
    let temp = initialized();
    let config_path = temp.path().join("config.toml");
    let config = fs::read_to_string(&config_path)
        .unwrap()
        .replace("author_min_length = 2", "author_min_length = 6");
    fs::write(&config_path, config).unwrap();

    campsite_info(temp.path())
        .args(["comment", "0", "--rating", "5", "--author", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be at least 6 characters"));
}

#[test]
fn config_path_and_validate() {
    let temp = initialized();
    campsite_info(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    campsite_info(temp.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    fs::write(
        temp.path().join("config.toml"),
        "[form]\nauthor_min_length = 9\nauthor_max_length = 3\n",
    )
    .unwrap();
    campsite_info(temp.path())
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author_min_length"));
}
