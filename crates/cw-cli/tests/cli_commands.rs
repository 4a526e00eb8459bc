//! CLI command integration tests exercising the built binary end-to-end.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn caveward() -> Command {
    Command::cargo_bin("caveward").unwrap()
}

fn data_args(dir: &TempDir) -> [&str; 2] {
    ["-d", dir.path().to_str().unwrap()]
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_look_shows_the_starting_room() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cave Entrance")
                .and(predicate::str::contains("pickaxe"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_gates_the_tutorial_exit() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("go east\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("blocked by a pile of rubble"));
}

#[test]
fn play_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("get pickaxe\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You take the pickaxe."));

    // A second run resumes with the pickaxe held and the room emptied of it.
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("inventory\nget pickaxe\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are carrying: pickaxe.")
                .and(predicate::str::contains("You don't see 'pickaxe' here.")),
        );
}

#[test]
fn play_ends_cleanly_on_eof() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

// ---------------------------------------------------------------------------
// state
// ---------------------------------------------------------------------------

#[test]
fn state_prints_fresh_progress_as_json() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("state")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"location_name\": \"Cave Entrance\"")
                .and(predicate::str::contains("\"total_actions\": 11")),
        );
}

#[test]
fn state_reflects_saved_progress() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("get pickaxe\nquit\n")
        .assert()
        .success();

    caveward()
        .args(data_args(&dir))
        .arg("state")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"pickaxe\"")
                .and(predicate::str::contains("\"get\""))
                .and(predicate::str::contains("\"xp\": 25")),
        );
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_deletes_the_save() {
    let dir = TempDir::new().unwrap();
    caveward()
        .args(data_args(&dir))
        .arg("play")
        .write_stdin("get pickaxe\nquit\n")
        .assert()
        .success();

    caveward()
        .args(data_args(&dir))
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    caveward()
        .args(data_args(&dir))
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("No save found"));
}
