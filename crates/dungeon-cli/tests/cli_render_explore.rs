use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use dungeon_test_utils::fixtures;

fn write_fixture(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("dungeon-cli-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("dungeon.json");
    std::fs::write(&path, fixtures::two_floor_dungeon().to_json().unwrap()).unwrap();
    path
}

#[test]
fn render_prints_every_floor() {
    let path = write_fixture("render");
    let expected = format!("floor 0\n{}\n\n", fixtures::OPEN_ROOM.join("\n"));
    cargo_bin_cmd!("dungeon")
        .arg("render")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(expected))
        .stdout(predicate::str::contains("floor 1\n"));
}

#[test]
fn render_single_floor() {
    let path = write_fixture("render-one");
    cargo_bin_cmd!("dungeon")
        .arg("render")
        .arg(&path)
        .args(["--floor", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("floor 1\n"))
        .stdout(predicate::str::contains("floor 0").not());
}

#[test]
fn render_missing_floor_fails() {
    let path = write_fixture("render-missing");
    cargo_bin_cmd!("dungeon")
        .arg("render")
        .arg(&path)
        .args(["--floor", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no floor 7"));
}

#[test]
fn render_missing_file_fails() {
    cargo_bin_cmd!("dungeon")
        .args(["render", "/nonexistent/dungeon.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("reading /nonexistent/dungeon.json"));
}

#[test]
fn explore_walks_down_the_stairs() {
    let path = write_fixture("explore");
    // Entrance (1, 1) to exit (8, 8): seven down, seven right.
    cargo_bin_cmd!("dungeon")
        .arg("explore")
        .arg(&path)
        .args(["--moves", "UDDDDDDDRRRRRRR"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Up: blocked\nDown: moved\n"))
        .stdout(predicate::str::contains("Right: floor 0 -> 1"))
        .stdout(predicate::str::ends_with("floor 1 at (1, 1)\n"));
}

#[test]
fn explore_rejects_unknown_moves() {
    let path = write_fixture("explore-bad");
    cargo_bin_cmd!("dungeon")
        .arg("explore")
        .arg(&path)
        .args(["--moves", "UX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown move 'X'"));
}
