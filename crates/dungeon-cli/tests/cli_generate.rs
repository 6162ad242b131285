use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use dungeon::Dungeon;
use dungeon_test_utils::assert_well_formed;

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("dungeon-cli-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generate_json_to_stdout() {
    let output = cargo_bin_cmd!("dungeon")
        .args(["generate", "--width", "30", "--height", "20", "--floors", "2", "--seed", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dungeon = Dungeon::from_json(std::str::from_utf8(&output.stdout).unwrap()).unwrap();
    assert_eq!(dungeon.floors.len(), 2);
    assert_eq!(dungeon.floors[0].width.as_unbounded(), 30);
    assert_eq!(dungeon.floors[0].height.as_unbounded(), 20);
    assert_well_formed(&dungeon);
}

#[test]
fn same_seed_same_output() {
    let run = || {
        cargo_bin_cmd!("dungeon")
            .args(["generate", "--floors", "3", "--seed", "99", "--workers", "2"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn ascii_format_has_floor_headers() {
    cargo_bin_cmd!("dungeon")
        .args(["generate", "--width", "12", "--height", "12", "--floors", "2"])
        .args(["--seed", "1", "--format", "ascii"])
        .assert()
        .success()
        .stdout(predicate::str::contains("floor 0\n#"))
        .stdout(predicate::str::contains("floor 1\n"))
        .stdout(predicate::str::contains("<"))
        .stdout(predicate::str::contains(">"));
}

#[test]
fn gif_format_writes_file() {
    let dir = temp_dir("gif");
    let path = dir.join("dungeon.gif");
    cargo_bin_cmd!("dungeon")
        .args(["generate", "--floors", "2", "--seed", "3", "--format", "gif", "--output"])
        .arg(&path)
        .assert()
        .success();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
}

#[test]
fn record_dir_gets_one_gif_per_floor() {
    let dir = temp_dir("record");
    cargo_bin_cmd!("dungeon")
        .args(["generate", "--width", "15", "--height", "15", "--floors", "2", "--seed", "8"])
        .arg("--record-dir")
        .arg(&dir)
        .assert()
        .success();
    assert!(dir.join("floor_0.gif").exists());
    assert!(dir.join("floor_1.gif").exists());
}

#[test]
fn config_file_is_applied() {
    let dir = temp_dir("config");
    let config = dir.join("config.json");
    std::fs::write(
        &config,
        r#"{ "seed": 12, "treasure_chests": { "min": 0, "max": 0 } }"#,
    )
    .unwrap();
    let output = cargo_bin_cmd!("dungeon")
        .args(["generate", "--floors", "2", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let dungeon = Dungeon::from_json(std::str::from_utf8(&output.stdout).unwrap()).unwrap();
    assert!(dungeon
        .floors
        .iter()
        .all(|f| !f.data.contains(&dungeon::DungeonTile::TreasureChest)));
}

#[test]
fn invalid_config_fails() {
    let dir = temp_dir("bad-config");
    let config = dir.join("config.json");
    std::fs::write(&config, r#"{ "wall_chance_percent": 150 }"#).unwrap();
    cargo_bin_cmd!("dungeon")
        .args(["generate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("wall_chance_percent 150 is above 100"));
}

#[test]
fn out_of_range_width_is_a_usage_error() {
    cargo_bin_cmd!("dungeon")
        .args(["generate", "--width", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width"));
}
