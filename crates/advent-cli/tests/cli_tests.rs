//! Integration tests for the `advent-cli` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MAZE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/examples.json")
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("advent-cli").expect("binary exists");
    cmd.env("NO_COLOR", "1").env_remove("ADVENT_DATA_DIR");
    cmd
}

/// Data directory laid out as `<dir>/aoc24/p16.txt`.
fn data_dir_with_maze() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let year = dir.path().join("aoc24");
    fs::create_dir_all(&year).expect("create year dir");
    fs::write(year.join("p16.txt"), MAZE).expect("write maze");
    dir
}

#[test]
fn solve_reads_the_data_directory() {
    let dir = data_dir_with_maze();
    cli()
        .args(["--data-dir"])
        .arg(dir.path())
        .args(["solve", "aoc24:p16a"])
        .assert()
        .success()
        .stdout("7036\n");
}

#[test]
fn solve_honours_the_data_dir_environment_variable() {
    let dir = data_dir_with_maze();
    cli()
        .env("ADVENT_DATA_DIR", dir.path())
        .args(["solve", "aoc24/p16b"])
        .assert()
        .success()
        .stdout("45\n");
}

#[test]
fn solve_reads_stdin() {
    cli()
        .args(["solve", "aoc24:p16a", "--input", "-"])
        .write_stdin(MAZE)
        .assert()
        .success()
        .stdout("7036\n");
}

#[test]
fn solve_applies_parameter_overrides() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("bytes.txt");
    fs::write(&input, "1,0\n1,1\n0,2\n2,2\n").expect("write bytes");

    // With two bytes fallen the walk detours down the left column.
    cli()
        .args(["solve", "aoc24:p18a", "--param", "bytes=2", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout("4\n");

    cli()
        .args(["solve", "aoc24:p18a", "--param", "bytes=lots", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'lots' for parameter bytes"));
}

#[test]
fn solve_emits_json() {
    let output = cli()
        .args(["solve", "aoc24:p16a", "--format", "json", "--input", "-"])
        .write_stdin(MAZE)
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["puzzle"], "aoc24:p16a");
    assert_eq!(value["answer"], 7036);
    assert!(value["elapsed_ms"].is_number());
}

#[test]
fn solve_reports_missing_input_file() {
    let dir = TempDir::new().expect("create temp dir");
    cli()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["solve", "aoc24:p16a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input for aoc24:p16a"));
}

#[test]
fn solve_suggests_close_puzzle_names() {
    cli()
        .args(["solve", "aoc24:p22a", "--input", "-"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown puzzle: aoc24:p22a"));
}

#[test]
fn list_shows_registered_puzzles() {
    cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("aoc24:p16a"))
        .stdout(predicate::str::contains("aoc25:p11b"))
        .stdout(predicate::str::contains("tiles on any best maze path"));
}

#[test]
fn bundled_examples_pass() {
    cli()
        .args(["examples", "--puzzle", "aoc24:p16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS aoc24:p16a 7036"))
        .stdout(predicate::str::contains("PASS aoc24:p16b 45"))
        .stdout(predicate::str::contains("2 passed, 0 failed"));
}

#[test]
fn examples_from_file_run_every_case() {
    cli()
        .args(["examples", "--fixtures"])
        .arg(fixtures_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"));
}

#[test]
fn wrong_expectation_fails_the_run() {
    let dir = TempDir::new().expect("create temp dir");
    let book = dir.path().join("book.json");
    fs::write(
        &book,
        serde_json::json!({ "aoc24:p16": { "input": MAZE, "a": 1 } }).to_string(),
    )
    .expect("write book");

    cli()
        .args(["examples", "--fixtures"])
        .arg(&book)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL aoc24:p16a expected 1, got 7036"))
        .stderr(predicate::str::contains("1 example(s) failed"));
}

#[test]
fn unmatched_filter_is_an_error() {
    cli()
        .args(["examples", "--puzzle", "aoc99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no examples match"));
}
