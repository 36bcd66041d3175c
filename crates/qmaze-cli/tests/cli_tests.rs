//! End-to-end tests for the `qmaze` binary.

use std::process::{Command, Output};

fn qmaze(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qmaze"))
        .args(args)
        .env_remove("QMAZE_SHOTS")
        .env_remove("QMAZE_SEED")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json_result(args: &[&str]) -> serde_json::Value {
    let output = qmaze(args);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

fn total(counts: &serde_json::Value) -> u64 {
    counts
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum()
}

#[test]
fn test_maze_table_prints_possible_paths() {
    let output = qmaze(&["maze", "--seed", "7"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Possible paths: {"));
    assert!(text.contains("Results (1024 shots)"));
    assert!(text.contains("Most frequent"));
}

#[test]
fn test_maze_json_uses_default_shots() {
    let result = json_result(&["maze", "--seed", "1", "--format", "json"]);
    assert_eq!(result["shots"], 1024);
    assert_eq!(total(&result["counts"]), 1024);
    assert_eq!(result["counts"].as_object().unwrap().len(), 8);
}

#[test]
fn test_walk_json_uses_walk_shots() {
    let result = json_result(&["walk", "--seed", "1", "--format", "json"]);
    assert_eq!(result["shots"], 1000);
    assert_eq!(total(&result["counts"]), 1000);
    assert!(
        result["counts"]
            .as_object()
            .unwrap()
            .keys()
            .all(|k| k.len() == 4)
    );
}

#[test]
fn test_walk_steps_do_not_change_seeded_counts() {
    let a = json_result(&["walk", "--steps", "0", "--seed", "9", "-f", "json"]);
    let b = json_result(&["walk", "--steps", "12", "--seed", "9", "-f", "json"]);
    assert_eq!(a["counts"], b["counts"]);
}

#[test]
fn test_seed_from_environment() {
    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_qmaze"))
            .args(["maze", "--format", "json"])
            .env("QMAZE_SEED", "42")
            .env("QMAZE_SHOTS", "300")
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_str::<serde_json::Value>(&stdout(&output)).unwrap()
    };
    let first = run();
    assert_eq!(first["shots"], 300);
    assert_eq!(first["counts"], run()["counts"]);
}

#[test]
fn test_plot_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maze.svg");
    let output = qmaze(&["maze", "--seed", "3", "--plot", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Possible paths"));
}

#[test]
fn test_zero_shots_fails() {
    let output = qmaze(&["maze", "--shots", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("Invalid shots"));
}

#[test]
fn test_plot_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("walk.svg");
    let output = qmaze(&["walk", "--plot", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to write histogram"));
}

#[test]
fn test_invalid_format_rejected() {
    let output = qmaze(&["maze", "--format", "yaml"]);
    assert!(!output.status.success());
}

#[test]
fn test_backends_lists_simulator() {
    let output = qmaze(&["backends"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("simulator"));
    assert!(text.contains("Qubits: 20"));
    assert!(text.contains("Max shots: 100000"));
}

#[test]
fn test_version() {
    let output = qmaze(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
