//! Integration tests for the trailhead CLI
//!
//! These tests run the trailhead binary against the bundled maze and small
//! graph files.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for trailhead
fn trailhead() -> Command {
    cargo_bin_cmd!("trailhead")
}

const MAZE_SOLUTION: &str = "0 -> 2 -> 4 -> 8 -> 10 -> 11 -> 14 -> 16 -> 17";

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    trailhead()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: trailhead"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("maze"));
}

#[test]
fn test_version_flag() {
    trailhead()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trailhead"));
}

#[test]
fn test_no_command_prints_banner() {
    trailhead()
        .assert()
        .success()
        .stdout(predicate::str::contains("trailhead --help"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    trailhead()
        .args(["--format", "invalid", "paths"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    trailhead()
        .args(["--format", "json", "paths", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unknown_node_exit_code_3() {
    trailhead()
        .args(["paths", "--to", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: 99"));
}

#[test]
fn test_unknown_node_json_error() {
    trailhead()
        .args(["--format", "json", "paths", "--from", "40"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_node\""));
}

// ============================================================================
// Paths command tests
// ============================================================================

#[test]
fn test_paths_default_runs_both_strategies_on_maze() {
    trailhead()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Paths (1):"))
        .stdout(predicate::str::contains("DFS Paths (1):"))
        .stdout(predicate::str::contains(MAZE_SOLUTION));
}

#[test]
fn test_paths_single_strategy() {
    trailhead()
        .args(["paths", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS Paths (1):"))
        .stdout(predicate::str::contains("BFS").not());
}

#[test]
fn test_paths_quiet_hides_statistics() {
    trailhead()
        .args(["--quiet", "paths", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expanded").not());
}

#[test]
fn test_paths_same_start_and_end() {
    trailhead()
        .args(["paths", "--from", "5", "--to", "5", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Paths (1):"))
        .stdout(predicate::str::contains("  5\n"));
}

#[test]
fn test_paths_json_output() {
    let output = trailhead()
        .args(["--format", "json", "paths", "--strategy", "both"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["strategy"], "bfs");
    assert_eq!(results[1]["strategy"], "dfs");
    for result in results {
        assert_eq!(result["from"], 0);
        assert_eq!(result["to"], 17);
        assert_eq!(result["found"], true);
        assert_eq!(result["path_length"], 8);
        assert_eq!(
            result["paths"],
            serde_json::json!([[0, 2, 4, 8, 10, 11, 14, 16, 17]])
        );
    }
}

#[test]
fn test_paths_from_graph_file() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("diamond.json");
    fs::write(&graph_path, r#"{"edges": [[0, 1], [1, 2], [0, 3], [3, 2]]}"#).unwrap();

    trailhead()
        .args(["paths", "--from", "0", "--to", "2", "--strategy", "bfs", "--graph"])
        .arg(&graph_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Paths (2):"))
        .stdout(predicate::str::contains("0 -> 1 -> 2"))
        .stdout(predicate::str::contains("0 -> 3 -> 2"));
}

#[test]
fn test_paths_unreachable_in_graph_file() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("split.json");
    fs::write(&graph_path, r#"{"nodes": [5], "edges": [[0, 1]]}"#).unwrap();

    trailhead()
        .args(["paths", "--from", "0", "--to", "5", "--graph"])
        .arg(&graph_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Paths: none from 0 to 5"))
        .stdout(predicate::str::contains("DFS Paths: none from 0 to 5"));
}

#[test]
fn test_paths_malformed_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("broken.json");
    fs::write(&graph_path, "{\"edges\": [[0]]}").unwrap();

    trailhead()
        .args(["paths", "--graph"])
        .arg(&graph_path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

#[test]
fn test_paths_self_loop_in_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("loop.json");
    fs::write(&graph_path, r#"{"edges": [[0, 1], [1, 1]]}"#).unwrap();

    trailhead()
        .args(["--format", "json", "paths", "--from", "0", "--to", "1", "--graph"])
        .arg(&graph_path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_graph\""))
        .stderr(predicate::str::contains("self-loop on 1"));
}

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_config_supplies_defaults() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("trailhead.toml");
    fs::write(
        &config_path,
        "format = \"json\"\n\n[search]\nstrategies = [\"dfs\"]\nfrom = 2\nto = 3\n",
    )
    .unwrap();

    let output = trailhead()
        .arg("--config")
        .arg(&config_path)
        .arg("paths")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["strategy"], "dfs");
    assert_eq!(json[0]["paths"], serde_json::json!([[2, 3]]));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("trailhead.toml");
    fs::write(&config_path, "format = \"json\"\n").unwrap();

    trailhead()
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "human", "paths", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Paths (1):"));
}

#[test]
fn test_invalid_config_exit_code_2() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("trailhead.toml");
    fs::write(&config_path, "[search]\nstrategies = []\n").unwrap();

    trailhead()
        .arg("--config")
        .arg(&config_path)
        .arg("paths")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("search.strategies"));
}

// ============================================================================
// Maze command tests
// ============================================================================

#[test]
fn test_maze_lists_corridors() {
    trailhead()
        .arg("maze")
        .assert()
        .success()
        .stdout(predicate::str::contains("25 junctions, 24 corridors"))
        .stdout(predicate::str::contains("16 -- 17"));
}

#[test]
fn test_maze_json() {
    let output = trailhead()
        .args(["--format", "json", "maze"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 25);
    assert_eq!(json["edges"].as_array().unwrap().len(), 24);
    assert_eq!(json["edges"][0], serde_json::json!([0, 1]));
}
