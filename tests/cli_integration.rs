use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn ssm_yaml() -> Command {
    let mut cmd = Command::cargo_bin("ssm-yaml").unwrap();
    // keep assertions free of ANSI escapes
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn yaml_tree_renders_a_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("config.yaml");
    fs::write(&file, "app:\n  db:\n    host: localhost\n    password: x\n").unwrap();

    ssm_yaml()
        .args(["yaml-tree", "-f", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("root"))
        .stdout(predicate::str::contains("└── app"))
        .stdout(predicate::str::contains("├── host"))
        .stdout(predicate::str::contains("└── password 🔒"));
}

#[test]
fn yaml_tree_shows_values_with_flag() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("config.yaml");
    fs::write(&file, "port: 8080\n").unwrap();

    ssm_yaml()
        .args(["yaml-tree", "-f", file.to_str().unwrap(), "--values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── port = 8080"));
}

#[test]
fn yaml_tree_orders_equal_depth_siblings_lexicographically() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("config.yaml");
    fs::write(&file, "\"2\": a\n\"10\": b\nabc: c\n").unwrap();

    let output = ssm_yaml()
        .args(["yaml-tree", "-f", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let pos = |needle: &str| stdout.find(needle).unwrap();
    assert!(pos("10") < pos("2"));
    assert!(pos("─ 2") < pos("abc"));
}

#[test]
fn yaml_tree_rejects_malformed_yaml() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("bad.yaml");
    fs::write(&file, "a: [unclosed\n").unwrap();

    ssm_yaml()
        .args(["yaml-tree", "-f", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse YAML"));
}

#[test]
fn yaml_tree_requires_a_file() {
    ssm_yaml().arg("yaml-tree").assert().failure();
}

#[test]
fn load_requires_file_and_prefix() {
    ssm_yaml().arg("load").assert().failure();
}

#[test]
fn load_rejects_prefix_without_leading_slash() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("config.yaml");
    fs::write(&file, "a: 1\n").unwrap();

    // prefix validation fires before any store connection is attempted
    ssm_yaml()
        .args(["load", "-f", file.to_str().unwrap(), "-p", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prefix must start with '/'"));
}

#[test]
fn load_reports_missing_files() {
    ssm_yaml()
        .args(["load", "-f", "/no/such/file.yaml", "-p", "/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn subcommand_aliases_work() {
    ssm_yaml().arg("yt").assert().failure(); // still missing --file
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("c.yaml");
    fs::write(&file, "a: 1\n").unwrap();
    ssm_yaml()
        .args(["yt", "-f", file.to_str().unwrap()])
        .assert()
        .success();
}
