use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn friendgraph() -> Command {
    let mut cmd = Command::cargo_bin("friendgraph").unwrap();
    cmd.env_remove("FRIENDGRAPH_NETWORK")
        .env_remove("FRIENDGRAPH_LIMIT")
        .env_remove("FRIENDGRAPH_SCORING")
        .env_remove("FRIENDGRAPH_MAX_DEPTH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_users() -> Result<(), Box<dyn std::error::Error>> {
    friendgraph()
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("gotya"))
        .stdout(predicate::str::contains("14 users, 13 connections"));
    Ok(())
}

#[test]
fn test_cli_recommend_sample() -> Result<(), Box<dyn std::error::Error>> {
    let output = friendgraph()
        .args(["recommend", "gotya", "--limit", "3"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let recommended: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("- Name: "))
        .map(|l| l.split(' ').next().unwrap_or(""))
        .collect();
    assert_eq!(recommended, vec!["pintu", "bandya", "athrya"]);
    assert!(stdout.starts_with("User: gotya"));
    Ok(())
}

#[test]
fn test_cli_recommend_json_start_user_scoring() -> Result<(), Box<dyn std::error::Error>> {
    let output = friendgraph()
        .args(["recommend", "gotya", "--scoring", "start-user", "--json"])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["user"]["name"], "gotya");
    assert_eq!(report["scoring"], "start-user");
    let names: Vec<&str> = report["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["user"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["pintu", "bandya", "Eve", "Nikhil", "athrya"]);
    Ok(())
}

#[test]
fn test_cli_limit_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let output = friendgraph()
        .env("FRIENDGRAPH_LIMIT", "2")
        .args(["recommend", "bandya"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().filter(|l| l.starts_with("- Name:")).count(), 2);
    Ok(())
}

#[test]
fn test_cli_unknown_user_fails() {
    friendgraph()
        .args(["recommend", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown user: ghost"));
}

#[test]
fn test_cli_random_user_with_seed() {
    friendgraph()
        .args(["recommend", "--random", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("User: "));
}

#[test]
fn test_cli_custom_network() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.path().join("people.csv");
    fs::write(
        &file,
        "name,age,interests,friends\nalice,30,Chess;Go,bob\nbob,31,Go,carol\ncarol,32,Chess,\nloner,50,Chess,\n",
    )?;

    friendgraph()
        .arg("--network")
        .arg(&file)
        .args(["recommend", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Name: bob"))
        .stdout(predicate::str::contains("- Name: carol"));

    friendgraph()
        .arg("--network")
        .arg(&file)
        .args(["recommend", "loner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recommendations"));
    Ok(())
}

#[test]
fn test_cli_bad_network_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.path().join("people.txt");
    fs::write(&file, "whatever")?;

    friendgraph()
        .arg("--network")
        .arg(&file)
        .arg("users")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load network"));
    Ok(())
}
