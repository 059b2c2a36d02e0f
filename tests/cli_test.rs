//! Integration tests for the runetrack binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONTENT: &str = r#"
quests:
  - id: cooks_assistant
    name: Cook's Assistant
  - id: waterfall_quest
    name: Waterfall Quest
    requirements:
      - type: skill-level
        skill: attack
        level: 30
"#;

const FACTS: &str = r#"
sync:
  skillLevels: { attack: 20 }
  quests: { cooks_assistant: true }
"#;

const PREVIOUS: &str = r#"{
  "capturedAt": "2026-01-01T00:00:00Z",
  "totalLevel": 40,
  "totalXp": 1000,
  "combatLevel": 3,
  "skills": [{ "skill": "fishing", "level": 5, "xp": 400 }]
}"#;

const CURRENT: &str = r#"{
  "capturedAt": "2026-01-08T00:00:00Z",
  "totalLevel": 44,
  "totalXp": 1600,
  "combatLevel": 3,
  "skills": [{ "skill": "fishing", "level": 9, "xp": 1000 }]
}"#;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".runetrack");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yml"),
        "content: [content.yml]\nfacts: facts.yml\nsnapshots_dir: snapshots\n",
    )
    .unwrap();
    fs::write(temp.path().join("content.yml"), CONTENT).unwrap();
    fs::write(temp.path().join("facts.yml"), FACTS).unwrap();
    let snapshots = temp.path().join("snapshots");
    fs::create_dir_all(&snapshots).unwrap();
    fs::write(snapshots.join("2026-01-01.json"), PREVIOUS).unwrap();
    fs::write(snapshots.join("2026-01-08.json"), CURRENT).unwrap();
    temp
}

fn runetrack(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("runetrack"));
    cmd.current_dir(temp.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runetrack"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Old School RuneScape"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runetrack"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runetrack"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_evaluate_uses_configured_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    runetrack(&temp)
        .arg("evaluate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Cook's Assistant (completed)"))
        .stdout(predicate::str::contains("✗ Waterfall Quest"))
        .stdout(predicate::str::contains("Level 30 Attack"));
    Ok(())
}

#[test]
fn cli_evaluate_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = runetrack(&temp)
        .args(["evaluate", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["summary"]["quests"]["met"], 1);
    assert_eq!(value["summary"]["quests"]["notMet"], 1);
    assert_eq!(value["quests"][1]["status"], "NOT_MET");
    Ok(())
}

#[test]
fn cli_evaluate_without_content_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".runetrack"))?;
    runetrack(&temp)
        .arg("evaluate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No content configured"));
    Ok(())
}

#[test]
fn cli_check_exit_codes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    runetrack(&temp)
        .args(["check", "-r", "{type: quest-complete, questId: cooks_assistant}"])
        .assert()
        .code(0);
    runetrack(&temp)
        .args(["check", "-r", "{type: skill-level, skill: attack, level: 30}"])
        .assert()
        .code(1);
    runetrack(&temp)
        .args(["check", "-r", "{type: item-possessed, itemId: dragon_scimitar}"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("?"));
    Ok(())
}

#[test]
fn cli_check_rejects_unknown_type() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    runetrack(&temp)
        .args(["check", "-r", "{type: total-level, level: 500}"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid requirement"));
    Ok(())
}

#[test]
fn cli_diff_reports_gains() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    runetrack(&temp)
        .args([
            "diff",
            "snapshots/2026-01-01.json",
            "snapshots/2026-01-08.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total XP: +600"))
        .stdout(predicate::str::contains("Fishing: 5 -> 9 (+4 levels, +600 xp)"))
        .stdout(predicate::str::contains("Attack:").not());
    Ok(())
}

#[test]
fn cli_summary_uses_snapshot_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = runetrack(&temp)
        .args(["summary", "--since", "30d", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["totalLevelDelta"], 4);
    assert_eq!(value["elapsedSeconds"], 7 * 86400);
    Ok(())
}

#[test]
fn cli_combat() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    runetrack(&temp)
        .args(["combat", "--attack", "99", "--strength", "99", "--defence", "99"])
        .args(["--hitpoints", "99", "--prayer", "99", "--ranged", "99", "--magic", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Combat level: 126"));
    Ok(())
}

#[test]
fn cli_validate_strict_fails_on_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("bundle.yml"),
        "quests:\n  - id: Cooks Assistant\n    name: Cook's Assistant\n",
    )?;

    runetrack(&temp)
        .args(["validate", "--content", "bundle.yml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[invalid-id]"));
    runetrack(&temp)
        .args(["validate", "--content", "bundle.yml", "--strict"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_schema_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = runetrack(&temp).arg("schema").output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["title"], "ContentBundle");
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runetrack"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("runetrack"));
    Ok(())
}

#[test]
fn cli_explicit_config_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    runetrack(&temp)
        .args(["--config", "nope.yml", "combat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}
