// Integration tests for the majormatch CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ASSESSMENT: &str = r#"{
  "rawSkills": "coding, analisis data",
  "experiences": "ketua organisasi sekolah",
  "interest": "teknologi",
  "psychologyAnswers": {
    "1": 5, "2": 3, "3": 2,
    "4": 4, "5": 2, "6": 3,
    "7": 2, "8": 3, "9": 5,
    "10": 5, "11": 3, "12": 2
  }
}"#;

/// Helper to build a Command for the majormatch binary, isolated from the
/// caller's home directory and log settings.
fn majormatch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("majormatch").expect("binary should exist");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn write_assessment(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("assessment.json");
    fs::write(&path, ASSESSMENT).expect("assessment should write");
    path
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    majormatch(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("majormatch"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    majormatch(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("major compatibility"));
}

#[test]
fn analyze_requires_input() {
    let home = TempDir::new().expect("temp dir should be created");
    majormatch(&home)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_prints_dna_profile() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_assessment(&dir);

    majormatch(&dir)
        .args(["--config"])
        .arg(dir.path())
        .arg("analyze")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("# DNA Profile"))
        .stdout(predicate::str::contains("Programming"))
        .stdout(predicate::str::contains("- cognitive: Analitis & Logis"))
        .stdout(predicate::str::contains("- trait: Teliti & Detail"));
}

#[test]
fn analyze_json_uses_trait_key() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_assessment(&dir);

    let output = majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["analyze", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["psychology"]["trait"], "Teliti & Detail");
    assert_eq!(value["psychology"]["motivation"], "Tantangan & Prestasi");
}

#[test]
fn analyze_missing_input_exits_with_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["analyze", "--input", "/nonexistent/assessment.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn match_json_lists_scored_majors() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_assessment(&dir);

    let output = majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["match", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["strategy"], "weighted");
    let results = value["results"].as_array().expect("results should be an array");
    assert_eq!(results.len(), 10);
    let scores = results
        .iter()
        .map(|result| result["score"].as_u64().expect("score should be a number"))
        .collect::<Vec<_>>();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(scores.iter().all(|score| *score <= 100));
}

#[test]
fn match_heuristic_keeps_full_catalog() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_assessment(&dir);

    let output = majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["match", "--strategy", "heuristic", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["strategy"], "heuristic");
    let results = value["results"].as_array().expect("results should be an array");
    assert_eq!(results.len(), 12);
    assert!(results
        .iter()
        .all(|result| result["score"].as_u64().expect("score") >= 30));
}

#[test]
fn match_markdown_renders_sections() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_assessment(&dir);

    majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["match", "--strategy", "heuristic", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Major Recommendations"))
        .stdout(predicate::str::contains("## Top Matches"))
        .stdout(predicate::str::contains("## Other Majors"));
}

#[test]
fn match_uses_catalog_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_assessment(&dir);
    let catalog = dir.path().join("majors.json");
    fs::write(
        &catalog,
        r#"[{
            "id": "data-science",
            "name": "Sains Data",
            "university": "Universitas Contoh",
            "category": "Teknologi",
            "skills": "analisis, data",
            "metadata": {"traits": {"investigative": 5, "conventional": 4}}
        }]"#,
    )
    .expect("catalog should write");

    majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["match", "--input"])
        .arg(&input)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sains Data (data-science)"));
}

#[test]
fn majors_lists_bundled_catalog() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["majors", "--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let majors = value.as_array().expect("majors should be an array");
    assert_eq!(majors.len(), 12);
    assert!(majors.iter().any(|major| major["id"] == "teknik-informatika"));
}

#[test]
fn invalid_config_exits_with_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("majormatch.toml"), "[scoring]\nhighlight = 0\n")
        .expect("config should write");

    majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .arg("majors")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("scoring.highlight"));
}

#[test]
fn analyze_tolerates_malformed_answers_and_null_text() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = dir.path().join("assessment.json");
    fs::write(
        &input,
        r#"{
  "rawSkills": null,
  "experiences": "ketua organisasi",
  "interest": null,
  "psychologyAnswers": {"1": 300, "2": -1, "3": "5", "4": 4.0, "q5": 5}
}"#,
    )
    .expect("assessment should write");

    let output = majormatch(&dir)
        .arg("--config")
        .arg(dir.path())
        .args(["analyze", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["skill"]["raw_skills"], "");
    assert_eq!(value["psychology"]["cognitive"], "Kreatif & Inovatif");
    assert_eq!(value["psychology"]["learning"], "-");
}
