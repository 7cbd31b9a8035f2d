//! End-to-end tests for the wordforge binary.
//!
//! Every invocation passes `--profile` so no test waits on a prompt.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wordforge() -> Command {
    Command::cargo_bin("wordforge").unwrap()
}

fn write_profile(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("target.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_generate_writes_a_sorted_unique_wordlist() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir, "first_name: bob\nlast_name: morane\n");
    let out_dir = dir.path().join("lists");

    wordforge()
        .arg("generate")
        .arg("-2")
        .arg("--profile")
        .arg(&profile)
        .arg("--path")
        .arg(&out_dir)
        .arg("--name")
        .arg("bob")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wordlist saved"));

    let content = fs::read_to_string(out_dir.join("bob_clear.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines.contains(&"bob123"));
    assert!(lines.contains(&"bobmorane"));

    let mut sorted = lines.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(lines, sorted);
}

#[test]
fn test_generate_levels_change_the_candidate_set() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir, "first_name: anatole\n");
    let out_dir = dir.path().join("lists");

    for (flag, name) in [("-1", "one"), ("-3", "three")] {
        wordforge()
            .arg("generate")
            .arg(flag)
            .arg("--profile")
            .arg(&profile)
            .arg("--path")
            .arg(&out_dir)
            .arg("--name")
            .arg(name)
            .arg("--quiet")
            .assert()
            .success();
    }

    let one = fs::read_to_string(out_dir.join("one_clear.txt")).unwrap();
    let three = fs::read_to_string(out_dir.join("three_clear.txt")).unwrap();

    // Leet forms only show up from level 3 on.
    assert!(!one.lines().any(|line| line == "4natole"));
    assert!(three.lines().any(|line| line == "4natole"));
    assert!(three.lines().count() > one.lines().count());
}

#[test]
fn test_generate_rejects_profiles_without_facts() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir, "first_name: \"\"\nnickname: \"   \"\n");

    wordforge()
        .arg("generate")
        .arg("--profile")
        .arg(&profile)
        .arg("--path")
        .arg(dir.path().join("lists"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable facts"));
}

#[test]
fn test_generate_reports_unreadable_profiles() {
    wordforge()
        .arg("generate")
        .arg("--profile")
        .arg("/nonexistent/target.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load profile"));
}

#[test]
fn test_generate_rejects_conflicting_level_flags() {
    wordforge()
        .arg("generate")
        .arg("-1")
        .arg("-3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_postal_code_prefixes_reach_the_wordlist() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir, "first_name: ana\npostal_code: \"75011\"\n");
    let out_dir = dir.path().join("lists");

    wordforge()
        .arg("generate")
        .arg("--max")
        .arg("--profile")
        .arg(&profile)
        .arg("--path")
        .arg(&out_dir)
        .arg("--quiet")
        .assert()
        .success();

    let content = fs::read_to_string(out_dir.join("wordlist_clear.txt")).unwrap();
    // Pairwise tier glues the full postal code to the name.
    assert!(content.lines().any(|line| line == "ana75011"));
    assert!(content.lines().any(|line| line == "75ana"));
}

#[test]
fn test_levels_describes_the_ladder() {
    wordforge()
        .arg("levels")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level 1")
                .and(predicate::str::contains("Level 4"))
                .and(predicate::str::contains("--max")),
        );
}

#[test]
fn test_version_runs() {
    wordforge()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wordforge"));
}
