use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rogvibe() -> Command {
    let mut cmd = Command::cargo_bin("rogvibe").unwrap();
    cmd.arg("--instant");
    cmd
}

#[test]
fn test_too_few_participants() {
    rogvibe()
        .args(["a", "b", "c", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4 participants (got 3)"));
}

#[test]
fn test_blank_names_do_not_count() {
    rogvibe()
        .args(["a", " ", "b", "", "c", "d", "--once", "--dry-run", "--seed", "1"])
        .assert()
        .stdout(predicate::str::contains("viber:"));
}

#[test]
fn test_lucky_wheel_exits_cleanly() {
    rogvibe()
        .args(["lucky", "lucky", "lucky", "lucky", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lucky winner"));
}

#[test]
fn test_missing_command_exits_127() {
    let name = "rogvibe-no-such-tool-xyz";
    rogvibe()
        .args([name, name, name, name, "--once"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("[rogvibe] command not found"));
}

#[test]
fn test_unbalanced_quotes_exit_1() {
    let name = "'unterminated";
    rogvibe()
        .args([name, name, name, name, "--once"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse command"));
}

#[cfg(unix)]
#[test]
fn test_wheel_hands_off_to_winner() {
    rogvibe()
        .args(["true", "true", "true", "true", "--once"])
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_winner_exit_code_passes_through() {
    rogvibe()
        .args(["false", "false", "false", "false", "--once"])
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn test_slot_jackpot_hands_off() {
    rogvibe()
        .args(["--slot", "true", "true", "true", "true", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JACKPOT: true"));
}

#[cfg(unix)]
#[test]
fn test_dry_run_prints_invocation() {
    rogvibe()
        .args(["sh -c exit", "sh -c exit", "sh -c exit", "sh -c exit"])
        .args(["--once", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would run:"))
        .stdout(predicate::str::contains("sh -c exit"));
}

#[cfg(unix)]
#[test]
fn test_seed_replays_the_same_spin() {
    let run = || {
        rogvibe()
            .args(["true", "echo", "sh", "env", "--once", "--dry-run"])
            .args(["--seed", "42"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_truncation_warning() {
    let names: Vec<String> = (0..10).map(|i| format!("lucky{}", i)).collect();
    rogvibe()
        .args(&names)
        .args(["--once", "--dry-run", "--seed", "3"])
        .assert()
        .stderr(predicate::str::contains(
            "Showing only the first 8 names; the remaining 2 are ignored.",
        ));
}

#[test]
fn test_missing_config_fails() {
    rogvibe()
        .args(["--config", "/definitely/not/here.json", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_config_candidates_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rogvibe.json");
    fs::write(
        &path,
        r#"{ "seed": 5, "candidates": ["rogvibe-no-such-tool-xyz"] }"#,
    )
    .unwrap();

    // Nothing installed: the wheel is all "handy", which never runs.
    rogvibe()
        .arg("--config")
        .arg(&path)
        .arg("--once")
        .assert()
        .success()
        .stdout(predicate::str::contains("viber: handy"));
}

#[test]
fn test_interactive_quit() {
    rogvibe()
        .args(["lucky", "handy", "lucky", "handy"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter or s to spin"));
}

#[test]
fn test_interactive_eof_quits() {
    rogvibe()
        .args(["lucky", "handy", "lucky", "handy"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn test_interactive_spin_then_quit() {
    rogvibe()
        .args(["lucky", "lucky", "lucky", "lucky"])
        .write_stdin("s\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lucky winner"));
}

#[cfg(unix)]
#[test]
fn test_interactive_enter_runs_pending() {
    rogvibe()
        .args(["sh", "sh", "sh", "sh", "--dry-run"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("would run:"));
}
