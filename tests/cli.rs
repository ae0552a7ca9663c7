use assert_cmd::Command;
use predicates::prelude::*;

// Going to keep it light: the happy paths and a simple parse failure.

#[test]
fn test_cli_solve_success() {
    let mut cmd = Command::cargo_bin("nonoqr").unwrap();

    cmd.arg("--no-color")
        .pipe_stdin("puzzles/box.yaml")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{25A0}  \u{25A0}  \u{25A0}  \u{25A0}  \u{25A0}"))
        .stdout(predicate::str::contains("1 1"));
}

#[test]
fn test_cli_generate_success() {
    let mut cmd = Command::cargo_bin("nonoqr").unwrap();

    cmd.arg("--no-color")
        .arg("--generate")
        .pipe_stdin("puzzles/box-bitmap.yaml")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("rows:"))
        .stdout(predicate::str::contains("\u{25A0}"));
}

#[test]
fn test_cli_failure() {
    let mut cmd = Command::cargo_bin("nonoqr").unwrap();

    cmd.write_stdin("This is not a valid input.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a 'rows:' list"));
}
