use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the drainguard binary.
#[allow(deprecated)]
fn drainguard_cmd() -> Command {
    Command::cargo_bin("drainguard").unwrap()
}

#[test]
fn help_works() {
    drainguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_lists_flags() {
    drainguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--report-out"))
        .stdout(predicate::str::contains("--disable"));
}

#[test]
fn version_works() {
    drainguard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_without_paths_prints_banner() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    drainguard_cmd()
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "DrainGuard v{}: Container graceful shutdown compliance validator",
            env!("CARGO_PKG_VERSION")
        )));
}
