use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("visprog").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("visprog"))
        .stdout(predicate::str::contains("sales"));
}

#[test]
fn studio_is_the_default_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("visprog").unwrap();
    cmd.arg("--out-dir").arg(dir.path()).write_stdin("4\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DATA VISUALIZATION PROGRAM"))
        .stdout(predicate::str::contains(
            "Thank you for using the Data Visualization Program!",
        ));
}

#[test]
fn closed_stdin_fails_instead_of_spinning() {
    let mut cmd = Command::cargo_bin("visprog").unwrap();
    cmd.arg("studio").write_stdin("");
    cmd.assert().failure();
}

#[test]
fn sales_json_writes_two_charts() {
    let dir = tempfile::tempdir().unwrap();
    let figures: String = (1..=12).map(|v| format!("{}\n", v * 100)).collect();
    let mut cmd = Command::cargo_bin("visprog").unwrap();
    cmd.args(["sales", "--json", "--format", "png", "--width", "500", "--height", "300"])
        .arg("--out-dir")
        .arg(dir.path())
        .write_stdin(figures);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"grand_total\": 7800.0"))
        .stdout(predicate::str::contains("Visualization complete!"));
    let written = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(written, 2);
}
