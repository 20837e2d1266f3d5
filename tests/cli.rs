use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn history_food_summary() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["history", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food: ₱650.00"))
        .stdout(predicate::str::contains("Total Spending: ₱650.00"))
        .stdout(predicate::str::contains("Transport").not());
}

#[test]
fn history_all_defaults() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .arg("txn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spending: ₱2,850.00"))
        .stdout(predicate::str::contains("Spending by Category"));
}

#[test]
fn history_amount_range() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["history", "--amount", "100-500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spending: ₱850.00"))
        .stdout(predicate::str::contains("Bills").not());
}

#[test]
fn history_bad_amount_warns_and_succeeds() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["history", "--amount", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Input Error: Invalid amount value."))
        .stdout(predicate::str::contains("Total Spending: ₱2,850.00"));
}

#[test]
fn history_bad_range_warns() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["history", "--amount", "100-abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid amount range format."));
}

#[test]
fn history_inverted_dates_is_empty() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["history", "--from", "2030-01-02", "--to", "2030-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to summarize."))
        .stdout(predicate::str::contains("Total Spending: ₱0.00"));
}

#[test]
fn history_rejects_malformed_date() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["history", "--from", "03/01/2025"])
        .assert()
        .failure();
}

#[test]
fn history_rejects_unknown_date_format_setting() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    expense(&dir)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn history_json() {
    let dir = TempDir::new().unwrap();
    let output = expense(&dir)
        .args(["history", "--json", "--category", "snacks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["summary"]["grand_total"], "200.00");
    assert_eq!(view["transactions"].as_array().map(Vec::len), Some(1));
    assert!(view.get("warning").is_none());
}

#[test]
fn categories_lists_all_first() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All\nFood\n"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn no_subcommand_prints_hint() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("expense --help"));
}
