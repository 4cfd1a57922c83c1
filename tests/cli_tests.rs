use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "homebudget_cli";
const HOME_ID: &str = "6f1c2a9e-0d44-4b1c-9a3e-2b7d1c0f5a11";

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("HOMEBUDGET_HOME", home.path());
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn version_prints_build_summary() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(contains("homebudget_core"));
}

#[test]
fn unknown_command_fails_with_usage() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("Usage: homebudget_cli"));
}

#[test]
fn open_prints_monday_week() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["open", HOME_ID, "2025-03-06"])
        .assert()
        .success()
        .stdout(contains("\"week_start\": \"2025-03-03\""));
}

#[test]
fn entries_update_week_totals() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["budget", HOME_ID, "2025-03-03", "150"])
        .assert()
        .success();
    cli(&home)
        .args(["add", HOME_ID, "2025-03-04", "card", "100", "0", "food", "shop"])
        .assert()
        .success()
        .stdout(contains("Added entry"));
    cli(&home)
        .args(["add", HOME_ID, "2025-03-05", "withdrawal", "25"])
        .assert()
        .success();
    cli(&home)
        .args(["add", HOME_ID, "2025-03-05", "cash", "0", "10"])
        .assert()
        .success();

    cli(&home)
        .args(["totals", HOME_ID, "2025-03-09"])
        .assert()
        .success()
        .stdout(
            contains("Card spend:          £100.00")
                .and(contains("Cash withdrawn:      £25.00"))
                .and(contains("Card balance:        £25.00"))
                .and(contains("Petty cash balance:  £35.00")),
        );
}

#[test]
fn negative_amount_is_rejected() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["add", HOME_ID, "2025-03-04", "cash", "-5"])
        .assert()
        .failure()
        .stderr(contains("cannot be negative"));
}

#[test]
fn budget_must_be_a_finite_non_negative_amount() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["budget", HOME_ID, "2025-03-03", "NaN"])
        .assert()
        .failure()
        .stderr(contains("finite"));
    cli(&home)
        .args(["budget", HOME_ID, "2025-03-03", "inf"])
        .assert()
        .failure()
        .stderr(contains("finite"));
    cli(&home)
        .args(["budget", HOME_ID, "2025-03-03", "-500"])
        .assert()
        .failure()
        .stderr(contains("cannot be negative"));

    // The stored week is still readable and following weeks still seed from it.
    cli(&home)
        .args(["totals", HOME_ID, "2025-03-03"])
        .assert()
        .success()
        .stdout(contains("Card balance:        £0.00"));
    cli(&home)
        .args(["budget", HOME_ID, "2025-03-10", "75"])
        .assert()
        .success()
        .stdout(contains("Card balance:        £75.00"));
}

#[test]
fn totals_file_reads_a_ledger_document() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("week.json");
    std::fs::write(
        &path,
        format!(
            r#"{{"home_id":"{HOME_ID}","week_start":"2025-03-03","cash_carried_forward":50,
               "entries":[{{"id":"0b8e7a52-6b0e-4f57-9d1c-5a3f1e2d4c6b","date":"2025-03-04",
               "method":"cash","amount":40}}]}}"#
        ),
    )
    .unwrap();
    cli(&home)
        .arg("totals-file")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Petty cash balance:  £10.00").and(contains("Card balance:        £0.00")));
}
