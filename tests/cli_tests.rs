mod common;

use std::fs;

use assert_cmd::Command;
use common::sample_ledger;
use predicates::{prelude::*, str::contains};
use spendwise_core::utils::export::write_export;
use tempfile::tempdir;

fn spendwise() -> Command {
    let mut cmd = Command::cargo_bin("spendwise").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", "/nonexistent/spendwise-tests");
    cmd
}

#[test]
fn summary_prints_cards_breakdown_and_groups() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("ledger.json");
    write_export(&sample_ledger(), &input).unwrap();

    spendwise()
        .args(["summary", input.to_str().unwrap(), "--today", "2024-01-31"])
        .args(["--range", "7d"])
        .assert()
        .success()
        .stdout(contains("Net balance: ₹50,000 (Surplus)"))
        .stdout(contains("Expense: ₹18,000"))
        .stdout(contains("Goal New Car: ₹50,000 saved, 50% of ₹1,00,000"))
        .stdout(contains("Housing"))
        .stdout(contains("Metro card"))
        .stdout(contains("Dinner out").not());
}

#[test]
fn summary_uses_config_currency() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("ledger.json");
    write_export(&sample_ledger(), &input).unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{ "currency": "USD", "locale": "en-US" }"#).unwrap();

    spendwise()
        .args(["summary", input.to_str().unwrap()])
        .args(["--config", config.to_str().unwrap(), "--kind", "income"])
        .assert()
        .success()
        .stdout(contains("Top income categories:"))
        .stdout(contains("$60,000"));
}

#[test]
fn chart_writes_both_svgs() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("ledger.json");
    write_export(&sample_ledger(), &input).unwrap();
    let out_dir = temp.path().join("charts");

    spendwise()
        .args(["chart", input.to_str().unwrap(), out_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("trend.svg"));

    let trend = fs::read_to_string(out_dir.join("trend.svg")).unwrap();
    let pie = fs::read_to_string(out_dir.join("pie.svg")).unwrap();
    assert!(trend.contains("<path"));
    assert!(pie.contains("#ec4899"));
}

#[test]
fn invalid_input_fails_with_message() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("bad.json");
    fs::write(
        &input,
        r#"[{"id":"7f1c5d1e-8a39-4d53-9a53-2f7e1f0b8e11","title":"Tea","amount":0,"category":"Food","type":"expense","date":"2024-01-01"}]"#,
    )
    .unwrap();

    spendwise()
        .args(["summary", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Amount must be positive"));

    spendwise()
        .args(["summary", input.to_str().unwrap(), "--range", "year"])
        .assert()
        .failure()
        .stderr(contains("unknown range"));
}
