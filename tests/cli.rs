#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use predicates::prelude::*;

mod common;
use common::{token_entry, ConfigFile, USDT};

fn cli() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("scan-config-cli").unwrap()
}

#[test]
fn test_check_valid_config() {
    let file = ConfigFile::toml(&format!(
        "{}{}",
        token_entry("ETH", "native"),
        token_entry("USDT", USDT)
    ));

    cli()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (2 token pairs)"));
}

#[test]
fn test_check_reports_bad_field() {
    let file = ConfigFile::toml(&token_entry("USDT", "0x1234"));

    cli()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong 'TokenAddress' 0x1234"));
}

#[test]
fn test_check_missing_file() {
    cli()
        .args(["check", "/nonexistent/scan.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not exist"));
}

#[test]
fn test_show_json() {
    let file = ConfigFile::toml(&token_entry("ETH", "native"));

    cli()
        .arg("show")
        .arg(file.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"PairID\": \"ETH\""))
        .stdout(predicate::str::contains("DepositAddress").not());
}

#[test]
fn test_show_toml() {
    let file = ConfigFile::toml(&token_entry("ETH", "native"));

    cli()
        .arg("show")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[[Tokens]]"));
}

#[test]
fn test_pair_lookup() {
    let file = ConfigFile::toml(&token_entry("ETH-USDT", USDT));

    cli()
        .arg("pair")
        .arg(file.path())
        .arg("eth-usdt")
        .assert()
        .success()
        .stdout(predicate::str::contains(USDT));

    cli()
        .arg("pair")
        .arg(file.path())
        .arg("BTC")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pair 'BTC' not found"));
}

fn daemon() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("bridge-scan").unwrap();
    cmd.env("RUST_LOG", "info").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_daemon_exits_when_config_missing() {
    daemon()
        .args(["--config", "/nonexistent.toml"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("config file '/nonexistent.toml' not exist"));
}

#[test]
fn test_daemon_exits_on_duplicate_pair_id() {
    let file = ConfigFile::toml(&format!(
        "{}{}",
        token_entry("p1", "native"),
        token_entry("P1", USDT)
    ));

    daemon()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("duplicate pairID p1"));
}
