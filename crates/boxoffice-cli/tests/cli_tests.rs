//! Integration tests for the `boxoffice` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config dir, `.env`, and `RUST_LOG`.
fn boxoffice(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("boxoffice");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("BOXOFFICE_PRICING__ADULT_PRICE")
        .env_remove("BOXOFFICE_PRICING__MAX_TICKETS");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("boxoffice.toml");
    fs::write(&path, contents).unwrap();
    path
}

// ── purchase ──────────────────────────────────────────────────────────────────

#[test]
fn purchase_prints_cost_and_seats() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "--account", "2", "-t", "adult=5", "-t", "child=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purchased 8 ticket(s) for account 2"))
        .stdout(predicate::str::contains("Total cost"))
        .stdout(predicate::str::contains("170"));
}

#[test]
fn purchase_json_output_is_parseable() {
    let home = TempDir::new().unwrap();
    let assert = boxoffice(home.path())
        .args([
            "--output-format",
            "json",
            "purchase",
            "-a",
            "2",
            "-t",
            "adult=10",
            "-t",
            "child=10",
            "-t",
            "infant=5",
        ])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["account_id"], 2);
    assert_eq!(json["total_cost"], 400);
    assert_eq!(json["total_seats"], 20);
    assert_eq!(json["infants"], 5);
}

#[test]
fn infants_only_is_rejected() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "-a", "2435", "-t", "infant=12"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least one adult ticket"));
}

#[test]
fn rejections_are_not_logged_twice() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "-a", "2", "-t", "child=1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Purchase rejected"))
        .stderr(predicate::str::contains("User error").not());
}

#[test]
fn missing_ticket_flags_are_rejected() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "-a", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ticket requests are missing"));
}

#[test]
fn non_positive_account_is_rejected() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "-a", "0", "-t", "adult=1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn negative_quantity_is_rejected() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "-a", "555", "-t", "adult=-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn json_errors_carry_the_reason_code() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["--output-format", "json", "purchase", "-a", "2", "-t", "adult=26"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""reason": "tooManyTickets""#));
}

#[test]
fn unknown_ticket_type_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["purchase", "-a", "2", "-t", "senior=1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("senior"));
}

#[test]
fn quiet_purchase_prints_nothing() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["-q", "purchase", "-a", "2", "-t", "adult=1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── quote / prices ───────────────────────────────────────────────────────────

#[test]
fn quote_prices_without_purchasing() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["quote", "-a", "8", "-t", "adult=3", "-t", "infant=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote only"))
        .stdout(predicate::str::contains("75"))
        .stdout(predicate::str::contains("Purchased").not());
}

#[test]
fn prices_lists_the_default_table() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .arg("prices")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADULT"))
        .stdout(predicate::str::contains("INFANT"))
        .stdout(predicate::str::contains("(no seat)"));
}

// ── configuration ────────────────────────────────────────────────────────────

#[test]
fn config_file_overrides_prices() {
    let home = TempDir::new().unwrap();
    let config = write_config(&home, "[pricing]\nadult_price = 30\n");

    let assert = boxoffice(home.path())
        .arg("--config")
        .arg(&config)
        .args(["--output-format", "json", "quote", "-a", "1", "-t", "adult=2"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["total_cost"], 60);
}

#[test]
fn environment_overrides_the_maximum() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .env("BOXOFFICE_PRICING__MAX_TICKETS", "2")
        .args(["quote", "-a", "1", "-t", "adult=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no more than 2 tickets"));
}

#[test]
fn zero_maximum_is_a_configuration_error() {
    let home = TempDir::new().unwrap();
    let config = write_config(&home, "[pricing]\nmax_tickets = 0\n");

    boxoffice(home.path())
        .arg("--config")
        .arg(&config)
        .args(["purchase", "-a", "1", "-t", "adult=1"])
        .assert()
        .code(4);
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["--config", "nowhere.toml", "prices"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_failures_are_reported_without_a_doubled_prefix() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["--config", "nowhere.toml", "prices"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error: Configuration error").not());
}

#[cfg(target_os = "linux")]
#[test]
fn broken_default_config_can_be_repaired_with_init() {
    let home = TempDir::new().unwrap();
    let default_dir = home.path().join(".config/boxoffice");
    fs::create_dir_all(&default_dir).unwrap();
    let default_file = default_dir.join("config.toml");
    fs::write(&default_file, "[pricing]\nadult_price = \"lots\"\n").unwrap();

    boxoffice(home.path()).arg("prices").assert().code(4);

    boxoffice(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/boxoffice/config.toml"));

    boxoffice(home.path())
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    let contents = fs::read_to_string(&default_file).unwrap();
    assert!(contents.contains("adult_price = 25"));

    boxoffice(home.path()).arg("prices").assert().success();
}

#[test]
fn init_writes_to_the_config_flag_path() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("venue.toml");

    boxoffice(home.path())
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success();

    let contents = fs::read_to_string(&target).unwrap();
    assert!(contents.contains("max_tickets = 25"));
    assert!(!home.path().join(".config/boxoffice/config.toml").exists());

    boxoffice(home.path())
        .arg("--config")
        .arg(&target)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("venue.toml"));
}

#[test]
fn config_get_reads_a_value() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["config", "get", "pricing.child_price"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pricing.child_price = 15"));
}

#[test]
fn config_get_unknown_key_is_user_error() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["config", "get", "pricing.senior_price"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[cfg(target_os = "linux")]
#[test]
fn init_writes_defaults_once() {
    let home = TempDir::new().unwrap();
    let written = home.path().join(".config/boxoffice/config.toml");

    boxoffice(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains("adult_price = 25"));

    boxoffice(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

// ── misc ─────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("purchase"))
        .stdout(predicate::str::contains("quote"));
}

#[test]
fn verbose_help_describes_purchase_logging() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment taken, seats reserved"))
        .stdout(predicate::str::contains("Aggregated ticket counts"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bash_completions_mention_the_binary() {
    let home = TempDir::new().unwrap();
    boxoffice(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boxoffice"));
}
