//! Integration tests for the `slotgate` binary entry point.
//!
//! Runs the real binary with the real configuration loader and checks the
//! rendered decisions and user-facing error handling.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn routes_command_from_argv() {
    let mut command = cargo_bin_cmd!("slotgate");
    command.args(["route", "get", "foo"]);
    command
        .assert()
        .success()
        .stdout(contains(r#""name":"GET""#).and(contains(r#""slot":289"#)));
}

#[test]
fn forbidden_command_is_marked_rejected() {
    let mut command = cargo_bin_cmd!("slotgate");
    command.args(["--output", "human", "route", "flushall"]);
    command
        .assert()
        .success()
        .stdout(contains("disposition=reject").and(contains("slot=-")));
}

#[test]
fn slot_count_flag_reaches_the_router() {
    let mut command = cargo_bin_cmd!("slotgate");
    command.env_remove("SLOTGATE_SLOT_COUNT");
    command.args(["--slot-count", "16384", "slot", "foo"]);
    command.assert().success().stdout(contains(r#""slot":9505"#));
}

#[test]
fn slot_count_is_read_from_environment() {
    let mut command = cargo_bin_cmd!("slotgate");
    command.env("SLOTGATE_SLOT_COUNT", "16384");
    command.args(["slot", "foo"]);
    command.assert().success().stdout(contains(r#""slot":9505"#));
}

#[test]
fn missing_subcommand_exits_with_failure() {
    let mut command = cargo_bin_cmd!("slotgate");
    command.assert().failure().stderr(contains("Usage"));
}

#[test]
fn empty_route_name_exits_with_failure() {
    let mut command = cargo_bin_cmd!("slotgate");
    command.args(["route", ""]);
    command
        .assert()
        .failure()
        .stderr(contains("bad command length"));
}
