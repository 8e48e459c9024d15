//! Integration tests for configuration handling (CLI)

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::temp_config;

fn errlines() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_errlines"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_show_prints_defaults_for_empty_file() {
    let (_dir, path) = temp_config("");
    errlines()
        .env("ERRLINES_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("fallback_on_empty = true"))
        .stdout(predicate::str::contains("format = \"plain\""));
}

#[test]
fn config_path_honours_flag() {
    let (_dir, path) = temp_config("");
    errlines()
        .arg("config")
        .arg("path")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}\n", path.display()));
}

#[test]
fn config_flag_takes_precedence_over_env() {
    let (_env_dir, env_path) = temp_config("[output]\nprefix = \"env \"\n");
    let (_flag_dir, flag_path) = temp_config("[output]\nprefix = \"flag \"\n");
    errlines()
        .env("ERRLINES_CONFIG", &env_path)
        .arg("--config")
        .arg(&flag_path)
        .arg("extract")
        .write_stdin("1 error occurred:\n* Error: boom\n")
        .assert()
        .success()
        .stdout("flag boom\n");
}

#[test]
fn config_format_json_applies_to_extract() {
    let (_dir, path) = temp_config("[output]\nformat = \"json\"\n");
    errlines()
        .env("ERRLINES_CONFIG", &path)
        .arg("extract")
        .write_stdin("plain message\n")
        .assert()
        .success()
        .stdout("[\"plain message\"]\n");
}

#[test]
fn config_can_disable_fallback() {
    let (_dir, path) = temp_config("[output]\nfallback_on_empty = false\n");
    errlines()
        .env("ERRLINES_CONFIG", &path)
        .arg("extract")
        .write_stdin("failed with an unhandled exception\nVisibleError\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_config_file_exits_1() {
    errlines()
        .env("ERRLINES_CONFIG", "/nonexistent/errlines/config.toml")
        .arg("extract")
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_exits_1() {
    let (_dir, path) = temp_config("[output\n");
    errlines()
        .env("ERRLINES_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let (_dir, path) = temp_config("");
    errlines()
        .env("ERRLINES_CONFIG", &path)
        .args(["extract", "-v"])
        .write_stdin("1 error occurred:\n* Error: boom\n")
        .assert()
        .success()
        .stdout("boom\n")
        .stderr(predicate::str::contains("extracted diagnostic lines"));
}
