//! CLI tests driving the built `ukconf` binary.

use super::test_utils::Workdir;
use std::process::{Command, Output};

fn ukconf(workdir: &Workdir, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_ukconf");
    Command::new(bin)
        .env("XDG_CONFIG_HOME", workdir.dir.path().join("xdg"))
        .env("HOME", workdir.dir.path().join("home"))
        .env_remove("UKCONF_LOG")
        .arg("--non-interactive")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_cli_unset_updates_dotconfig() {
    let workdir = Workdir::with_dotconfig("LIBDEVFS_DEV_STDOUT=y\nLWIP_TCP_SND_BUF=2048\n");
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(
        &workdir,
        &["unset", "-w", &dir, "LIBDEVFS_DEV_STDOUT", "LWIP_TCP_SND_BUF"],
    );

    assert!(
        output.status.success(),
        "unset should succeed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(workdir.read(), "LIBDEVFS_DEV_STDOUT=n\nLWIP_TCP_SND_BUF=n\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("~ LIBDEVFS_DEV_STDOUT: y -> n"));
    assert!(stdout.contains("~ LWIP_TCP_SND_BUF: 2048 -> n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEPRECATED"));
}

#[test]
fn test_cli_alias_and_dry_run_json() {
    let workdir = Workdir::with_dotconfig("FOO=y\n");
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(
        &workdir,
        &["u", "-w", &dir, "--dry-run", "--format", "json", "FOO", "BAR"],
    );

    assert!(output.status.success());
    assert_eq!(workdir.read(), "FOO=y\n");
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["committed"], false);
    assert_eq!(report["changes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_missing_dotconfig_fails() {
    let workdir = Workdir::empty();
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(&workdir, &["unset", "-w", &dir, "FOO"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dotconfig file does not exist"), "stderr={}", stderr);
    assert!(!workdir.dotconfig().exists());
}

#[test]
fn test_cli_no_options_fails() {
    let workdir = Workdir::with_dotconfig("FOO=y\n");
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(&workdir, &["unset", "-w", &dir]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no options given"));
    assert_eq!(workdir.read(), "FOO=y\n");
}

#[test]
fn test_cli_set_requires_assignment() {
    let workdir = Workdir::with_dotconfig("FOO=y\n");
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(&workdir, &["set", "-w", &dir, "FOO"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected NAME=VALUE"));
}

#[test]
fn test_cli_diagnostics_printed_once() {
    let workdir = Workdir::with_dotconfig("FOO=y\nFOO=y\n");
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(&workdir, &["unset", "-w", &dir, "FOO"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("DEPRECATED").count(), 1, "stderr={}", stderr);
    assert_eq!(
        stderr.matches("is overridden by line 2").count(),
        1,
        "stderr={}",
        stderr
    );
    assert!(!stderr.contains('\u{1b}'), "piped stderr must not carry ANSI codes");
}

#[test]
fn test_cli_piped_logs_are_plain_text() {
    let workdir = Workdir::with_dotconfig("FOO=y\n");
    let dir = workdir.dir.path().to_string_lossy().into_owned();

    let output = ukconf(&workdir, &["--log-level", "debug", "set", "-w", &dir, "FOO=n"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Committed dotconfig"), "stderr={}", stderr);
    assert!(!stderr.contains('\u{1b}'), "stderr={:?}", stderr);
}
