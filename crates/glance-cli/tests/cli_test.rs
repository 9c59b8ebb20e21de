//! CLI integration tests using assert_cmd
//!
//! These drive the `claude-glance` binary end to end. Stdin is a pipe, so the
//! wizards run with the numbered line prompter.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Get a command instance for the claude-glance binary
fn glance_cmd() -> Command {
    let mut cmd = Command::cargo_bin("claude-glance").expect("Failed to find claude-glance binary");
    cmd.env_remove("CLAUDE_CONFIG_DIR")
        .env_remove("CLAUDE_GLANCE_LOG")
        .env("CLAUDE_GLANCE_ASSETS", ASSETS);
    cmd
}

/// A home with a Claude config root and a git project inside it
struct Sandbox {
    _root: TempDir,
    home: PathBuf,
    config: PathBuf,
    project: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let home = root.path().join("home");
        let config = home.join(".claude");
        let project = home.join("work").join("app");
        fs::create_dir_all(&config).unwrap();
        fs::create_dir_all(project.join(".git")).unwrap();
        Self {
            _root: root,
            home,
            config,
            project,
        }
    }

    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = glance_cmd();
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .args(args);
        cmd
    }

    fn config_flag(&self) -> String {
        self.config.display().to_string()
    }

    fn project_settings(&self) -> PathBuf {
        self.project.join(".claude").join("settings.local.json")
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_command() {
    glance_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "At-a-glance session summary for Claude Code",
        ))
        .stdout(predicate::str::contains("Interactive installer"))
        .stdout(predicate::str::contains("parse-json").not());
}

#[test]
fn test_no_command_prints_help() {
    glance_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_command() {
    glance_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-glance"));
}

#[test]
fn test_unknown_command_fails() {
    glance_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_install_without_config_root() {
    let sandbox = Sandbox::new();
    let missing = sandbox.home.join("nowhere");

    sandbox
        .cmd(&["install", "--config-dir", &missing.display().to_string()])
        .write_stdin("1\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Claude config not found"))
        .stderr(predicate::str::contains("Run \"claude\" first"));

    assert!(!sandbox.project.join(".claude").exists());
    assert!(!missing.exists());
}

#[test]
fn test_install_with_missing_env_config_root_mentions_variable() {
    let sandbox = Sandbox::new();
    let missing = sandbox.home.join("alt-claude");

    sandbox
        .cmd(&["install"])
        .env("CLAUDE_CONFIG_DIR", &missing)
        .write_stdin("1\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CLAUDE_CONFIG_DIR="));
}

#[test]
fn test_quick_install() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd(&["install", "--config-dir", &sandbox.config_flag()])
        .write_stdin("1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done"));

    let settings = read_json(&sandbox.project_settings());
    let install_dir = sandbox.project.join(".claude").join("session-summary");
    let hook = settings["hooks"]["SessionStart"][0]["hooks"][0]["command"]
        .as_str()
        .unwrap();
    assert!(hook.contains(&install_dir.display().to_string()));
    assert_eq!(settings["hooks"]["SessionStart"][0]["hooks"][0]["timeout"], 5000);
    assert!(settings["statusLine"]["command"]
        .as_str()
        .unwrap()
        .contains(&install_dir.display().to_string()));

    for relative in [
        "scripts/statusline.sh",
        "scripts/session-start.sh",
        "scripts/update-summary.sh",
        "lib/parse-json.sh",
    ] {
        let path = install_dir.join(relative);
        assert!(path.is_file(), "{relative} not installed");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o755);
        }
    }
    assert!(!sandbox.config.join("settings.json").exists());
}

#[test]
fn test_install_twice_adds_one_backup() {
    let sandbox = Sandbox::new();
    let flag = sandbox.config_flag();

    sandbox
        .cmd(&["install", "--config-dir", &flag])
        .write_stdin("1\n\n")
        .assert()
        .success();
    let first = read_json(&sandbox.project_settings());

    sandbox
        .cmd(&["install", "--config-dir", &flag])
        .write_stdin("1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating existing installation."))
        .stdout(predicate::str::contains("Backup at:"));
    let second = read_json(&sandbox.project_settings());

    assert_eq!(first, second);
    let backups = fs::read_dir(sandbox.project.join(".claude"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("settings.local.json.bak."))
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn test_install_cancelled_on_end_of_input() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd(&["install", "--config-dir", &sandbox.config_flag()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(!sandbox.project.join(".claude").exists());
}

#[test]
fn test_status_reports_installation() {
    let sandbox = Sandbox::new();
    let flag = sandbox.config_flag();

    sandbox
        .cmd(&["status", "--config-dir", &flag])
        .assert()
        .success()
        .stdout(predicate::str::contains("[--] Scripts installed"));

    sandbox
        .cmd(&["install", "--config-dir", &flag])
        .write_stdin("1\n\n")
        .assert()
        .success();

    sandbox
        .cmd(&["status", "--config-dir", &flag])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ok] Scripts installed"))
        .stdout(predicate::str::contains("[ok] Hooks configured"))
        .stdout(predicate::str::contains(
            sandbox.project_settings().display().to_string(),
        ));
}

#[test]
fn test_uninstall_after_quick_install() {
    let sandbox = Sandbox::new();
    let flag = sandbox.config_flag();

    sandbox
        .cmd(&["install", "--config-dir", &flag])
        .write_stdin("1\n\n")
        .assert()
        .success();

    sandbox
        .cmd(&["uninstall", "--config-dir", &flag])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed hooks from"))
        .stdout(predicate::str::contains("Removed statusline from"));

    let settings = read_json(&sandbox.project_settings());
    assert!(settings.get("hooks").is_none());
    assert!(settings.get("statusLine").is_none());
    assert!(!sandbox.project.join(".claude").join("session-summary").exists());
}

#[test]
fn test_uninstall_nothing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd(&["uninstall", "--config-dir", &sandbox.config_flag()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to uninstall."));
}

#[test]
fn test_update_requires_both_arguments() {
    glance_cmd()
        .args(["update", "only a summary"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: claude-glance update <summary> <session_id>",
        ));
}

#[test]
fn test_update_writes_summary() {
    let session = format!("cli-test-{}", std::process::id());
    let base = if cfg!(target_os = "macos") {
        "/private/tmp"
    } else {
        "/tmp"
    };
    let scratchpad = Path::new(base).join("claude-glance").join(&session);

    glance_cmd()
        .args(["update", "Wire up auth flow", &session])
        .assert()
        .success();

    let summary = fs::read_to_string(scratchpad.join("session-summary.txt")).unwrap();
    assert_eq!(summary.trim(), "Wire up auth flow");
    let _ = fs::remove_dir_all(&scratchpad);
}

#[test]
fn test_parse_json() {
    glance_cmd()
        .args(["parse-json", "session_id", "workspace.current_dir", "missing"])
        .write_stdin(r#"{"session_id":"abc","workspace":{"current_dir":"/w"}}"#)
        .assert()
        .success()
        .stdout("abc\n/w\n\n");
}

#[test]
fn test_parse_json_invalid_input() {
    glance_cmd()
        .args(["parse-json", "a", "b"])
        .write_stdin("not json")
        .assert()
        .success()
        .stdout("\n\n");
}
