//! Install/uninstall flow tests
//!
//! Drives the engine end to end on real temp directories: install into a
//! project, install again, then uninstall, checking the settings document,
//! the script directory and the backups at each step.

use std::fs;
use std::path::Path;

use glance_core::backup::list_backups;
use glance_core::config::read_settings;
use glance_core::install::{SCRIPTS, SESSION_START_SCRIPT, STATUSLINE_SCRIPT};
use glance_core::uninstall::remove_script_dir;
use glance_core::{
    clean_settings, detect_installations, install_target, InstallTarget, RemovalPlan, Resolution,
    StatuslinePolicy,
};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Write a fake assets tree holding every manifest script
fn create_assets(root: &Path) {
    for relative in SCRIPTS {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create assets dir");
        fs::write(&path, "#!/bin/bash\ncat /private/tmp/claude-glance/x\n")
            .expect("Failed to write asset");
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_quick_install_on_fresh_project() {
    let assets = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    create_assets(assets.path());

    let target = InstallTarget::project(project.path());
    let report =
        install_target(assets.path(), &target, &StatuslinePolicy::Bundled, "/tmp").unwrap();
    assert!(report.backup.is_none());
    assert_eq!(report.scripts.copied.len(), SCRIPTS.len());

    let settings = read_json(&project.path().join(".claude/settings.local.json"));
    let install_dir = project.path().join(".claude/session-summary");
    assert_eq!(
        settings["hooks"]["SessionStart"][0]["hooks"][0]["command"],
        format!("bash '{}'", install_dir.join(SESSION_START_SCRIPT).display())
    );
    assert_eq!(
        settings["statusLine"]["command"],
        format!("bash '{}'", install_dir.join(STATUSLINE_SCRIPT).display())
    );
    for relative in SCRIPTS {
        assert!(install_dir.join(relative).is_file(), "{relative} not copied");
    }
}

#[test]
fn test_install_twice_is_stable_and_backs_up_once_more() {
    let assets = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    create_assets(assets.path());

    let target = InstallTarget::global(config.path());
    fs::write(
        &target.settings_path,
        "{\"permissions\": {\"allow\": []}, \"hooks\": {\"Stop\": []}}\n",
    )
    .unwrap();

    install_target(assets.path(), &target, &StatuslinePolicy::Bundled, "/tmp").unwrap();
    let first = read_json(&target.settings_path);
    let backups_after_first = list_backups(&target.settings_path).len();

    install_target(assets.path(), &target, &StatuslinePolicy::Bundled, "/tmp").unwrap();
    let second = read_json(&target.settings_path);

    assert_eq!(first, second);
    assert_eq!(backups_after_first, 1);
    assert_eq!(list_backups(&target.settings_path).len(), 2);
    assert_eq!(first["permissions"], json!({"allow": []}));
}

#[test]
fn test_uninstall_after_quick_install() {
    let assets = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    create_assets(assets.path());

    let target = InstallTarget::project(project.path());
    install_target(assets.path(), &target, &StatuslinePolicy::Bundled, "/tmp").unwrap();
    let installed = fs::read_to_string(&target.settings_path).unwrap();

    let detection = detect_installations(config.path(), project.path());
    let Resolution::Single(scope) = Resolution::from_detection(&detection) else {
        panic!("expected a single installed scope");
    };
    let plan = RemovalPlan::everything(&detection);
    assert_eq!(plan.scopes, vec![scope]);

    let report = clean_settings(&detection.target(scope).settings_path)
        .unwrap()
        .unwrap();
    for dir in plan.script_dirs(&detection) {
        assert!(remove_script_dir(&dir).unwrap());
    }

    let doc = read_settings(&target.settings_path).unwrap();
    assert!(doc.get("hooks").is_none());
    assert!(doc.status_line().is_none());
    assert!(!target.install_dir.exists());

    let backup = report.backup.expect("pre-removal backup");
    assert_eq!(fs::read_to_string(backup).unwrap(), installed);

    let after = detect_installations(config.path(), project.path());
    assert_eq!(Resolution::from_detection(&after), Resolution::Nothing);
}

#[test]
fn test_unparseable_settings_fail_without_writing() {
    let assets = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    create_assets(assets.path());

    let target = InstallTarget::global(config.path());
    fs::write(&target.settings_path, "{ broken").unwrap();

    let err = install_target(assets.path(), &target, &StatuslinePolicy::Bundled, "/tmp")
        .unwrap_err();
    assert_eq!(err.code(), "PARSE_ERROR");
    assert_eq!(fs::read_to_string(&target.settings_path).unwrap(), "{ broken");
    assert!(list_backups(&target.settings_path).is_empty());
}
