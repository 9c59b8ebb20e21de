//! `claude-glance uninstall`: remove hooks, statusline and scripts

use std::path::Path;

use anyhow::{bail, Result};
use console::style;
use glance_core::uninstall::remove_script_dir;
use glance_core::{
    clean_settings, detect_installations, Detection, InstallScope, RemovalPlan, Resolution,
};

use super::{current_project_dir, ConfigDirArgs};
use crate::prompt::{self, choose, CancelGuard, PromptError, Prompter};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Everything,
    Only(InstallScope),
    Cancel,
}

/// Execute the uninstall command against the real terminal
pub fn execute(args: &ConfigDirArgs) -> Result<()> {
    let config = args.resolve()?;
    let project_dir = current_project_dir()?;

    let guard = CancelGuard::arm()?;
    let mut prompter = prompt::detect();
    run(prompter.as_mut(), &guard, &config.path, &project_dir)
}

/// Detect, pick what to remove, confirm, then clean settings and scripts
pub fn run(
    prompter: &mut dyn Prompter,
    guard: &CancelGuard,
    config_dir: &Path,
    project_dir: &Path,
) -> Result<()> {
    println!("{}", style("\nclaude-glance uninstaller\n").bold());

    let detection = detect_installations(config_dir, project_dir);
    for warning in detection.warnings() {
        ui::warning(warning);
    }

    let plan = match Resolution::from_detection(&detection) {
        Resolution::Nothing => {
            ui::note("Nothing to uninstall.");
            println!();
            return Ok(());
        }
        Resolution::Multiple => {
            let found: Vec<String> = detection
                .installed_scopes()
                .iter()
                .map(|scope| style(scope).cyan().to_string())
                .collect();
            println!("  Found in: {}\n", found.join(", "));

            let choice = choose(
                prompter,
                "What would you like to remove?",
                &[
                    ("Everything".to_string(), Removal::Everything),
                    ("Global only".to_string(), Removal::Only(InstallScope::Global)),
                    ("Project only".to_string(), Removal::Only(InstallScope::Project)),
                    ("Cancel".to_string(), Removal::Cancel),
                ],
            )?;
            match choice {
                Removal::Everything => RemovalPlan::everything(&detection),
                Removal::Only(scope) => RemovalPlan::only(scope),
                Removal::Cancel => return Err(PromptError::Cancelled.into()),
            }
        }
        Resolution::Single(scope) => {
            println!(
                "  Found in: {} ({})\n",
                style(scope).cyan(),
                detection.target(scope).settings_path.display()
            );
            prompter.pause("Press Enter to remove claude-glance")?;
            RemovalPlan::everything(&detection)
        }
        Resolution::ScriptsOnly => {
            let plan = RemovalPlan::scripts_only();
            let dirs: Vec<String> = plan
                .script_dirs(&detection)
                .iter()
                .map(|d| style(d.display()).dim().to_string())
                .collect();
            println!(
                "  Scripts found at {} but no hooks in settings.\n",
                dirs.join(", ")
            );
            prompter.pause("Press Enter to remove leftover scripts")?;
            plan
        }
    };

    execute_plan(guard, &plan, &detection)?;
    ui::done();
    Ok(())
}

/// Apply a removal plan.
///
/// Scripts are only deleted once every planned settings file is clean, so a
/// settings file is never left pointing at removed scripts.
fn execute_plan(guard: &CancelGuard, plan: &RemovalPlan, detection: &Detection) -> Result<()> {
    let mut failures = 0;

    for scope in &plan.scopes {
        guard.checkpoint()?;
        let path = &detection.target(*scope).settings_path;
        match guard.commit(|| clean_settings(path)) {
            Ok(Some(report)) => {
                if let Some(backup) = &report.backup {
                    ui::note(&format!("Backup: {}", file_name(backup)));
                }
                if report.removed_hooks {
                    ui::removed(&format!("Removed hooks from {}", style(path.display()).dim()));
                }
                if report.removed_statusline {
                    ui::removed(&format!(
                        "Removed statusline from {}",
                        style(path.display()).dim()
                    ));
                }
            }
            Ok(None) => {}
            Err(e) => {
                ui::failure(&e.to_string());
                for line in e.hint() {
                    eprintln!("    {line}");
                }
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ui::warning("Scripts left in place; the settings above still reference them.");
        bail!("Failed to clean {failures} settings file(s)");
    }

    for dir in plan.script_dirs(detection) {
        guard.checkpoint()?;
        if guard.commit(|| remove_script_dir(&dir))? {
            ui::removed(&format!("Removed {}", style(dir.display()).dim()));
        }
    }
    guard.checkpoint()?;

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string())
}
