//! `claude-glance install`: the install wizard

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use console::style;
use glance_core::config::read_settings;
use glance_core::detect::scripts_installed;
use glance_core::resolve::expand_home;
use glance_core::util::{is_plausible_project_root, tmp_base};
use glance_core::{
    install_target, ConfigError, ConfigRoot, InstallTarget, StatuslinePolicy, TargetReport,
};
use serde_json::Value;

use super::{current_project_dir, ConfigDirArgs};
use crate::assets;
use crate::prompt::{self, choose, CancelGuard, PromptError, Prompter};
use crate::ui;

/// Everything the wizard needs from the environment
#[derive(Debug, Clone)]
pub struct InstallContext {
    pub config: ConfigRoot,
    pub project_dir: PathBuf,
    pub home: Option<PathBuf>,
    pub assets: PathBuf,
    pub tmp_base: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Quick,
    Custom,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Default,
    Other,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatuslineChoice {
    Bundled,
    Custom,
    Skip,
}

/// Execute the install command against the real terminal
pub fn execute(args: &ConfigDirArgs) -> Result<()> {
    let config = args.resolve()?;
    config.ensure_exists()?;

    let ctx = InstallContext {
        config,
        project_dir: current_project_dir()?,
        home: dirs::home_dir(),
        assets: assets::locate(),
        tmp_base: tmp_base(),
    };

    let guard = CancelGuard::arm()?;
    let mut prompter = prompt::detect();
    run(prompter.as_mut(), &guard, &ctx)
}

/// The wizard: mode, targets, statusline, confirm, then install each target
pub fn run(prompter: &mut dyn Prompter, guard: &CancelGuard, ctx: &InstallContext) -> Result<()> {
    if prompter.is_rich() {
        ui::welcome();
    }

    let mode = choose(
        prompter,
        "How would you like to install claude-glance",
        &[
            ("Quick setup (project only, recommended)".to_string(), Mode::Quick),
            ("Custom setup".to_string(), Mode::Custom),
            ("Skip".to_string(), Mode::Skip),
        ],
    )?;
    println!();

    let mut warnings = Vec::new();
    let (targets, policy) = match mode {
        Mode::Skip => return Err(PromptError::Cancelled.into()),
        Mode::Quick => {
            check_project_root(ctx, &ctx.project_dir, &mut warnings);
            (vec![InstallTarget::project(&ctx.project_dir)], StatuslinePolicy::Bundled)
        }
        Mode::Custom => {
            let mut targets = Vec::new();
            if let Some(dir) = prompt_project(prompter, ctx)? {
                check_project_root(ctx, &dir, &mut warnings);
                targets.push(InstallTarget::project(&dir));
            }
            println!();
            if let Some(dir) = prompt_global(prompter, ctx)? {
                targets.push(InstallTarget::global(&dir));
            }
            println!();

            if targets.is_empty() {
                println!("\n  {} Nothing selected.\n", style("✗").yellow());
                return Ok(());
            }

            let policy = prompt_statusline(prompter, &targets)?;
            println!();
            (targets, policy)
        }
    };

    for warning in &warnings {
        ui::warning(warning);
    }
    if mode == Mode::Quick {
        ui::quick_summary(&targets[0].settings_path);
    } else {
        ui::summary_card(&targets, &policy);
    }

    prompter.pause("Press Enter to install")?;

    if targets.iter().any(|t| scripts_installed(&t.install_dir)) {
        ui::note("Updating existing installation.");
    }
    println!();

    let mut failures = Vec::new();
    for target in &targets {
        guard.checkpoint()?;
        match guard.commit(|| install_target(&ctx.assets, target, &policy, ctx.tmp_base)) {
            Ok(report) => print_report(&report),
            Err(e) => {
                ui::failure(&format!("{}: {e}", ui::scope_title(target.scope)));
                for line in e.hint() {
                    eprintln!("    {line}");
                }
                failures.push(target.scope);
            }
        }
    }
    guard.checkpoint()?;

    if !failures.is_empty() {
        bail!("{} of {} targets failed", failures.len(), targets.len());
    }

    ui::done();
    Ok(())
}

fn print_report(report: &TargetReport) {
    for path in &report.scripts.missing {
        ui::failure(&ConfigError::SourceMissing { path: path.clone() }.to_string());
    }
    ui::note("Installed at:");
    println!("  {}", report.target.settings_path.display());
    if let Some(backup) = &report.backup {
        ui::note("Backup at:");
        let name = backup.file_name().map_or_else(
            || backup.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        );
        println!("  {name}");
    }
    println!();
}

fn check_project_root(ctx: &InstallContext, dir: &Path, warnings: &mut Vec<String>) {
    if !is_plausible_project_root(dir, ctx.home.as_deref()) {
        warnings.push(format!(
            "{} does not look like a project root",
            dir.display()
        ));
    }
}

fn expand(ctx: &InstallContext, raw: &str) -> PathBuf {
    match &ctx.home {
        Some(home) => expand_home(raw, home),
        None => PathBuf::from(raw),
    }
}

/// Ask for an alternate directory; a missing one needs explicit confirmation
fn prompt_other_dir(
    prompter: &mut dyn Prompter,
    ctx: &InstallContext,
    default: &Path,
) -> Result<Option<PathBuf>> {
    let raw = prompter.input("Path", &default.display().to_string())?;
    let dir = expand(ctx, &raw);
    Ok(confirm_missing(prompter, &dir)?.then_some(dir))
}

fn confirm_missing(prompter: &mut dyn Prompter, dir: &Path) -> Result<bool> {
    if dir.exists() {
        return Ok(true);
    }
    println!();
    ui::warning(&ConfigError::PathNotFound(dir.to_path_buf()).to_string());
    Ok(prompter.confirm("Continue anyway?", false)?)
}

fn prompt_project(prompter: &mut dyn Prompter, ctx: &InstallContext) -> Result<Option<PathBuf>> {
    println!();
    ui::section("Project");
    ui::note("Hooks & scripts in .claude/ ─ this project only.");
    ui::note("Overrides global when both are installed.");

    let choice = choose(
        prompter,
        "Install for project?",
        &[
            (
                format!("Yes, current directory ({})", ctx.project_dir.display()),
                Location::Default,
            ),
            ("Yes, different directory".to_string(), Location::Other),
            ("Skip".to_string(), Location::Skip),
        ],
    )?;

    match choice {
        Location::Default => Ok(Some(ctx.project_dir.clone())),
        Location::Skip => Ok(None),
        Location::Other => prompt_other_dir(prompter, ctx, &ctx.project_dir),
    }
}

fn prompt_global(prompter: &mut dyn Prompter, ctx: &InstallContext) -> Result<Option<PathBuf>> {
    println!();
    ui::section("Global");
    ui::note("Hooks & scripts in ~/.claude/ ─ all projects.");
    ui::note("Project-specific settings may override.");

    let choice = choose(
        prompter,
        "Install for global?",
        &[
            (
                format!("Yes, default path ({})", ctx.config.settings_path().display()),
                Location::Default,
            ),
            ("Yes, different directory".to_string(), Location::Other),
            ("Skip".to_string(), Location::Skip),
        ],
    )?;

    match choice {
        Location::Default => Ok(Some(ctx.config.path.clone())),
        Location::Skip => Ok(None),
        Location::Other => prompt_other_dir(prompter, ctx, &ctx.config.path),
    }
}

/// First existing statusline among the selected targets
fn existing_statusline(targets: &[InstallTarget]) -> Option<Value> {
    targets.iter().find_map(|target| {
        read_settings(&target.settings_path)
            .ok()
            .and_then(|doc| doc.status_line().cloned())
    })
}

fn prompt_statusline(
    prompter: &mut dyn Prompter,
    targets: &[InstallTarget],
) -> Result<StatuslinePolicy> {
    println!();
    ui::section("Statusline");

    if prompter.is_rich() {
        ui::note("Replaces your statusline with:");
        println!();
        ui::statusline_preview();
        println!();
    }

    if let Some(existing) = existing_statusline(targets) {
        ui::warning("Existing statusline detected");
        ui::note(&existing.to_string());
        println!();
    }

    let choice = choose(
        prompter,
        "Statusline:",
        &[
            ("Install claude-glance statusline".to_string(), StatuslineChoice::Bundled),
            ("Use custom script".to_string(), StatuslineChoice::Custom),
            ("Skip (hooks still work)".to_string(), StatuslineChoice::Skip),
        ],
    )?;

    Ok(match choice {
        StatuslineChoice::Bundled => StatuslinePolicy::Bundled,
        StatuslineChoice::Custom => {
            let command = prompter.input("Script path", "")?;
            println!();
            ui::note("Summary is at {scratchpad}/session-summary.txt");
            ui::note("Read it from your script to include it.");
            StatuslinePolicy::Custom(command)
        }
        StatuslineChoice::Skip => {
            println!();
            ui::note("Summary maintained at {scratchpad}/session-summary.txt");
            StatuslinePolicy::Skip
        }
    })
}
