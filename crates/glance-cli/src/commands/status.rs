//! `claude-glance status`: read-only installation report

use std::path::Path;

use anyhow::Result;
use console::style;
use glance_core::{detect_installations, Detection, ScopeStatus};

use super::{current_project_dir, ConfigDirArgs};
use crate::ui;

/// Execute the status command
pub fn execute(args: &ConfigDirArgs) -> Result<()> {
    let config = args.resolve()?;
    let project_dir = current_project_dir()?;
    let detection = detect_installations(&config.path, &project_dir);
    print!("{}", render(&detection));
    Ok(())
}

fn scope_lines(out: &mut String, title: &str, settings: &Path, status: &ScopeStatus) {
    out.push_str(&format!(
        "\n  {} {}\n",
        style(title).bold(),
        style(format!("({})", settings.display())).dim()
    ));
    out.push_str(&format!("    {} Hooks configured\n", ui::indicator(status.hooks)));
    out.push_str(&format!(
        "    {} Statusline configured\n",
        ui::indicator(status.statusline)
    ));
    if let Some(warning) = &status.warning {
        out.push_str(&format!("    {} {warning}\n", style("!").yellow()));
    }
}

/// The full report as printed
pub fn render(detection: &Detection) -> String {
    let mut out = format!("{}\n\n", style("\nclaude-glance status").bold());

    let scripts_dir = detection
        .script_dirs()
        .into_iter()
        .next()
        .unwrap_or_else(|| detection.global_target.install_dir.clone());
    out.push_str(&format!(
        "  {} Scripts installed {}\n",
        ui::indicator(detection.scripts_exist()),
        style(format!("({})", scripts_dir.join("scripts").display())).dim()
    ));

    scope_lines(
        &mut out,
        "Global",
        &detection.global_target.settings_path,
        &detection.global,
    );
    scope_lines(
        &mut out,
        "Project",
        &detection.project_target.settings_path,
        &detection.project,
    );
    out.push('\n');
    out
}
