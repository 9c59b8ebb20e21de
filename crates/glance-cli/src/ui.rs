//! Terminal drawing for the wizards and the status report

use std::path::Path;

use console::style;
use glance_core::{InstallScope, InstallTarget, StatuslinePolicy};

/// Sample statusline cells: text, legend label, legend description, width
const PREVIEW_COLS: &[(&str, &str, &str, usize)] = &[
    ("anthropic.com", "domain", "Provider's API endpoint", 13),
    ("project", "folder", "Where Claude was launched", 7),
    ("main", "branch", "Git branch", 4),
    ("23%", "ctx%", "Context used", 3),
    ("3:42pm Feb 8", "time", "User's last activity", 11),
    ("+189 -128", "diff", "Git changes", 9),
];

const PREVIEW_SUMMARY: &str = "▸ User auth, API, bug fixes";

fn preview_cell(index: usize, text: &str, width: usize) -> String {
    let padded = format!("{text:<width$}");
    match index {
        0 | 4 => style(padded).dim().to_string(),
        1 => style(padded).green().to_string(),
        2 => style(padded).magenta().to_string(),
        3 => style(padded).cyan().to_string(),
        _ => {
            let (plus, minus) = text.split_once(' ').unwrap_or((text, ""));
            let pad = width.saturating_sub(text.len());
            format!("{} {}{}", style(plus).green(), style(minus).red(), " ".repeat(pad))
        }
    }
}

fn preview_line() -> String {
    let sep = style(" │ ").dim().to_string();
    PREVIEW_COLS
        .iter()
        .enumerate()
        .map(|(i, (text, _, _, width))| preview_cell(i, text, *width))
        .collect::<Vec<_>>()
        .join(&sep)
}

/// Sample of the bundled statusline
pub fn statusline_preview() {
    println!("    {}", preview_line());
    println!("    {}", style(PREVIEW_SUMMARY).yellow());
}

/// Welcome screen with a statusline mockup and its legend
pub fn welcome() {
    let width = PREVIEW_COLS.iter().map(|c| c.3).sum::<usize>() + (PREVIEW_COLS.len() - 1) * 3 + 1;
    let rule = style("─".repeat(width)).dim();

    println!();
    println!(
        "    {} {}",
        style("claude-glance").bold(),
        style("─ your sessions, at a glance.").dim()
    );
    println!();
    println!("    {rule}");
    println!("    {} ", style("❯").cyan());
    println!("    {rule}");
    statusline_preview();
    println!("    {}", style("▸▸ accept edits on").magenta());
    println!();
    println!("    {}", style("Legend:").dim());
    println!();
    for (_, label, desc, _) in PREVIEW_COLS {
        println!("      {}{}", style(format!("{label:<14}")).italic(), style(desc).dim().italic());
    }
    println!(
        "      {}{}",
        style(format!("{:<14}", "▸ summary")).yellow().italic(),
        style("Auto-updated session summary").dim().italic()
    );
    println!();
}

/// Section header: `─── Title ─────────`
pub fn section(title: &str) {
    const TOTAL_WIDTH: usize = 41;
    let remaining = TOTAL_WIDTH.saturating_sub(4 + title.chars().count() + 1).max(3);
    println!(
        "  {}{} {}",
        style("─── ").dim(),
        style(title).bold(),
        style("─".repeat(remaining)).dim()
    );
    println!();
}

/// Quick mode confirmation text
pub fn quick_summary(settings_path: &Path) {
    println!();
    println!("  {}", style("Installing to:").dim());
    println!("  {}", style(settings_path.display()).cyan());
    println!("  {}", style("with hooks + statusline").dim());
    println!();
}

/// Custom mode confirmation card
pub fn summary_card(targets: &[InstallTarget], policy: &StatuslinePolicy) {
    println!();
    println!("  {}  {}", style("◆").cyan(), style("claude-glance").bold());
    println!();
    for target in targets {
        println!(
            "  {} {} {}",
            style("✓").green(),
            scope_title(target.scope),
            style(target.settings_path.display()).dim()
        );
    }
    match policy {
        StatuslinePolicy::Skip => {
            println!("  {} Statusline {}", style("○").dim(), style("skipped").dim());
        }
        other => {
            println!("  {} Statusline {}", style("✓").green(), style(other.label()).dim());
        }
    }
    println!();
}

/// Capitalized scope name
pub fn scope_title(scope: InstallScope) -> &'static str {
    scope.label()
}

pub fn warning(message: &str) {
    println!("  {} {message}", style("!").yellow());
}

pub fn failure(message: &str) {
    eprintln!("  {} {message}", style("✗").red());
}

pub fn removed(what: &str) {
    println!("{} {what}", style("-").green());
}

pub fn note(message: &str) {
    println!("  {}", style(message).dim());
}

pub fn done() {
    println!();
    println!(
        "  {} {} {}",
        style("✓").green(),
        style("Done").bold(),
        style("─ Claude Code will detect it automatically.").dim()
    );
    println!();
}

/// `[ok]` / `[--]` status marker
pub fn indicator(ok: bool) -> String {
    if ok {
        style("[ok]").green().to_string()
    } else {
        style("[--]").dim().to_string()
    }
}
