//! `claude-glance update <summary> <session_id>`
//!
//! Runs the bundled update script with the temp path adjusted for this OS and
//! exits with the script's status.

use std::fs;
use std::process::Command;

use anyhow::{Context, Result};
use glance_core::install::{normalize_tmp_paths, UPDATE_SCRIPT};
use glance_core::util::{join_within, tmp_base};
use tracing::debug;

use crate::assets;

pub const USAGE: &str = "Usage: claude-glance update <summary> <session_id>";

/// Both arguments, when present and non-empty
fn required<'a>(
    summary: Option<&'a str>,
    session_id: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    match (summary, session_id) {
        (Some(s), Some(id)) if !s.is_empty() && !id.is_empty() => Some((s, id)),
        _ => None,
    }
}

/// Execute the update command; returns the process exit code
pub fn execute(summary: Option<&str>, session_id: Option<&str>) -> Result<i32> {
    let Some((summary, session_id)) = required(summary, session_id) else {
        eprintln!("{USAGE}");
        return Ok(1);
    };

    let script = join_within(&assets::locate(), UPDATE_SCRIPT)?;
    let body = fs::read_to_string(&script)
        .with_context(|| format!("Failed to read {}", script.display()))?;
    let body = normalize_tmp_paths(&body, tmp_base());

    debug!(script = %script.display(), "running update script");
    // bash -c <body> <$0> <$1> <$2>
    let status = Command::new("bash")
        .arg("-c")
        .arg(body)
        .arg(script.as_os_str())
        .arg(summary)
        .arg(session_id)
        .status()
        .context("Failed to run bash")?;

    Ok(status.code().unwrap_or(1))
}
