//! Sibling backups of settings files taken before every mutation

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::{ConfigError, ConfigResult};

/// Timestamp layout used in backup names (second resolution, no colons)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Backup name for `path` taken at `at`: `{name}.bak.{timestamp}`
#[must_use]
pub fn backup_path_for(path: &Path, at: DateTime<Utc>) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "settings".to_string(), |n| n.to_string_lossy().to_string());
    let backup_name = format!("{}.bak.{}", file_name, at.format(TIMESTAMP_FORMAT));
    path.with_file_name(backup_name)
}

/// Copy `path` to a timestamped sibling if it exists.
///
/// Returns the backup path, or `None` when there was nothing to back up.
/// Backups are never overwritten: a second backup within the same second
/// gets a numeric suffix.
///
/// # Errors
/// Returns `BackupFailed` if the copy fails.
pub fn backup_settings(path: &Path) -> ConfigResult<Option<PathBuf>> {
    backup_settings_at(path, Utc::now())
}

/// [`backup_settings`] with an explicit clock
///
/// # Errors
/// Returns `BackupFailed` if the copy fails.
pub fn backup_settings_at(path: &Path, at: DateTime<Utc>) -> ConfigResult<Option<PathBuf>> {
    if !path.is_file() {
        return Ok(None);
    }

    let base = backup_path_for(path, at);
    let mut candidate = base.clone();
    let mut n = 0u32;
    while candidate.exists() {
        n += 1;
        candidate = PathBuf::from(format!("{}.{n}", base.display()));
    }

    fs::copy(path, &candidate).map_err(|e| {
        ConfigError::BackupFailed(format!("Failed to backup {}: {}", path.display(), e))
    })?;
    debug!(from = %path.display(), to = %candidate.display(), "backed up settings");
    Ok(Some(candidate))
}

/// List backups that exist for `path`, oldest name first
#[must_use]
pub fn list_backups(path: &Path) -> Vec<PathBuf> {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Vec::new();
    };
    let prefix = format!("{}.bak.", name.to_string_lossy());
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut backups: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| {
            p.file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with(&prefix))
        })
        .collect();
    backups.sort();
    backups
}
