//! Uninstall operations: strip our entries from settings and delete scripts

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::backup::backup_settings;
use crate::config::{
    read_settings, remove_our_hooks, write_settings, ConfigError, ConfigResult, InstallScope,
};
use crate::detect::Detection;

/// What [`clean_settings`] did to one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub backup: Option<PathBuf>,
    pub removed_hooks: bool,
    pub removed_statusline: bool,
}

impl CleanReport {
    /// Whether the file was rewritten
    #[must_use]
    pub fn changed(&self) -> bool {
        self.removed_hooks || self.removed_statusline
    }
}

/// Remove our hook groups and our statusline from a settings file.
///
/// An existing file is backed up first. The file is only rewritten when
/// something of ours was found. `hooks` is dropped when removing our groups
/// leaves it empty; `statusLine` is dropped only when it is ours.
/// Returns `None` when the file does not exist.
///
/// # Errors
/// Returns `JsonParseError` for unparseable settings (nothing is written), or
/// an I/O error from the backup or the write.
pub fn clean_settings(path: &Path) -> ConfigResult<Option<CleanReport>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut doc = read_settings(path)?;
    let mut report = CleanReport::default();

    if let Some(hooks) = doc.hooks().cloned() {
        let cleaned = remove_our_hooks(Some(&hooks));
        if cleaned != hooks {
            report.removed_hooks = true;
            if cleaned.is_empty() {
                doc.remove_hooks();
            } else {
                doc.set_hooks(cleaned);
            }
        }
    }

    if doc.has_our_statusline() {
        doc.remove_status_line();
        report.removed_statusline = true;
    }

    report.backup = backup_settings(path)?;
    if report.changed() {
        write_settings(path, &doc)?;
        debug!(path = %path.display(), "removed our settings entries");
    }
    Ok(Some(report))
}

/// Delete a script directory. Returns `false` when it was already gone.
///
/// # Errors
/// Returns an I/O error if the directory exists but cannot be removed.
pub fn remove_script_dir(dir: &Path) -> ConfigResult<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(dir).map_err(|e| ConfigError::io(dir, &e))?;
    debug!(dir = %dir.display(), "removed script directory");
    Ok(true)
}

/// Which uninstall branch a detection result leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing of ours anywhere
    Nothing,
    /// Script directories exist but no settings reference them
    ScriptsOnly,
    /// Exactly one scope references us
    Single(InstallScope),
    /// Both scopes reference us
    Multiple,
}

impl Resolution {
    /// Pick the branch for a detection result
    #[must_use]
    pub fn from_detection(detection: &Detection) -> Self {
        match detection.installed_scopes().as_slice() {
            [] if !RemovalPlan::scripts_only().script_dirs(detection).is_empty() => {
                Self::ScriptsOnly
            }
            [] => Self::Nothing,
            [scope] => Self::Single(*scope),
            _ => Self::Multiple,
        }
    }
}

/// What an uninstall run will remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPlan {
    pub scopes: Vec<InstallScope>,
    pub remove_scripts: bool,
}

impl RemovalPlan {
    /// Every scope that references us, plus the scripts
    #[must_use]
    pub fn everything(detection: &Detection) -> Self {
        Self {
            scopes: detection.installed_scopes(),
            remove_scripts: true,
        }
    }

    /// One scope out of several; scripts stay for the other
    #[must_use]
    pub fn only(scope: InstallScope) -> Self {
        Self {
            scopes: vec![scope],
            remove_scripts: false,
        }
    }

    /// Leftover script directories only
    #[must_use]
    pub fn scripts_only() -> Self {
        Self {
            scopes: Vec::new(),
            remove_scripts: true,
        }
    }

    /// Script directories this plan deletes.
    ///
    /// A scope's directory goes when the plan cleans that scope, or when its
    /// settings parsed and hold nothing of ours. Scripts beside an unreadable
    /// settings file stay: that file may still point at them.
    #[must_use]
    pub fn script_dirs(&self, detection: &Detection) -> Vec<PathBuf> {
        if !self.remove_scripts {
            return Vec::new();
        }
        [InstallScope::Global, InstallScope::Project]
            .into_iter()
            .filter(|scope| detection.has_scripts(*scope))
            .filter(|scope| {
                let status = detection.status(*scope);
                self.scopes.contains(scope) || (status.warning.is_none() && !status.is_installed())
            })
            .map(|scope| detection.target(scope).install_dir.clone())
            .collect()
    }
}
