//! Installation detection
//!
//! Inspects both settings documents and both script directories without
//! writing anything. An unreadable settings file counts as "not installed" for
//! its scope and is reported as a warning.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::{read_settings, InstallScope};
use crate::install::SESSION_START_SCRIPT;
use crate::resolve::InstallTarget;

/// What one settings document holds of ours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStatus {
    pub hooks: bool,
    pub statusline: bool,
    /// Set when the settings file could not be read
    pub warning: Option<String>,
}

impl ScopeStatus {
    /// Whether anything in this scope belongs to us
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.hooks || self.statusline
    }
}

/// Check one settings file for our hooks and statusline
#[must_use]
pub fn check_settings(path: &Path) -> ScopeStatus {
    match read_settings(path) {
        Ok(doc) => ScopeStatus {
            hooks: doc.has_our_session_hook(),
            statusline: doc.has_our_statusline(),
            warning: None,
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read settings");
            ScopeStatus {
                warning: Some(e.to_string()),
                ..ScopeStatus::default()
            }
        }
    }
}

/// Whether a target's session-start script is on disk
#[must_use]
pub fn scripts_installed(install_dir: &Path) -> bool {
    install_dir.join(SESSION_START_SCRIPT).is_file()
}

/// Full picture of both scopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub global_target: InstallTarget,
    pub project_target: InstallTarget,
    pub global: ScopeStatus,
    pub project: ScopeStatus,
    pub global_scripts: bool,
    pub project_scripts: bool,
}

impl Detection {
    /// Whether any script directory exists
    #[must_use]
    pub fn scripts_exist(&self) -> bool {
        self.global_scripts || self.project_scripts
    }

    /// Scopes whose settings reference us, global first
    #[must_use]
    pub fn installed_scopes(&self) -> Vec<InstallScope> {
        let mut scopes = Vec::new();
        if self.global.is_installed() {
            scopes.push(InstallScope::Global);
        }
        if self.project.is_installed() {
            scopes.push(InstallScope::Project);
        }
        scopes
    }

    /// Target for a scope
    #[must_use]
    pub fn target(&self, scope: InstallScope) -> &InstallTarget {
        match scope {
            InstallScope::Global => &self.global_target,
            InstallScope::Project => &self.project_target,
        }
    }

    /// Settings status for a scope
    #[must_use]
    pub fn status(&self, scope: InstallScope) -> &ScopeStatus {
        match scope {
            InstallScope::Global => &self.global,
            InstallScope::Project => &self.project,
        }
    }

    /// Whether a scope's script directory is on disk
    #[must_use]
    pub fn has_scripts(&self, scope: InstallScope) -> bool {
        match scope {
            InstallScope::Global => self.global_scripts,
            InstallScope::Project => self.project_scripts,
        }
    }

    /// Script directories that exist on disk
    #[must_use]
    pub fn script_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if self.global_scripts {
            dirs.push(self.global_target.install_dir.clone());
        }
        if self.project_scripts {
            dirs.push(self.project_target.install_dir.clone());
        }
        dirs
    }

    /// Warnings from unreadable settings files
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        [&self.global.warning, &self.project.warning]
            .into_iter()
            .filter_map(|w| w.as_deref())
            .collect()
    }
}

/// Detect our installation in the global config root and the project directory
#[must_use]
pub fn detect_installations(config_dir: &Path, project_dir: &Path) -> Detection {
    let global_target = InstallTarget::global(config_dir);
    let project_target = InstallTarget::project(project_dir);

    Detection {
        global: check_settings(&global_target.settings_path),
        project: check_settings(&project_target.settings_path),
        global_scripts: scripts_installed(&global_target.install_dir),
        project_scripts: scripts_installed(&project_target.install_dir),
        global_target,
        project_target,
    }
}
