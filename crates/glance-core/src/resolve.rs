//! Installation target resolution
//!
//! Turns the `--config-dir` flag, `CLAUDE_CONFIG_DIR`, the home directory and
//! the working directory into concrete settings paths and install directories.

use std::path::{Path, PathBuf};

use crate::config::{ConfigError, ConfigResult, InstallScope, OWNERSHIP_MARKER};

/// Environment variable that overrides the config root
pub const CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Where the config root path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Flag,
    Env,
    Default,
}

/// The host application's configuration root (`~/.claude` by default)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRoot {
    pub path: PathBuf,
    pub source: ConfigDirSource,
}

impl ConfigRoot {
    /// Resolve against the current user's home directory.
    ///
    /// Priority: `flag` > `env` > `~/.claude`. Empty values are ignored.
    ///
    /// # Errors
    /// Returns `HomeNotFound` if the home directory cannot be determined.
    pub fn resolve(flag: Option<&str>, env: Option<&str>) -> ConfigResult<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(Self::resolve_with_home(flag, env, &home))
    }

    /// [`ConfigRoot::resolve`] with an explicit home directory
    #[must_use]
    pub fn resolve_with_home(flag: Option<&str>, env: Option<&str>, home: &Path) -> Self {
        let non_empty: for<'a> fn(Option<&'a str>) -> Option<&'a str> = |v| v.filter(|s| !s.is_empty());

        if let Some(dir) = non_empty(flag) {
            return Self {
                path: expand_home(dir, home),
                source: ConfigDirSource::Flag,
            };
        }
        if let Some(dir) = non_empty(env) {
            return Self {
                path: expand_home(dir, home),
                source: ConfigDirSource::Env,
            };
        }
        Self {
            path: home.join(".claude"),
            source: ConfigDirSource::Default,
        }
    }

    /// Fail when the config root has not been created by the host application
    ///
    /// # Errors
    /// Returns `PrerequisiteMissing` if the directory does not exist.
    pub fn ensure_exists(&self) -> ConfigResult<()> {
        if self.path.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::PrerequisiteMissing {
                config_dir: self.path.clone(),
                from_env: self.source == ConfigDirSource::Env,
            })
        }
    }

    /// `{configDir}/settings.json`
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        global_settings_path(&self.path)
    }

    /// `{configDir}/session-summary`
    #[must_use]
    pub fn install_dir(&self) -> PathBuf {
        install_dir_in(&self.path)
    }
}

/// Expand a leading `~` against `home`; `~` elsewhere is left alone
#[must_use]
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    let home = home.to_string_lossy().into_owned();
    let expanded = shellexpand::tilde_with_context(path, || Some(home.as_str()));
    PathBuf::from(expanded.into_owned())
}

/// Global settings file inside a config root
#[must_use]
pub fn global_settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.json")
}

/// Project settings file (`.claude/settings.local.json`)
#[must_use]
pub fn project_settings_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".claude").join("settings.local.json")
}

/// Script directory under a base directory
#[must_use]
pub fn install_dir_in(base: &Path) -> PathBuf {
    base.join(OWNERSHIP_MARKER)
}

/// One destination for an install or uninstall run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub scope: InstallScope,
    pub settings_path: PathBuf,
    pub install_dir: PathBuf,
}

impl InstallTarget {
    /// Global target rooted at a config directory
    #[must_use]
    pub fn global(config_dir: &Path) -> Self {
        Self {
            scope: InstallScope::Global,
            settings_path: global_settings_path(config_dir),
            install_dir: install_dir_in(config_dir),
        }
    }

    /// Project target; scripts go next to the project settings file
    #[must_use]
    pub fn project(project_dir: &Path) -> Self {
        let settings_path = project_settings_path(project_dir);
        let install_dir = install_dir_in(&project_dir.join(".claude"));
        Self {
            scope: InstallScope::Project,
            settings_path,
            install_dir,
        }
    }
}
