//! CLI command handlers
//!
//! `install` and `uninstall` are wizards: `execute` wires the real terminal,
//! config root and interrupt guard, `run` holds the flow so tests can drive it
//! with scripted answers.

pub mod install;
pub mod parse_json;
pub mod status;
pub mod uninstall;
pub mod update;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glance_core::resolve::CONFIG_DIR_ENV;
use glance_core::ConfigRoot;

/// `--config-dir` shared by install, uninstall and status
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigDirArgs {
    /// Claude config directory (defaults to $CLAUDE_CONFIG_DIR or ~/.claude)
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<String>,
}

impl ConfigDirArgs {
    /// Resolve the config root from the flag, the environment and the home dir
    pub fn resolve(&self) -> Result<ConfigRoot> {
        let env_value = env::var(CONFIG_DIR_ENV).ok();
        Ok(ConfigRoot::resolve(
            self.config_dir.as_deref(),
            env_value.as_deref(),
        )?)
    }
}

/// Directory the command was started from
pub fn current_project_dir() -> Result<PathBuf> {
    env::current_dir().context("Cannot read the current directory")
}
