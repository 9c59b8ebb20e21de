//! Glance Core - settings merge, detection and install engine
//!
//! This crate owns every file the installer touches: the host application's
//! settings documents, their backups, and the script directories. It never
//! prompts or prints; the CLI drives it.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod backup;
pub mod config;
pub mod detect;
pub mod install;
pub mod resolve;
pub mod uninstall;
pub mod util;

pub use config::{ConfigError, ConfigResult, InstallScope, SettingsDocument};
pub use detect::{detect_installations, Detection, ScopeStatus};
pub use install::{install_target, StatuslinePolicy, TargetReport};
pub use resolve::{ConfigRoot, InstallTarget};
pub use uninstall::{clean_settings, CleanReport, RemovalPlan, Resolution};
