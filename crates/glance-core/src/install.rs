//! Install operations: copy the bundled scripts and wire them into settings

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::backup::backup_settings;
use crate::config::{
    build_hooks_config, merge_hooks, read_settings, write_settings, ConfigError, ConfigResult,
    HookMap, StatusLineConfig,
};
use crate::resolve::InstallTarget;
use crate::util::join_within;

/// Script run by the `SessionStart` hook
pub const SESSION_START_SCRIPT: &str = "scripts/session-start.sh";
/// Script used as the statusline command
pub const STATUSLINE_SCRIPT: &str = "scripts/statusline.sh";
/// Script behind `claude-glance update`
pub const UPDATE_SCRIPT: &str = "scripts/update-summary.sh";
/// JSON field extractor used by the other scripts
pub const PARSE_JSON_SHIM: &str = "lib/parse-json.sh";

/// Every file copied into an install directory, relative to the assets root
pub const SCRIPTS: &[&str] = &[
    STATUSLINE_SCRIPT,
    SESSION_START_SCRIPT,
    UPDATE_SCRIPT,
    PARSE_JSON_SHIM,
];

/// Temp path the bundled scripts are written against
const SCRIPT_TMP_BASE: &str = "/private/tmp";

/// Result of copying the manifest into one install directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Which statusline an install run writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatuslinePolicy {
    /// The bundled statusline script
    Bundled,
    /// A command the user typed
    Custom(String),
    /// Leave `statusLine` as it is
    Skip,
}

impl StatuslinePolicy {
    /// Statusline to write for an install directory, `None` for `Skip`
    #[must_use]
    pub fn statusline_for(&self, install_dir: &Path) -> Option<StatusLineConfig> {
        match self {
            Self::Bundled => Some(StatusLineConfig::for_install(install_dir, None)),
            Self::Custom(cmd) => Some(StatusLineConfig::for_install(install_dir, Some(cmd))),
            Self::Skip => None,
        }
    }

    /// Short description for summaries
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Bundled => "built-in".to_string(),
            Self::Custom(cmd) if cmd.trim().is_empty() => "built-in".to_string(),
            Self::Custom(cmd) => format!("custom ({})", cmd.trim()),
            Self::Skip => "skip".to_string(),
        }
    }
}

/// Outcome of installing into one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub target: InstallTarget,
    pub scripts: CopyReport,
    pub backup: Option<PathBuf>,
}

/// Rewrite the macOS temp path when scripts run somewhere else
#[must_use]
pub fn normalize_tmp_paths(content: &str, tmp_base: &str) -> String {
    if tmp_base == SCRIPT_TMP_BASE {
        content.to_string()
    } else {
        content.replace(SCRIPT_TMP_BASE, tmp_base)
    }
}

/// Copy every manifest script from `source_root` into `install_dir`.
///
/// Missing sources are logged and skipped. Copied files are made executable.
///
/// # Errors
/// Returns an error if a directory or file cannot be written.
pub fn copy_scripts(
    source_root: &Path,
    install_dir: &Path,
    tmp_base: &str,
) -> ConfigResult<CopyReport> {
    let mut report = CopyReport::default();

    for relative in SCRIPTS {
        let source = join_within(source_root, relative)?;
        let dest = join_within(install_dir, relative)?;

        if !source.is_file() {
            warn!(source = %source.display(), "bundled script missing, skipping");
            report.missing.push(source);
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, &e))?;
        }

        let bytes = fs::read(&source).map_err(|e| ConfigError::io(&source, &e))?;
        let body = match String::from_utf8(bytes) {
            Ok(text) => normalize_tmp_paths(&text, tmp_base).into_bytes(),
            Err(raw) => raw.into_bytes(),
        };
        fs::write(&dest, body).map_err(|e| ConfigError::io(&dest, &e))?;
        make_executable(&dest)?;

        debug!(from = %source.display(), to = %dest.display(), "copied script");
        report.copied.push(dest);
    }

    Ok(report)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> ConfigResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| ConfigError::io(path, &e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> ConfigResult<()> {
    Ok(())
}

/// Merge our hooks (and the chosen statusline) into a target's settings.
///
/// The file is backed up before it is rewritten. Returns the backup path.
///
/// # Errors
/// Returns `JsonParseError` for unparseable settings and `InvalidDocument`
/// when `hooks` is present but not an object. Neither case writes anything.
pub fn apply_settings(
    target: &InstallTarget,
    policy: &StatuslinePolicy,
) -> ConfigResult<Option<PathBuf>> {
    let path = &target.settings_path;
    let mut doc = read_settings(path)?;

    if doc.has_malformed_hooks() {
        return Err(ConfigError::InvalidDocument {
            path: path.clone(),
            message: "\"hooks\" must be an object".into(),
        });
    }

    let ours = build_hooks_config(&target.install_dir);
    let existing = doc.hooks().cloned().unwrap_or_else(HookMap::new);
    doc.set_hooks(merge_hooks(&existing, &ours));

    if let Some(status_line) = policy.statusline_for(&target.install_dir) {
        doc.set_status_line(&status_line);
    }

    let backup = backup_settings(path)?;
    write_settings(path, &doc)?;
    Ok(backup)
}

/// Copy scripts and update settings for one target.
///
/// # Errors
/// Propagates failures from [`copy_scripts`] and [`apply_settings`].
pub fn install_target(
    source_root: &Path,
    target: &InstallTarget,
    policy: &StatuslinePolicy,
    tmp_base: &str,
) -> ConfigResult<TargetReport> {
    let scripts = copy_scripts(source_root, &target.install_dir, tmp_base)?;
    let backup = apply_settings(target, policy)?;
    debug!(scope = %target.scope, settings = %target.settings_path.display(), "installed");

    Ok(TargetReport {
        target: target.clone(),
        scripts,
        backup,
    })
}
