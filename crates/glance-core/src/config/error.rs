//! Error types for settings and install operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading, merging or installing
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The host application's config root does not exist yet
    #[error("Claude config not found: {}", config_dir.display())]
    PrerequisiteMissing {
        config_dir: PathBuf,
        /// Whether the path came from `CLAUDE_CONFIG_DIR`
        from_env: bool,
    },

    /// Settings file exists but is not valid JSON
    #[error("Failed to parse {}: {message}", path.display())]
    JsonParseError { path: PathBuf, message: String },

    /// Settings file parsed but has an unexpected shape
    #[error("Unexpected settings layout in {}: {message}", path.display())]
    InvalidDocument { path: PathBuf, message: String },

    /// A bundled script is missing from the asset directory
    #[error("Missing script: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// A user supplied directory does not exist
    #[error("Directory not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A manifest entry tried to escape the install directory
    #[error("Refusing to write outside {}: {entry}", root.display())]
    PathEscape { root: PathBuf, entry: String },

    /// File I/O error
    #[error("I/O error for {}: {message}", path.display())]
    IoError { path: PathBuf, message: String },

    /// Backup creation failed
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),

    /// Home directory could not be determined
    #[error("Cannot find home directory")]
    HomeNotFound,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConfigError {
    /// Get the error code for CLI output
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PrerequisiteMissing { .. } => "PREREQUISITE_MISSING",
            Self::JsonParseError { .. } | Self::InvalidDocument { .. } => "PARSE_ERROR",
            Self::SourceMissing { .. } => "SOURCE_MISSING",
            Self::PathNotFound(_) => "PATH_NOT_FOUND",
            Self::PathEscape { .. } => "VALIDATION_ERROR",
            Self::IoError { .. } => "IO_ERROR",
            Self::BackupFailed(_) => "BACKUP_FAILED",
            Self::HomeNotFound | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Remediation lines to print under the error message
    #[must_use]
    pub fn hint(&self) -> Vec<String> {
        match self {
            Self::PrerequisiteMissing { config_dir, from_env } => {
                if *from_env {
                    vec![
                        format!("CLAUDE_CONFIG_DIR={}", config_dir.display()),
                        "Verify this path or unset to use ~/.claude/".to_string(),
                    ]
                } else {
                    vec!["Run \"claude\" first to initialize.".to_string()]
                }
            }
            Self::JsonParseError { .. } | Self::InvalidDocument { .. } => {
                vec!["Please fix the JSON manually or remove the file.".to_string()]
            }
            _ => Vec::new(),
        }
    }

    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
