//! Installation scope handling

use std::fmt;

/// Where an installation lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallScope {
    /// Config root (`~/.claude/settings.json`), applies to all projects
    Global,
    /// Project directory (`.claude/settings.local.json`), this project only
    Project,
}

impl InstallScope {
    /// Title-case label for terminal output
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for InstallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Project => write!(f, "project"),
        }
    }
}
