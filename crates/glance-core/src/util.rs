//! Path helpers shared by install and detection

use std::path::{Component, Path, PathBuf};

use crate::config::{ConfigError, ConfigResult};

/// Files or directories whose presence marks a project root
const PROJECT_MARKERS: &[&str] = &[
    ".git",
    ".hg",
    ".claude",
    "package.json",
    "Cargo.toml",
    "go.mod",
    "pyproject.toml",
    "requirements.txt",
    "setup.py",
    "Makefile",
    "CMakeLists.txt",
    "pom.xml",
    "build.gradle",
    "Gemfile",
    "tsconfig.json",
];

/// Join a relative manifest entry onto `root`, rejecting entries that would
/// land outside it (absolute paths, `..` that climbs past the root).
///
/// # Errors
/// Returns `PathEscape` for entries that leave `root`.
pub fn join_within(root: &Path, relative: &str) -> ConfigResult<PathBuf> {
    let escape = || ConfigError::PathEscape {
        root: root.to_path_buf(),
        entry: relative.to_string(),
    };

    let mut normalized = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(escape());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(escape()),
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(escape());
    }
    Ok(root.join(normalized))
}

/// Whether `dir` looks like a project root rather than `$HOME`, `/` or `/tmp`
#[must_use]
pub fn is_plausible_project_root(dir: &Path, home: Option<&Path>) -> bool {
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let home = home.map(|h| h.canonicalize().unwrap_or_else(|_| h.to_path_buf()));

    if home.as_deref() == Some(resolved.as_path())
        || resolved == Path::new("/")
        || resolved == Path::new("/tmp")
    {
        return false;
    }

    PROJECT_MARKERS
        .iter()
        .any(|marker| resolved.join(marker).exists())
}

/// Temp directory base the bundled scripts should use on this OS
#[must_use]
pub fn tmp_base() -> &'static str {
    if cfg!(target_os = "macos") {
        "/private/tmp"
    } else {
        "/tmp"
    }
}
