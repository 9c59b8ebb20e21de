//! Location of the bundled scripts

use std::env;
use std::path::{Path, PathBuf};

use glance_core::install::SESSION_START_SCRIPT;
use tracing::debug;

/// Overrides where the bundled scripts are read from
pub const ASSETS_ENV: &str = "CLAUDE_GLANCE_ASSETS";

/// Assets directory of the source checkout this binary was built from
const BUILD_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

fn has_scripts(dir: &Path) -> bool {
    dir.join(SESSION_START_SCRIPT).is_file()
}

/// Candidate directories beside the running executable
fn beside_executable() -> Vec<PathBuf> {
    let Some(bin_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    else {
        return Vec::new();
    };
    vec![
        bin_dir.join("assets"),
        bin_dir.join("../share/claude-glance"),
    ]
}

/// Find the assets directory.
///
/// Priority: `CLAUDE_GLANCE_ASSETS`, a directory next to the executable,
/// then the build tree. The environment override is returned as given even
/// when scripts are missing there; copying then reports each missing file.
pub fn locate() -> PathBuf {
    if let Some(dir) = env::var_os(ASSETS_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    let found = beside_executable()
        .into_iter()
        .find(|dir| has_scripts(dir))
        .unwrap_or_else(|| PathBuf::from(BUILD_ASSETS));
    debug!(assets = %found.display(), "using bundled scripts");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_assets_ship_every_script() {
        for relative in glance_core::install::SCRIPTS {
            assert!(
                Path::new(BUILD_ASSETS).join(relative).is_file(),
                "{relative} missing from assets/"
            );
        }
    }
}
