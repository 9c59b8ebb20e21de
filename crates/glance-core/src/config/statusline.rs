//! Statusline command descriptor

use std::path::Path;

use serde_json::{Map, Value};

use super::hook::script_command;

/// The `statusLine` value of a settings document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLineConfig {
    /// Serialized as `type`
    pub kind: String,
    pub command: String,
}

impl StatusLineConfig {
    /// Statusline that runs an arbitrary command
    pub fn command(cmd: impl Into<String>) -> Self {
        Self {
            kind: "command".into(),
            command: cmd.into(),
        }
    }

    /// Our bundled statusline script, or a user command when one is given
    pub fn for_install(install_dir: &Path, custom: Option<&str>) -> Self {
        match custom {
            Some(cmd) if !cmd.trim().is_empty() => Self::command(cmd.trim()),
            _ => Self::command(script_command(install_dir, crate::install::STATUSLINE_SCRIPT)),
        }
    }

    /// Convert to the JSON shape used in settings.json
    pub fn to_json_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), Value::String(self.kind.clone()));
        obj.insert("command".into(), Value::String(self.command.clone()));
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bundled_statusline_points_into_install_dir() {
        let cfg = StatusLineConfig::for_install(&PathBuf::from("/p/.claude/session-summary"), None);
        assert_eq!(cfg.command, "bash '/p/.claude/session-summary/scripts/statusline.sh'");
        assert_eq!(cfg.to_json_value()["type"], "command");
    }

    #[test]
    fn test_custom_command_wins_unless_blank() {
        let dir = PathBuf::from("/p/session-summary");
        let custom = StatusLineConfig::for_install(&dir, Some(" ~/bin/status "));
        assert_eq!(custom.command, "~/bin/status");

        let blank = StatusLineConfig::for_install(&dir, Some("  "));
        assert!(blank.command.ends_with("scripts/statusline.sh'"));
    }
}
