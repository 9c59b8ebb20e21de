//! Ownership detection for settings entries
//!
//! Entries written by this tool carry no id field. An entry is ours when one of
//! its command strings contains the marker substring, which is the name of the
//! install directory. Every ownership check in the crate goes through
//! [`OwnershipMarker`].

use serde_json::Value;

/// Substring that identifies our hook and statusline commands
pub const OWNERSHIP_MARKER: &str = "session-summary";

/// Predicate over settings values that decides whether we own them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipMarker(&'static str);

impl OwnershipMarker {
    /// Marker used by every released version
    pub const DEFAULT: Self = Self(OWNERSHIP_MARKER);

    /// Whether a command string belongs to us
    #[must_use]
    pub fn matches(&self, command: &str) -> bool {
        command.contains(self.0)
    }

    /// Whether a hook group (`{"hooks": [{"command": ...}, ...]}`) belongs to us.
    ///
    /// Missing or malformed fields count as foreign.
    #[must_use]
    pub fn owns_hook_group(&self, group: &Value) -> bool {
        group
            .get("hooks")
            .and_then(Value::as_array)
            .is_some_and(|hooks| {
                hooks
                    .iter()
                    .filter_map(|hook| hook.get("command").and_then(Value::as_str))
                    .any(|command| self.matches(command))
            })
    }

    /// Whether a `statusLine` value belongs to us
    #[must_use]
    pub fn owns_statusline(&self, status_line: Option<&Value>) -> bool {
        status_line
            .and_then(|value| value.get("command"))
            .and_then(Value::as_str)
            .is_some_and(|command| self.matches(command))
    }
}

impl Default for OwnershipMarker {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Check if a hook group belongs to us
#[must_use]
pub fn is_our_hook(group: &Value) -> bool {
    OwnershipMarker::DEFAULT.owns_hook_group(group)
}

/// Check if a statusLine value belongs to us
#[must_use]
pub fn is_our_statusline(status_line: Option<&Value>) -> bool {
    OwnershipMarker::DEFAULT.owns_statusline(status_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hook_group_with_marker_is_ours() {
        let group = json!({
            "hooks": [
                {"type": "command", "command": "echo hi"},
                {"type": "command", "command": "bash '/home/u/.claude/session-summary/scripts/session-start.sh'"}
            ]
        });
        assert!(is_our_hook(&group));
    }

    #[test]
    fn test_foreign_hook_group_is_not_ours() {
        let group = json!({"hooks": [{"type": "command", "command": "./lint.sh"}]});
        assert!(!is_our_hook(&group));
    }

    #[test]
    fn test_malformed_groups_test_negative() {
        assert!(!is_our_hook(&json!({})));
        assert!(!is_our_hook(&json!({"hooks": []})));
        assert!(!is_our_hook(&json!({"hooks": "session-summary"})));
        assert!(!is_our_hook(&json!({"hooks": [{"type": "prompt", "prompt": "session-summary"}]})));
        assert!(!is_our_hook(&json!({"hooks": [{"command": 42}]})));
        assert!(!is_our_hook(&json!(null)));
        assert!(!is_our_hook(&json!(["session-summary"])));
    }

    #[test]
    fn test_statusline_ownership() {
        let ours = json!({"type": "command", "command": "bash '/x/session-summary/scripts/statusline.sh'"});
        let theirs = json!({"type": "command", "command": "~/bin/my-status"});
        assert!(is_our_statusline(Some(&ours)));
        assert!(!is_our_statusline(Some(&theirs)));
        assert!(!is_our_statusline(None));
        assert!(!is_our_statusline(Some(&json!("session-summary"))));
    }
}
