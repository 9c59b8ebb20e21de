//! Hook configuration: our hook block and the merge/remove engine
//!
//! The `hooks` value of a settings document maps an event name to an ordered
//! list of hook groups. Groups we did not write are never touched; ours are
//! recognized through [`OwnershipMarker`].

use std::path::Path;

use serde_json::{Map, Value};
use tracing::warn;

use super::marker::OwnershipMarker;

/// Event name to hook-group list, in document order
pub type HookMap = Map<String, Value>;

/// Timeout given to our session-start hook, in milliseconds
pub const SESSION_START_TIMEOUT_MS: u64 = 5000;

/// Event our hook block is registered under
pub const SESSION_START_EVENT: &str = "SessionStart";

/// A single command descriptor inside a hook group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCommand {
    /// Serialized as `type`
    pub kind: String,
    pub command: String,
    pub timeout: Option<u64>,
}

impl HookCommand {
    /// Create a shell command hook
    pub fn command(cmd: impl Into<String>) -> Self {
        Self {
            kind: "command".into(),
            command: cmd.into(),
            timeout: None,
        }
    }

    /// Set the timeout in milliseconds
    #[must_use]
    pub fn with_timeout(mut self, millis: u64) -> Self {
        self.timeout = Some(millis);
        self
    }
}

/// A hook group: optional matcher plus ordered commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookGroup {
    pub matcher: Option<String>,
    pub hooks: Vec<HookCommand>,
}

impl HookGroup {
    /// Group holding a single command
    pub fn single(command: HookCommand) -> Self {
        Self {
            matcher: None,
            hooks: vec![command],
        }
    }

    /// Convert to the JSON shape used in settings.json
    pub fn to_json_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(ref matcher) = self.matcher {
            obj.insert("matcher".into(), Value::String(matcher.clone()));
        }
        let hooks = self
            .hooks
            .iter()
            .map(|hook| {
                let mut entry = Map::new();
                entry.insert("type".into(), Value::String(hook.kind.clone()));
                entry.insert("command".into(), Value::String(hook.command.clone()));
                if let Some(timeout) = hook.timeout {
                    entry.insert("timeout".into(), Value::from(timeout));
                }
                Value::Object(entry)
            })
            .collect();
        obj.insert("hooks".into(), Value::Array(hooks));
        Value::Object(obj)
    }
}

/// Shell command that runs a script from the install directory
pub fn script_command(install_dir: &Path, relative_script: &str) -> String {
    format!("bash '{}'", install_dir.join(relative_script).display())
}

/// Build the hook block we merge into settings
pub fn build_hooks_config(install_dir: &Path) -> HookMap {
    let script = script_command(install_dir, crate::install::SESSION_START_SCRIPT);
    let command = HookCommand::command(script).with_timeout(SESSION_START_TIMEOUT_MS);
    let mut hooks = HookMap::new();
    hooks.insert(
        SESSION_START_EVENT.into(),
        Value::Array(vec![HookGroup::single(command).to_json_value()]),
    );
    hooks
}

/// Merge our hook groups into an existing hook map.
///
/// Per event: absent entries adopt ours, entries without one of our groups get
/// ours appended, entries that already hold one of our groups are left alone.
/// Running the merge twice yields the same map as running it once.
pub fn merge_hooks(existing: &HookMap, ours: &HookMap) -> HookMap {
    let marker = OwnershipMarker::DEFAULT;
    let mut merged = existing.clone();

    for (event, groups) in ours {
        match merged.get_mut(event) {
            None | Some(Value::Null) => {
                merged.insert(event.clone(), groups.clone());
            }
            Some(Value::Array(current)) => {
                if current.iter().any(|group| marker.owns_hook_group(group)) {
                    continue;
                }
                if let Some(new_groups) = groups.as_array() {
                    current.extend(new_groups.iter().cloned());
                }
            }
            Some(_) => {
                warn!(event = %event, "hook entry is not a list, leaving it untouched");
            }
        }
    }

    merged
}

/// Remove our hook groups, dropping events that end up empty.
///
/// Entries that are not lists are passed through unchanged.
pub fn remove_our_hooks(hooks: Option<&HookMap>) -> HookMap {
    let marker = OwnershipMarker::DEFAULT;
    let Some(hooks) = hooks else {
        return HookMap::new();
    };

    let mut cleaned = HookMap::new();
    for (event, groups) in hooks {
        match groups {
            Value::Array(list) => {
                let kept: Vec<Value> = list
                    .iter()
                    .filter(|group| !marker.owns_hook_group(group))
                    .cloned()
                    .collect();
                if !kept.is_empty() {
                    cleaned.insert(event.clone(), Value::Array(kept));
                }
            }
            other => {
                cleaned.insert(event.clone(), other.clone());
            }
        }
    }
    cleaned
}
