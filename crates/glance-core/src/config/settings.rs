//! Settings document and the read/write store
//!
//! A settings document is kept as an order-preserving JSON map. The two
//! fields this tool cares about (`hooks`, `statusLine`) get typed accessors;
//! every other key is carried through untouched.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::hook::{HookMap, SESSION_START_EVENT};
use super::marker::OwnershipMarker;
use super::statusline::StatusLineConfig;

const HOOKS_KEY: &str = "hooks";
const STATUS_LINE_KEY: &str = "statusLine";

/// A parsed settings.json / settings.local.json
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

impl SettingsDocument {
    /// Empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed JSON value; the root must be an object
    ///
    /// # Errors
    /// Returns `InvalidDocument` for any other JSON value.
    pub fn from_value(path: &Path, value: Value) -> ConfigResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(ConfigError::InvalidDocument {
                path: path.to_path_buf(),
                message: "Expected JSON object".into(),
            }),
        }
    }

    /// The whole document as a JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Look up any top-level key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The `hooks` map, if present and an object
    #[must_use]
    pub fn hooks(&self) -> Option<&HookMap> {
        self.root.get(HOOKS_KEY).and_then(Value::as_object)
    }

    /// Whether `hooks` is present but not an object
    #[must_use]
    pub fn has_malformed_hooks(&self) -> bool {
        self.root
            .get(HOOKS_KEY)
            .is_some_and(|v| !v.is_object() && !v.is_null())
    }

    /// Replace the `hooks` map, keeping its position in the document
    pub fn set_hooks(&mut self, hooks: HookMap) {
        self.root.insert(HOOKS_KEY.into(), Value::Object(hooks));
    }

    /// Drop the `hooks` key
    pub fn remove_hooks(&mut self) -> Option<Value> {
        self.root.shift_remove(HOOKS_KEY)
    }

    /// The raw `statusLine` value
    #[must_use]
    pub fn status_line(&self) -> Option<&Value> {
        self.root.get(STATUS_LINE_KEY)
    }

    /// Set `statusLine`
    pub fn set_status_line(&mut self, status_line: &StatusLineConfig) {
        self.root
            .insert(STATUS_LINE_KEY.into(), status_line.to_json_value());
    }

    /// Drop the `statusLine` key
    pub fn remove_status_line(&mut self) -> Option<Value> {
        self.root.shift_remove(STATUS_LINE_KEY)
    }

    /// Whether one of our groups sits under `SessionStart`
    #[must_use]
    pub fn has_our_session_hook(&self) -> bool {
        let marker = OwnershipMarker::DEFAULT;
        self.hooks()
            .and_then(|hooks| hooks.get(SESSION_START_EVENT))
            .and_then(Value::as_array)
            .is_some_and(|groups| groups.iter().any(|g| marker.owns_hook_group(g)))
    }

    /// Whether `statusLine` is ours
    #[must_use]
    pub fn has_our_statusline(&self) -> bool {
        OwnershipMarker::DEFAULT.owns_statusline(self.status_line())
    }
}

/// Read a settings file, returning an empty document if it does not exist.
///
/// # Errors
/// Returns `JsonParseError` if the file exists but is not valid JSON, and
/// `InvalidDocument` if its root is not an object. The file is never reset.
pub fn read_settings(path: &Path) -> ConfigResult<SettingsDocument> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file absent, starting empty");
        return Ok(SettingsDocument::new());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::JsonParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    SettingsDocument::from_value(path, value)
}

/// Write a settings file: two-space indent, insertion order, trailing newline.
///
/// # Errors
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_settings(path: &Path, settings: &SettingsDocument) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, &e))?;
    }

    let mut content = serde_json::to_string_pretty(&settings.root)
        .map_err(|e| ConfigError::Internal(e.to_string()))?;
    content.push('\n');

    fs::write(path, content).map_err(|e| ConfigError::io(path, &e))?;
    debug!(path = %path.display(), "wrote settings");
    Ok(())
}
