//! Settings document model
//!
//! Types and pure operations over the host application's settings files:
//! - the settings document and its read/write store
//! - our hook block and the merge/remove engine
//! - the statusline descriptor
//! - ownership detection by marker substring
//!
//! Nothing here prompts or prints; orchestration lives in the CLI.

mod error;
mod hook;
mod marker;
mod scope;
mod settings;
mod statusline;

pub use error::{ConfigError, ConfigResult};
pub use hook::{
    build_hooks_config, merge_hooks, remove_our_hooks, script_command, HookCommand, HookGroup,
    HookMap, SESSION_START_EVENT, SESSION_START_TIMEOUT_MS,
};
pub use marker::{is_our_hook, is_our_statusline, OwnershipMarker, OWNERSHIP_MARKER};
pub use scope::InstallScope;
pub use settings::{read_settings, write_settings, SettingsDocument};
pub use statusline::StatusLineConfig;
