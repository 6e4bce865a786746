//! Default hotkeys
//!
//! These are the standard bindings that ship with the crate, compiled in
//! from `hotkeys.yaml` at the project root. User configuration is layered on
//! top by [`HotkeyConfig::load`](crate::config::HotkeyConfig::load).

use crate::config::HotkeyConfig;

/// Default hotkeys YAML embedded at compile time
pub const DEFAULT_HOTKEYS_YAML: &str = include_str!("../../hotkeys.yaml");

/// Get the embedded default hotkeys YAML content
pub fn get_default_hotkeys_yaml() -> &'static str {
    DEFAULT_HOTKEYS_YAML
}

/// Parse the embedded defaults
///
/// Falls back to an empty configuration if the embedded file is broken.
pub fn default_config() -> HotkeyConfig {
    match HotkeyConfig::parse_yaml(DEFAULT_HOTKEYS_YAML) {
        Ok(config) => {
            tracing::debug!("Loaded embedded default hotkeys ({} entries)", config.len());
            config
        }
        Err(e) => {
            tracing::warn!("Failed to parse embedded hotkeys: {}, using none", e);
            HotkeyConfig::default()
        }
    }
}
