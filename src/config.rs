//! Hotkey configuration persistence
//!
//! Bindings live in `~/.config/hotkeys/hotkeys.yaml`, one entry per
//! configuration key:
//!
//! ```yaml
//! key-play-pause: "Space\tMedia Play Pause"
//! key-quit:
//!   - Ctrl+q
//! global-key-vol-up: Volume Up
//! key-stop: ""          # unbind a default
//! ```
//!
//! A value is either one tab-separated string or a list of key strings.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::keymap::{resolve_config_key, KeymapError};

/// Separator between key strings in one configuration value
pub const KEY_SEPARATOR: char = '\t';

/// Read-only access to raw configuration strings, by configuration key
pub trait ConfigSource {
    fn get_string(&self, name: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get_string(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// One key string as written in YAML
///
/// Plain scalars such as `1` or `true` resolve to numbers and booleans in
/// YAML; they are taken back as the text they were written as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
struct KeyItem(String);

impl<'de> Deserialize<'de> for KeyItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyItemVisitor)
    }
}

struct KeyItemVisitor;

impl<'de> Visitor<'de> for KeyItemVisitor {
    type Value = KeyItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a key string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<KeyItem, E> {
        Ok(KeyItem(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<KeyItem, E> {
        Ok(KeyItem(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<KeyItem, E> {
        Ok(KeyItem(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<KeyItem, E> {
        Ok(KeyItem(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<KeyItem, E> {
        Ok(KeyItem(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<KeyItem, E> {
        Ok(KeyItem(v.to_string()))
    }
}

/// One configuration value as written in YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum KeyList {
    Joined(KeyItem),
    List(Vec<KeyItem>),
}

impl From<KeyList> for String {
    fn from(list: KeyList) -> Self {
        match list {
            KeyList::Joined(KeyItem(keys)) => keys,
            KeyList::List(items) => items
                .into_iter()
                .map(|KeyItem(key)| key)
                .collect::<Vec<_>>()
                .join("\t"),
        }
    }
}

impl From<String> for KeyList {
    fn from(keys: String) -> Self {
        if keys.contains(KEY_SEPARATOR) {
            KeyList::List(
                keys.split(KEY_SEPARATOR)
                    .map(|key| KeyItem(key.to_string()))
                    .collect(),
            )
        } else {
            KeyList::Joined(KeyItem(keys))
        }
    }
}

type RawConfig = BTreeMap<String, Option<KeyList>>;

/// Hotkey configuration: configuration key -> tab-separated key strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawConfig", into = "RawConfig")]
pub struct HotkeyConfig {
    entries: BTreeMap<String, String>,
}

impl From<RawConfig> for HotkeyConfig {
    fn from(raw: RawConfig) -> Self {
        let entries = raw
            .into_iter()
            .map(|(key, value)| (key, value.map(String::from).unwrap_or_default()))
            .collect();
        Self { entries }
    }
}

impl From<HotkeyConfig> for RawConfig {
    fn from(config: HotkeyConfig) -> Self {
        config
            .entries
            .into_iter()
            .map(|(key, value)| (key, Some(KeyList::from(value))))
            .collect()
    }
}

impl ConfigSource for HotkeyConfig {
    fn get_string(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }
}

impl HotkeyConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `(key, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Set the raw value of a configuration key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Layer `overrides` on top of this configuration
    ///
    /// Each key present in `overrides` replaces the whole value here.
    pub fn merge(&mut self, overrides: HotkeyConfig) {
        self.entries.extend(overrides.entries);
    }

    /// Keys that name no known action
    pub fn unknown_keys(&self) -> Vec<KeymapError> {
        self.entries
            .keys()
            .filter_map(|key| resolve_config_key(key).err())
            .collect()
    }

    /// Parse a configuration from YAML text
    pub fn parse_yaml(yaml: &str) -> Result<Self, KeymapError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: HotkeyConfig = serde_yaml::from_str(yaml)?;
        for issue in config.unknown_keys() {
            tracing::warn!("{}", issue);
        }
        Ok(config)
    }

    /// Load a configuration file
    pub fn load_from_path(path: &Path) -> Result<Self, KeymapError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Write the configuration as YAML, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<(), KeymapError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved hotkeys to {}", path.display());
        Ok(())
    }

    /// Read a user hotkey file, or return an empty configuration
    ///
    /// A missing or unreadable file is logged and treated as empty.
    pub fn load_user_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Hotkey file not found at {}", path.display());
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::info!(
                    "Loaded {} hotkey entries from {}",
                    config.len(),
                    path.display()
                );
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load hotkeys from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load the user's hotkey file, or return an empty configuration
    pub fn load_user() -> Self {
        match crate::config_paths::hotkeys_file() {
            Some(path) => Self::load_user_from(&path),
            None => {
                tracing::debug!("No config directory available, no user hotkeys");
                Self::default()
            }
        }
    }

    /// Embedded defaults with the hotkey file at `user_file` layered on top
    pub fn load_from(user_file: Option<&Path>) -> Self {
        let mut config = crate::keymap::default_config();
        if let Some(path) = user_file {
            config.merge(Self::load_user_from(path));
        }
        config
    }

    /// Embedded defaults with the user's hotkey file layered on top
    pub fn load() -> Self {
        Self::load_from(crate::config_paths::hotkeys_file().as_deref())
    }
}
