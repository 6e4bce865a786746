//! Hotkey-to-action resolution
//!
//! This module turns key-combination strings from configuration into key
//! codes, stores them in per-namespace binding maps and resolves key presses
//! to actions:
//!
//! # Architecture
//!
//! ```text
//! "Ctrl+Shift+F1" → KeyCode ─┐
//!                            ├→ BindingMap (local / global) → ActionId
//! "key-<action>"  → ActionId ┘
//! ```
//!
//! # Building maps
//!
//! ```ignore
//! let config = HotkeyConfig::from_pairs([("key-play", "Space\tEnter")]);
//! let (maps, report) = build_maps(&config);
//! assert_eq!(maps.local.lookup(KeyCode::char(' ')), Some(ActionId::Play));
//! ```

mod action;
mod binding;
mod builder;
mod codec;
mod defaults;
pub mod dispatch;
mod error;
mod keys;
mod map;
mod types;

pub use action::{
    action_id, lookup_action, resolve_config_key, ActionDescriptor, ActionId, ActionTable,
    ACTIONS, CONFIG_PREFIX, GLOBAL_TAG, MAX_ACTION_NAME,
};
pub use binding::Binding;
pub use builder::{build_maps, map_action, BindingMaps, BuildReport};
pub use codec::{canonicalize, format_key_code, parse_key_string};
pub use defaults::{default_config, get_default_hotkeys_yaml, DEFAULT_HOTKEYS_YAML};
pub use dispatch::Namespace;
pub use error::{KeymapError, Result};
pub use keys::{name_for_value, value_for_name, NamedKey, NAMED_KEYS};
pub use map::BindingMap;
pub use types::{base, KeyCode, Modifiers};
