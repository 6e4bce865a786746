//! Hotkeys - hotkey-to-action resolution
//!
//! This crate parses key-combination strings ("Ctrl+Shift+F1") into key
//! codes, builds local and global binding maps from configuration and
//! resolves key-press notifications to actions.

pub mod config;
pub mod config_paths;
pub mod events;
pub mod keymap;
pub mod subsystem;
pub mod tracing;

// Re-export commonly used types
pub use config::{ConfigSource, HotkeyConfig};
pub use events::{EventBus, VarBus};
pub use keymap::{ActionId, KeyCode, KeymapError, Modifiers, Namespace};
pub use subsystem::Hotkeys;
