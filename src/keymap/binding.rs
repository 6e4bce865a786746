//! Binding struct representing a mapping from a key code to an action

use super::action::ActionId;
use super::error::KeymapError;
use super::types::KeyCode;

/// A single hotkey: one key code triggering one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub key: KeyCode,
    pub action: ActionId,
}

impl Binding {
    pub const fn new(key: KeyCode, action: ActionId) -> Self {
        Self { key, action }
    }

    /// Canonical display string of the key, e.g. "Ctrl+Shift+F1"
    pub fn display_string(&self) -> Result<String, KeymapError> {
        self.key.to_canonical()
    }
}
