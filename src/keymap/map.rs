//! BindingMap: the searchable set of bindings for one namespace

use std::collections::btree_map::{BTreeMap, Entry};

use super::action::ActionId;
use super::binding::Binding;
use super::types::KeyCode;

/// Bindings of one namespace, keyed by key code
///
/// Holds at most one binding per key code. The first binding inserted for
/// a code is kept; later ones are handed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingMap {
    entries: BTreeMap<KeyCode, Binding>,
}

impl BindingMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a binding unless its key code is already bound
    ///
    /// On conflict the map is left untouched and the existing binding is
    /// returned as `Err`.
    pub fn insert(&mut self, binding: Binding) -> Result<(), Binding> {
        match self.entries.entry(binding.key) {
            Entry::Occupied(existing) => Err(*existing.get()),
            Entry::Vacant(slot) => {
                slot.insert(binding);
                Ok(())
            }
        }
    }

    /// Look up the action bound to a key code
    pub fn lookup(&self, key: KeyCode) -> Option<ActionId> {
        self.entries.get(&key).map(|binding| binding.action)
    }

    pub fn get(&self, key: KeyCode) -> Option<&Binding> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: KeyCode) -> bool {
        self.entries.contains_key(&key)
    }

    /// All key codes bound to an action, in ascending code order
    pub fn keys_for(&self, action: ActionId) -> Vec<KeyCode> {
        self.entries
            .values()
            .filter(|binding| binding.action == action)
            .map(|binding| binding.key)
            .collect()
    }

    /// Iterate bindings in ascending key-code order
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every binding
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
