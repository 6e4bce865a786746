//! Key-press dispatch: key code + namespace -> action

use std::fmt;

use super::action::ActionId;
use super::map::BindingMap;
use super::types::KeyCode;
use crate::events::{EventBus, GLOBAL_KEY_PRESSED, KEY_ACTION, KEY_PRESSED};

/// Binding scope of a hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Active only while a window has input focus
    Local,
    /// Grabbed system-wide
    Global,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Local, Namespace::Global];

    /// Variable delivering key presses for this namespace
    pub const fn variable(self) -> &'static str {
        match self {
            Namespace::Local => KEY_PRESSED,
            Namespace::Global => GLOBAL_KEY_PRESSED,
        }
    }

    /// Configuration key holding this namespace's bindings for `action`
    pub fn config_key(self, action: ActionId) -> String {
        match self {
            Namespace::Local => action.config_key(),
            Namespace::Global => action.global_config_key(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Local => write!(f, "local"),
            Namespace::Global => write!(f, "global"),
        }
    }
}

/// Resolve a raw key-press value against a map
///
/// Values that do not fit a key code resolve to nothing.
pub fn resolve(map: &BindingMap, raw: i64) -> Option<ActionId> {
    let code = u32::try_from(raw).ok().map(KeyCode::from_raw)?;
    map.lookup(code)
}

/// Publish a key press on the namespace's variable
pub fn press(bus: &dyn EventBus, namespace: Namespace, code: KeyCode) {
    bus.set_integer(namespace.variable(), i64::from(code.raw()));
}

/// Handle one key-press notification
///
/// A hit publishes the action on [`KEY_ACTION`]; a miss publishes nothing.
pub fn key_to_action(map: &BindingMap, bus: &dyn EventBus, namespace: Namespace, raw: i64) {
    match resolve(map, raw) {
        Some(action) => {
            tracing::debug!("{} key {:#x} -> {}", namespace, raw, action);
            bus.set_integer(KEY_ACTION, i64::from(action.as_raw()));
        }
        None => tracing::trace!("{} key {:#x} is not bound", namespace, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::VarBus;
    use crate::keymap::binding::Binding;
    use crate::keymap::types::Modifiers;

    fn map_with(code: KeyCode, action: ActionId) -> BindingMap {
        let mut map = BindingMap::new();
        map.insert(Binding::new(code, action)).unwrap();
        map
    }

    #[test]
    fn test_namespace_variables() {
        assert_eq!(Namespace::Local.variable(), "key-pressed");
        assert_eq!(Namespace::Global.variable(), "global-key-pressed");
    }

    #[test]
    fn test_namespace_config_keys() {
        assert_eq!(Namespace::Local.config_key(ActionId::Quit), "key-quit");
        assert_eq!(Namespace::Global.config_key(ActionId::Quit), "global-key-quit");
    }

    #[test]
    fn test_namespace_config_keys_resolve_back() {
        for namespace in Namespace::ALL {
            let key = namespace.config_key(ActionId::PlayPause);
            assert_eq!(
                crate::keymap::resolve_config_key(&key).unwrap(),
                ActionId::PlayPause
            );
        }
    }

    #[test]
    fn test_resolve_raw_values() {
        let code = KeyCode::new('s' as u32, Modifiers::COMMAND);
        let map = map_with(code, ActionId::Snapshot);

        assert_eq!(resolve(&map, i64::from(code.raw())), Some(ActionId::Snapshot));
        assert_eq!(resolve(&map, 's' as i64), None);
        assert_eq!(resolve(&map, -1), None);
        assert_eq!(resolve(&map, i64::from(u32::MAX) + 1), None);
    }

    #[test]
    fn test_key_to_action_hit_publishes() {
        let bus = VarBus::new();
        let map = map_with(KeyCode::char(' '), ActionId::PlayPause);

        key_to_action(&map, &bus, Namespace::Local, ' ' as i64);
        assert_eq!(
            bus.get_integer(KEY_ACTION),
            Some(i64::from(ActionId::PlayPause.as_raw()))
        );
    }

    #[test]
    fn test_key_to_action_miss_is_silent() {
        let bus = VarBus::new();
        let map = map_with(KeyCode::char(' '), ActionId::PlayPause);

        key_to_action(&map, &bus, Namespace::Local, 'x' as i64);
        assert_eq!(bus.get_integer(KEY_ACTION), None);
    }
}
