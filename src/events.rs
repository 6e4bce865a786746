//! Integer notification variables with change callbacks
//!
//! The hotkey subsystem listens on [`KEY_PRESSED`] and [`GLOBAL_KEY_PRESSED`]
//! and publishes resolved actions on [`KEY_ACTION`]. Hosts provide an
//! [`EventBus`]; [`VarBus`] is a small in-process implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Key code pressed while a window has focus
pub const KEY_PRESSED: &str = "key-pressed";
/// Key code grabbed system-wide
pub const GLOBAL_KEY_PRESSED: &str = "global-key-pressed";
/// Raw [`ActionId`](crate::keymap::ActionId) resolved from a key press
pub const KEY_ACTION: &str = "key-action";

/// Handle returned by [`EventBus::add_callback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

/// Callback invoked with the bus and the new value of a variable
pub type IntegerCallback = Arc<dyn Fn(&dyn EventBus, i64) + Send + Sync>;

/// Notification mechanism the hotkey subsystem is plugged into
pub trait EventBus: Send + Sync {
    /// Declare an integer variable (no-op if it already exists)
    fn create_integer(&self, name: &str);

    /// Run `callback` every time `name` is set
    fn add_callback(&self, name: &str, callback: IntegerCallback) -> CallbackId;

    /// Detach a callback; returns false if it was not registered
    fn del_callback(&self, name: &str, id: CallbackId) -> bool;

    /// Set a variable and notify its callbacks
    fn set_integer(&self, name: &str, value: i64);
}

#[derive(Default)]
struct Variable {
    value: i64,
    callbacks: Vec<(CallbackId, IntegerCallback)>,
}

/// In-process [`EventBus`]
///
/// Callbacks run synchronously on the thread calling [`EventBus::set_integer`],
/// outside the internal lock, so a callback may set other variables.
#[derive(Default)]
pub struct VarBus {
    vars: Mutex<HashMap<String, Variable>>,
    next_id: AtomicU64,
}

impl VarBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a variable, `None` if it was never created or set
    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.vars.lock().get(name).map(|var| var.value)
    }

    /// Number of callbacks attached to a variable
    pub fn callback_count(&self, name: &str) -> usize {
        self.vars
            .lock()
            .get(name)
            .map_or(0, |var| var.callbacks.len())
    }
}

impl fmt::Debug for VarBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars = self.vars.lock();
        let mut map = f.debug_map();
        for (name, var) in vars.iter() {
            map.entry(name, &(var.value, var.callbacks.len()));
        }
        map.finish()
    }
}

impl EventBus for VarBus {
    fn create_integer(&self, name: &str) {
        self.vars.lock().entry(name.to_string()).or_default();
    }

    fn add_callback(&self, name: &str, callback: IntegerCallback) -> CallbackId {
        let id = CallbackId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.vars
            .lock()
            .entry(name.to_string())
            .or_default()
            .callbacks
            .push((id, callback));
        id
    }

    fn del_callback(&self, name: &str, id: CallbackId) -> bool {
        let mut vars = self.vars.lock();
        let Some(var) = vars.get_mut(name) else {
            return false;
        };
        let before = var.callbacks.len();
        var.callbacks.retain(|(cb_id, _)| *cb_id != id);
        var.callbacks.len() != before
    }

    fn set_integer(&self, name: &str, value: i64) {
        let callbacks: Vec<IntegerCallback> = {
            let mut vars = self.vars.lock();
            let var = vars.entry(name.to_string()).or_default();
            var.value = value;
            var.callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };

        for callback in callbacks {
            callback(self as &dyn EventBus, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let bus = VarBus::new();
        assert_eq!(bus.get_integer("x"), None);
        bus.create_integer("x");
        assert_eq!(bus.get_integer("x"), Some(0));
        bus.set_integer("x", 42);
        assert_eq!(bus.get_integer("x"), Some(42));
    }

    #[test]
    fn test_callbacks_receive_values() {
        let bus = VarBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bus.add_callback("x", Arc::new(move |_: &dyn EventBus, value: i64| {
            sink.lock().push(value)
        }));

        bus.set_integer("x", 1);
        bus.set_integer("y", 5);
        bus.set_integer("x", 2);
        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[test]
    fn test_callback_can_set_other_variable() {
        let bus = VarBus::new();
        bus.add_callback("in", Arc::new(|bus: &dyn EventBus, value: i64| {
            bus.set_integer("out", value * 2)
        }));
        bus.set_integer("in", 21);
        assert_eq!(bus.get_integer("out"), Some(42));
    }

    #[test]
    fn test_del_callback() {
        let bus = VarBus::new();
        let id = bus.add_callback("x", Arc::new(|_: &dyn EventBus, _: i64| {}));
        assert_eq!(bus.callback_count("x"), 1);
        assert!(bus.del_callback("x", id));
        assert!(!bus.del_callback("x", id));
        assert!(!bus.del_callback("nope", id));
        assert_eq!(bus.callback_count("x"), 0);
    }
}
