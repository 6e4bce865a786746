//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use hotkeys::events::{EventBus, IntegerCallback, KEY_ACTION};
use hotkeys::{ActionId, HotkeyConfig, Hotkeys, VarBus};
use parking_lot::Mutex;

/// Start a subsystem on a fresh bus from `(config key, value)` pairs
pub fn start(pairs: &[(&str, &str)]) -> (Arc<VarBus>, Hotkeys) {
    let bus = Arc::new(VarBus::new());
    let config = HotkeyConfig::from_pairs(pairs.iter().copied());
    let hotkeys = Hotkeys::init(bus.clone(), &config).expect("init should succeed");
    (bus, hotkeys)
}

/// Record every action published on "key-action"
pub fn record_actions(bus: &VarBus) -> Arc<Mutex<Vec<ActionId>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback: IntegerCallback = Arc::new(move |_: &dyn EventBus, raw: i64| {
        let action = u32::try_from(raw)
            .ok()
            .and_then(ActionId::from_raw)
            .unwrap_or_default();
        sink.lock().push(action);
    });
    bus.add_callback(KEY_ACTION, callback);
    seen
}
