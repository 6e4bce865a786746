//! Subsystem lifecycle tests

mod common;

use std::sync::Arc;

use common::{record_actions, start};
use hotkeys::events::{EventBus, GLOBAL_KEY_PRESSED, KEY_PRESSED};
use hotkeys::keymap::default_config;
use hotkeys::subsystem;
use hotkeys::{ActionId, HotkeyConfig, Hotkeys, KeyCode, Namespace, VarBus};

#[test]
fn test_default_configuration_dispatches() {
    let bus = Arc::new(VarBus::new());
    let hotkeys = Hotkeys::init(bus.clone(), &default_config()).unwrap();
    let seen = record_actions(&bus);

    bus.set_integer(KEY_PRESSED, ' ' as i64);
    assert_eq!(*seen.lock(), vec![ActionId::PlayPause]);
    assert!(hotkeys.report().is_clean());
}

#[test]
fn test_deinit_stops_dispatch() {
    let (bus, hotkeys) = start(&[("key-play", "Space"), ("global-key-stop", "s")]);
    let seen = record_actions(&bus);

    bus.set_integer(KEY_PRESSED, ' ' as i64);
    hotkeys.deinit();
    bus.set_integer(KEY_PRESSED, ' ' as i64);
    bus.set_integer(GLOBAL_KEY_PRESSED, 's' as i64);

    assert_eq!(*seen.lock(), vec![ActionId::Play]);
}

#[test]
fn test_reinit_after_deinit_uses_new_configuration() {
    let (bus, hotkeys) = start(&[("key-play", "Space")]);
    let seen = record_actions(&bus);
    subsystem::deinit(Some(hotkeys));

    let config = HotkeyConfig::from_pairs([("key-pause", "Space")]);
    let hotkeys = Hotkeys::init(bus.clone(), &config).unwrap();
    bus.set_integer(KEY_PRESSED, ' ' as i64);

    assert_eq!(*seen.lock(), vec![ActionId::Pause]);
    assert_eq!(bus.callback_count(KEY_PRESSED), 1);
    drop(hotkeys);
    assert_eq!(bus.callback_count(KEY_PRESSED), 0);
}

#[test]
fn test_deinit_without_handle_is_noop() {
    subsystem::deinit(None);
}

#[test]
fn test_empty_configuration_binds_nothing() {
    let (bus, hotkeys) = start(&[]);
    let seen = record_actions(&bus);

    for c in ['a', ' ', 'q'] {
        bus.set_integer(KEY_PRESSED, c as i64);
        bus.set_integer(GLOBAL_KEY_PRESSED, c as i64);
    }

    assert!(seen.lock().is_empty());
    assert!(hotkeys.map(Namespace::Local).is_empty());
    assert!(hotkeys.map(Namespace::Global).is_empty());
}

#[test]
fn test_unset_entries_are_skipped() {
    let (_bus, hotkeys) = start(&[("key-play", "Unset\tSpace")]);
    assert!(hotkeys.report().is_clean());
    assert_eq!(hotkeys.resolve(KeyCode::UNSET, Namespace::Local), None);
    assert_eq!(
        hotkeys.keys_for(ActionId::Play, Namespace::Local),
        vec![KeyCode::char(' ')]
    );
}
