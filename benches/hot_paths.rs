//! Benchmarks for the hotkey hot paths
//!
//! - parse_key_string / format_key_code (config load, shortcut editors)
//! - build_maps over the default configuration (startup)
//! - BindingMap::lookup and full key-press dispatch (every key press)
//!
//! Run with: cargo bench hot_paths

use std::sync::Arc;

use divan::{black_box, Bencher};
use hotkeys::events::{EventBus, KEY_PRESSED};
use hotkeys::keymap::{build_maps, default_config, format_key_code, parse_key_string};
use hotkeys::{Hotkeys, KeyCode, Modifiers, VarBus};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const KEY_STRINGS: &[&str] = &[
    "a",
    "Space",
    "Ctrl+q",
    "Shift+Ctrl+F1",
    "meta-alt-Mouse Wheel Up",
    "Ctrl+Alt+Shift+Meta+Command+Page Down",
];

#[divan::bench(args = KEY_STRINGS)]
fn parse(text: &str) -> KeyCode {
    parse_key_string(black_box(text)).unwrap_or(KeyCode::UNSET)
}

#[divan::bench(args = KEY_STRINGS)]
fn format(bencher: Bencher, text: &str) {
    let code = parse_key_string(text).unwrap_or(KeyCode::UNSET);
    bencher.bench(|| format_key_code(black_box(code)));
}

#[divan::bench]
fn build_default_maps(bencher: Bencher) {
    let config = default_config();
    bencher.bench(|| build_maps(black_box(&config)));
}

#[divan::bench]
fn lookup_hit(bencher: Bencher) {
    let (maps, _) = build_maps(&default_config());
    let ctrl_q = KeyCode::new('q' as u32, Modifiers::CTRL);
    bencher.bench(|| maps.local.lookup(black_box(ctrl_q)));
}

#[divan::bench]
fn lookup_miss(bencher: Bencher) {
    let (maps, _) = build_maps(&default_config());
    let code = KeyCode::new('q' as u32, Modifiers::META);
    bencher.bench(|| maps.local.lookup(black_box(code)));
}

#[divan::bench]
fn dispatch_key_press(bencher: Bencher) {
    let bus = Arc::new(VarBus::new());
    let Ok(_hotkeys) = Hotkeys::init(bus.clone(), &default_config()) else {
        return;
    };
    bencher.bench(|| bus.set_integer(KEY_PRESSED, black_box(' ' as i64)));
}
