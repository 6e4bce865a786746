//! Display names for keys that have no printable character

use super::types::base;

/// A named, non-printable key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedKey {
    pub name: &'static str,
    pub value: u32,
}

const fn key(name: &'static str, value: u32) -> NamedKey {
    NamedKey { name, value }
}

/// All named keys. *MUST* stay sorted in ASCII order (binary searched)
pub const NAMED_KEYS: &[NamedKey] = &[
    key("Backspace", base::BACKSPACE),
    key("Browser Back", base::BROWSER_BACK),
    key("Browser Favorites", base::BROWSER_FAVORITES),
    key("Browser Forward", base::BROWSER_FORWARD),
    key("Browser Home", base::BROWSER_HOME),
    key("Browser Refresh", base::BROWSER_REFRESH),
    key("Browser Search", base::BROWSER_SEARCH),
    key("Browser Stop", base::BROWSER_STOP),
    key("Delete", base::DELETE),
    key("Down", base::DOWN),
    key("End", base::END),
    key("Enter", base::ENTER),
    key("Esc", base::ESC),
    key("F1", base::F1),
    key("F10", base::F10),
    key("F11", base::F11),
    key("F12", base::F12),
    key("F2", base::F2),
    key("F3", base::F3),
    key("F4", base::F4),
    key("F5", base::F5),
    key("F6", base::F6),
    key("F7", base::F7),
    key("F8", base::F8),
    key("F9", base::F9),
    key("Home", base::HOME),
    key("Insert", base::INSERT),
    key("Left", base::LEFT),
    key("Media Next Track", base::MEDIA_NEXT_TRACK),
    key("Media Play Pause", base::MEDIA_PLAY_PAUSE),
    key("Media Prev Track", base::MEDIA_PREV_TRACK),
    key("Media Stop", base::MEDIA_STOP),
    key("Menu", base::MENU),
    key("Mouse Wheel Down", base::MOUSE_WHEEL_DOWN),
    key("Mouse Wheel Left", base::MOUSE_WHEEL_LEFT),
    key("Mouse Wheel Right", base::MOUSE_WHEEL_RIGHT),
    key("Mouse Wheel Up", base::MOUSE_WHEEL_UP),
    key("Page Down", base::PAGE_DOWN),
    key("Page Up", base::PAGE_UP),
    key("Right", base::RIGHT),
    key("Space", base::SPACE),
    key("Tab", base::TAB),
    key("Unset", base::UNSET),
    key("Up", base::UP),
    key("Volume Down", base::VOLUME_DOWN),
    key("Volume Mute", base::VOLUME_MUTE),
    key("Volume Up", base::VOLUME_UP),
];

/// Exact, case-sensitive lookup of a key name
pub fn value_for_name(name: &str) -> Option<u32> {
    NAMED_KEYS
        .binary_search_by(|entry| entry.name.cmp(name))
        .ok()
        .map(|idx| NAMED_KEYS[idx].value)
}

/// Name of a base key value, first match wins
pub fn name_for_value(value: u32) -> Option<&'static str> {
    NAMED_KEYS
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.name)
}
