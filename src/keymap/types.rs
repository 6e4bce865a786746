//! Core types for the keymap system: KeyCode, Modifiers and the base key values
//!
//! A [`KeyCode`] packs a base key into the low 24 bits and the modifier
//! flags into the high byte:
//!
//! ```text
//!  31      24 23                      0
//! +----------+-------------------------+
//! | modifiers|        base key         |
//! +----------+-------------------------+
//! ```
//!
//! Printable keys use their Unicode code point as base value. Non-printable
//! keys use values past the end of the Unicode range, so the two never clash.

use std::fmt;

/// Modifier keys as a bitfield, already shifted into [`KeyCode`] position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(0x0100_0000);
    pub const SHIFT: Modifiers = Modifiers(0x0200_0000);
    pub const CTRL: Modifiers = Modifiers(0x0400_0000);
    pub const META: Modifiers = Modifiers(0x0800_0000);
    pub const COMMAND: Modifiers = Modifiers(0x1000_0000);

    /// Every bit reserved for modifiers
    pub const MASK: u32 = 0xFF00_0000;

    /// Modifiers in canonical display order, with their names
    pub const DISPLAY_ORDER: [(Modifiers, &'static str); 5] = [
        (Modifiers::CTRL, "Ctrl"),
        (Modifiers::ALT, "Alt"),
        (Modifiers::SHIFT, "Shift"),
        (Modifiers::META, "Meta"),
        (Modifiers::COMMAND, "Command"),
    ];

    /// Extract the modifier bits of a raw code
    #[inline]
    pub const fn from_code(raw: u32) -> Self {
        Modifiers(raw & Self::MASK)
    }

    /// Match a modifier name case-insensitively ("ctrl", "SHIFT", ...)
    pub fn from_name(name: &str) -> Option<Modifiers> {
        Self::DISPLAY_ORDER
            .iter()
            .find(|(_, display)| display.eq_ignore_ascii_case(name))
            .map(|(mods, _)| *mods)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn command(self) -> bool {
        self.0 & Self::COMMAND.0 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// Writes every held modifier followed by `+`, in canonical order
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mods, name) in Self::DISPLAY_ORDER {
            if self.contains(mods) {
                write!(f, "{}+", name)?;
            }
        }
        Ok(())
    }
}

/// Base values for keys that have no printable character
pub mod base {
    pub const UNSET: u32 = 0x0000_0000;

    pub const BACKSPACE: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const ENTER: u32 = 0x0D;
    pub const ESC: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;

    // First value past the Unicode range (U+10FFFF)
    pub const LEFT: u32 = 0x0021_0000;
    pub const RIGHT: u32 = 0x0022_0000;
    pub const UP: u32 = 0x0023_0000;
    pub const DOWN: u32 = 0x0024_0000;

    pub const F1: u32 = 0x0027_0000;
    pub const F2: u32 = 0x0028_0000;
    pub const F3: u32 = 0x0029_0000;
    pub const F4: u32 = 0x002A_0000;
    pub const F5: u32 = 0x002B_0000;
    pub const F6: u32 = 0x002C_0000;
    pub const F7: u32 = 0x002D_0000;
    pub const F8: u32 = 0x002E_0000;
    pub const F9: u32 = 0x002F_0000;
    pub const F10: u32 = 0x0030_0000;
    pub const F11: u32 = 0x0031_0000;
    pub const F12: u32 = 0x0032_0000;

    pub const HOME: u32 = 0x0033_0000;
    pub const END: u32 = 0x0034_0000;
    pub const INSERT: u32 = 0x0035_0000;
    pub const DELETE: u32 = 0x0036_0000;
    pub const MENU: u32 = 0x0037_0000;
    pub const PAGE_UP: u32 = 0x0039_0000;
    pub const PAGE_DOWN: u32 = 0x003A_0000;

    pub const BROWSER_BACK: u32 = 0x003C_0000;
    pub const BROWSER_FORWARD: u32 = 0x003D_0000;
    pub const BROWSER_REFRESH: u32 = 0x003E_0000;
    pub const BROWSER_STOP: u32 = 0x003F_0000;
    pub const BROWSER_SEARCH: u32 = 0x0040_0000;
    pub const BROWSER_FAVORITES: u32 = 0x0041_0000;
    pub const BROWSER_HOME: u32 = 0x0042_0000;

    pub const VOLUME_MUTE: u32 = 0x0043_0000;
    pub const VOLUME_DOWN: u32 = 0x0044_0000;
    pub const VOLUME_UP: u32 = 0x0045_0000;

    pub const MEDIA_NEXT_TRACK: u32 = 0x0046_0000;
    pub const MEDIA_PREV_TRACK: u32 = 0x0047_0000;
    pub const MEDIA_STOP: u32 = 0x0048_0000;
    pub const MEDIA_PLAY_PAUSE: u32 = 0x0049_0000;

    pub const MOUSE_WHEEL_UP: u32 = 0x00F0_0000;
    pub const MOUSE_WHEEL_DOWN: u32 = 0x00F1_0000;
    pub const MOUSE_WHEEL_LEFT: u32 = 0x00F2_0000;
    pub const MOUSE_WHEEL_RIGHT: u32 = 0x00F3_0000;
}

/// A key with its modifiers, packed into one integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(u32);

impl KeyCode {
    /// Sentinel for "no key"
    pub const UNSET: KeyCode = KeyCode(base::UNSET);

    /// Create a key code from a base value and modifiers
    ///
    /// Modifier bits present in `base_value` are discarded.
    #[inline]
    pub const fn new(base_value: u32, mods: Modifiers) -> Self {
        KeyCode((base_value & !Modifiers::MASK) | mods.bits())
    }

    /// Create a key code for a character with no modifiers
    #[inline]
    pub const fn char(c: char) -> Self {
        KeyCode(c as u32)
    }

    /// Wrap a raw integer as delivered by key-press notifications
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        KeyCode(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The key without its modifiers
    #[inline]
    pub const fn base(self) -> u32 {
        self.0 & !Modifiers::MASK
    }

    #[inline]
    pub const fn modifiers(self) -> Modifiers {
        Modifiers::from_code(self.0)
    }

    #[inline]
    pub const fn with_modifiers(self, mods: Modifiers) -> Self {
        KeyCode(self.0 | mods.bits())
    }

    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == base::UNSET
    }
}

impl From<KeyCode> for u32 {
    fn from(code: KeyCode) -> Self {
        code.0
    }
}

impl fmt::LowerHex for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
