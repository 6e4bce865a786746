//! Conversion between key-combination strings and key codes
//!
//! Grammar: `(<Modifier>("-"|"+"))* <Key>` where modifiers are matched
//! case-insensitively and `<Key>` is either a name from
//! [`NAMED_KEYS`](super::keys::NAMED_KEYS) (exact case) or one literal character.
//!
//! The canonical form always lists modifiers as `Ctrl+Alt+Shift+Meta+Command+`.

use std::str::FromStr;

use super::error::KeymapError;
use super::keys;
use super::types::{KeyCode, Modifiers};

fn is_delimiter(c: char) -> bool {
    c == '-' || c == '+'
}

/// Parse a key-combination string like "Ctrl+Shift+F1"
///
/// Unknown modifier segments are ignored. An unknown key name fails with
/// [`KeymapError::InvalidKeyName`]. "Unset" yields [`KeyCode::UNSET`] no matter
/// which modifiers precede it.
pub fn parse_key_string(text: &str) -> Result<KeyCode, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut rest = text;

    // A delimiter in first position starts the key itself ("+", "Ctrl++")
    while let Some(len) = rest.find(is_delimiter).filter(|&len| len > 0) {
        if let Some(modifier) = Modifiers::from_name(&rest[..len]) {
            mods |= modifier;
        }
        rest = &rest[len + 1..];
    }

    let base = keys::value_for_name(rest)
        .or_else(|| single_char(rest).map(u32::from))
        .ok_or_else(|| KeymapError::InvalidKeyName(text.to_string()))?;

    let code = KeyCode::new(base, Modifiers::NONE);
    if code.is_unset() {
        return Ok(KeyCode::UNSET);
    }
    Ok(code.with_modifiers(mods))
}

/// The only character of `s`, if it holds exactly one printable character
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Some(c),
        _ => None,
    }
}

/// Format a key code in its canonical form
///
/// Fails with [`KeymapError::EncodingError`] when the base value is neither a
/// named key nor a Unicode scalar value.
pub fn format_key_code(code: KeyCode) -> Result<String, KeymapError> {
    let base = code.base();
    let mut out = code.modifiers().to_string();

    match keys::name_for_value(base) {
        Some(name) => out.push_str(name),
        None => {
            let c = char::from_u32(base).ok_or(KeymapError::EncodingError(code.raw()))?;
            out.push(c);
        }
    }
    Ok(out)
}

/// Rewrite a key-combination string in canonical form
pub fn canonicalize(text: &str) -> Result<String, KeymapError> {
    format_key_code(parse_key_string(text)?)
}

impl FromStr for KeyCode {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_string(s)
    }
}

impl KeyCode {
    /// Canonical display string, see [`format_key_code`]
    pub fn to_canonical(self) -> Result<String, KeymapError> {
        format_key_code(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::keys::NAMED_KEYS;
    use crate::keymap::types::base;

    #[test]
    fn test_parse_single_char() {
        assert_eq!(parse_key_string("a").unwrap(), KeyCode::char('a'));
        assert_eq!(parse_key_string("A").unwrap(), KeyCode::char('A'));
        assert_eq!(parse_key_string("é").unwrap(), KeyCode::char('é'));
    }

    #[test]
    fn test_parse_with_modifiers() {
        let code = parse_key_string("Ctrl+Shift+F1").unwrap();
        assert_eq!(code.base(), base::F1);
        assert_eq!(code.modifiers(), Modifiers::CTRL | Modifiers::SHIFT);
    }

    #[test]
    fn test_parse_modifiers_case_insensitive_and_dash() {
        let a = parse_key_string("ctrl-alt-Delete").unwrap();
        let b = parse_key_string("CTRL+ALT+Delete").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.modifiers(), Modifiers::CTRL | Modifiers::ALT);
    }

    #[test]
    fn test_parse_unknown_modifier_ignored() {
        let code = parse_key_string("Hyper+x").unwrap();
        assert_eq!(code, KeyCode::char('x'));
    }

    #[test]
    fn test_parse_named_key_is_case_sensitive() {
        assert!(parse_key_string("Space").is_ok());
        assert!(matches!(
            parse_key_string("space"),
            Err(KeymapError::InvalidKeyName(_))
        ));
    }

    #[test]
    fn test_parse_delimiter_as_key() {
        assert_eq!(parse_key_string("+").unwrap(), KeyCode::char('+'));
        assert_eq!(parse_key_string("-").unwrap(), KeyCode::char('-'));
        let code = parse_key_string("Ctrl++").unwrap();
        assert_eq!(code, KeyCode::new('+' as u32, Modifiers::CTRL));
        let code = parse_key_string("Alt+-").unwrap();
        assert_eq!(code, KeyCode::new('-' as u32, Modifiers::ALT));
    }

    #[test]
    fn test_parse_failures() {
        for bad in ["", "Ctrl+Nonsense", "ab", "Ctrl+", "\u{7}", "Shift+\t"] {
            assert!(
                matches!(parse_key_string(bad), Err(KeymapError::InvalidKeyName(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_parse_unset_drops_modifiers() {
        assert_eq!(parse_key_string("Unset").unwrap(), KeyCode::UNSET);
        assert_eq!(parse_key_string("Ctrl+Unset").unwrap(), KeyCode::UNSET);
    }

    #[test]
    fn test_format_modifier_order() {
        let a = parse_key_string("Shift+Ctrl+F1").unwrap();
        let b = parse_key_string("Ctrl+Shift+F1").unwrap();
        assert_eq!(format_key_code(a).unwrap(), "Ctrl+Shift+F1");
        assert_eq!(format_key_code(b).unwrap(), "Ctrl+Shift+F1");

        let all = parse_key_string("command-meta-shift-alt-ctrl-q").unwrap();
        assert_eq!(
            format_key_code(all).unwrap(),
            "Ctrl+Alt+Shift+Meta+Command+q"
        );
    }

    #[test]
    fn test_format_multibyte_chars() {
        for c in ['a', 'ß', '€', '𝄞'] {
            let text = format_key_code(KeyCode::char(c)).unwrap();
            assert_eq!(text, c.to_string());
            assert_eq!(text.len(), c.len_utf8());
        }
    }

    #[test]
    fn test_format_space_uses_name() {
        assert_eq!(format_key_code(KeyCode::char(' ')).unwrap(), "Space");
        assert_eq!(parse_key_string(" ").unwrap(), KeyCode::char(' '));
    }

    #[test]
    fn test_format_unrepresentable() {
        for raw in [0x00D800, 0x110000, 0x1F_FFFF, 0x00FF_FFFF] {
            assert!(matches!(
                format_key_code(KeyCode::from_raw(raw)),
                Err(KeymapError::EncodingError(r)) if r == raw
            ));
        }
    }

    #[test]
    fn test_named_keys_round_trip() {
        for entry in NAMED_KEYS {
            let code = parse_key_string(entry.name).unwrap();
            assert_eq!(format_key_code(code).unwrap(), entry.name);
        }
    }

    #[test]
    fn test_printable_chars_round_trip() {
        let printable = (0x20u32..0x3000)
            .chain(0x1F300..0x1F400)
            .filter_map(char::from_u32)
            .filter(|c| !c.is_control());

        for c in printable {
            let code = parse_key_string(&c.to_string()).unwrap();
            let text = format_key_code(code).unwrap();
            assert_eq!(parse_key_string(&text).unwrap(), code, "{:?}", c);
            assert_eq!(code.base(), c as u32);
        }
    }

    #[test]
    fn test_parse_is_idempotent_through_format() {
        for text in [
            "a",
            "Shift+Ctrl+F1",
            "meta-Page Down",
            "Alt+Command++",
            "ctrl--",
            "Volume Up",
            "Ctrl+Shift+Space",
            "Ctrl+€",
        ] {
            let code = parse_key_string(text).unwrap();
            let again = parse_key_string(&format_key_code(code).unwrap()).unwrap();
            assert_eq!(again, code, "{}", text);
        }
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("shift-ctrl-Left").unwrap(), "Ctrl+Shift+Left");
        assert!(canonicalize("Ctrl+Nope").is_err());
    }
}
