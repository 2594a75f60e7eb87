//! Key map for the X11-style backend (keysyms).
//!
//! Keysyms for printable keys already reflect the active layout, so the
//! decoded character and the keysym ranges agree for alphanumerics; the
//! character channel still takes priority when present, matching the
//! other decoded-character backend.

use crate::input::Key;

pub const XK_SPACE: u32 = 0x0020;
pub const XK_0: u32 = 0x0030;
pub const XK_9: u32 = 0x0039;
pub const XK_A_UPPER: u32 = 0x0041;
pub const XK_Z_UPPER: u32 = 0x005A;
pub const XK_A_LOWER: u32 = 0x0061;
pub const XK_Z_LOWER: u32 = 0x007A;
pub const XK_BACKSPACE: u32 = 0xFF08;
pub const XK_TAB: u32 = 0xFF09;
pub const XK_CLEAR: u32 = 0xFF0B;
pub const XK_RETURN: u32 = 0xFF0D;
pub const XK_ESCAPE: u32 = 0xFF1B;
pub const XK_HOME: u32 = 0xFF50;
pub const XK_LEFT: u32 = 0xFF51;
pub const XK_UP: u32 = 0xFF52;
pub const XK_RIGHT: u32 = 0xFF53;
pub const XK_DOWN: u32 = 0xFF54;
pub const XK_PRIOR: u32 = 0xFF55;
pub const XK_NEXT: u32 = 0xFF56;
pub const XK_END: u32 = 0xFF57;
pub const XK_INSERT: u32 = 0xFF63;
pub const XK_HELP: u32 = 0xFF6A;
pub const XK_KP_SPACE: u32 = 0xFF80;
pub const XK_KP_0: u32 = 0xFFB0;
pub const XK_KP_9: u32 = 0xFFB9;
pub const XK_F1: u32 = 0xFFBE;
pub const XK_F24: u32 = 0xFFD5;
pub const XK_SHIFT_L: u32 = 0xFFE1;
pub const XK_SHIFT_R: u32 = 0xFFE2;
pub const XK_CONTROL_L: u32 = 0xFFE3;
pub const XK_CONTROL_R: u32 = 0xFFE4;
pub const XK_DELETE: u32 = 0xFFFF;

/// Maps an X11 keysym (plus the decoded character, when the lookup
/// produced one) to its normalized key.
///
/// Total over the keysym space: anything unrecognized yields
/// [`Key::Invalid`].
pub fn map_key(keysym: u32, ch: Option<char>) -> Key {
    if let Some(ch) = ch {
        if let Some(key) = Key::from_ascii_letter(ch) {
            return key;
        }
        if let Some(key) = Key::from_ascii_digit(ch) {
            return key;
        }
    }

    match keysym {
        XK_0..=XK_9 => Key::from_ascii_digit((b'0' + (keysym - XK_0) as u8) as char)
            .unwrap_or(Key::Invalid),
        XK_KP_0..=XK_KP_9 => Key::numpad((keysym - XK_KP_0) as u8).unwrap_or(Key::Invalid),
        XK_A_LOWER..=XK_Z_LOWER => {
            Key::from_ascii_letter((b'a' + (keysym - XK_A_LOWER) as u8) as char)
                .unwrap_or(Key::Invalid)
        }
        XK_A_UPPER..=XK_Z_UPPER => {
            Key::from_ascii_letter((b'A' + (keysym - XK_A_UPPER) as u8) as char)
                .unwrap_or(Key::Invalid)
        }
        XK_F1..=XK_F24 => Key::function((keysym - XK_F1 + 1) as u8).unwrap_or(Key::Invalid),
        XK_BACKSPACE => Key::Back,
        XK_TAB => Key::Tab,
        XK_CLEAR => Key::Clear,
        XK_RETURN => Key::Return,
        XK_SHIFT_L | XK_SHIFT_R => Key::Shift,
        XK_CONTROL_L | XK_CONTROL_R => Key::Control,
        XK_ESCAPE => Key::Escape,
        XK_SPACE | XK_KP_SPACE => Key::Space,
        XK_END => Key::End,
        XK_HOME => Key::Home,
        XK_LEFT => Key::Left,
        XK_RIGHT => Key::Right,
        XK_UP => Key::Up,
        XK_DOWN => Key::Down,
        XK_PRIOR => Key::Prior,
        XK_NEXT => Key::Next,
        XK_INSERT => Key::Insert,
        XK_DELETE => Key::Delete,
        XK_HELP => Key::Help,
        _ => Key::Invalid,
    }
}

/// Side-specific variant for the paired modifier keysyms, so the pump
/// can deliver both the generic and the sided event like the Win32-style
/// backend does. `None` for everything else.
pub fn modifier_side(keysym: u32) -> Option<Key> {
    match keysym {
        XK_SHIFT_L => Some(Key::LShift),
        XK_SHIFT_R => Some(Key::RShift),
        XK_CONTROL_L => Some(Key::LControl),
        XK_CONTROL_R => Some(Key::RControl),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keysym_ranges_map_contiguously() {
        assert_eq!(map_key(XK_0, None), Key::Digit0);
        assert_eq!(map_key(XK_9, None), Key::Digit9);
        assert_eq!(map_key(XK_A_LOWER, None), Key::A);
        assert_eq!(map_key(XK_Z_UPPER, None), Key::Z);
        assert_eq!(map_key(XK_KP_0, None), Key::Numpad0);
        assert_eq!(map_key(XK_KP_9, None), Key::Numpad9);
        assert_eq!(map_key(XK_F1, None), Key::F1);
        assert_eq!(map_key(XK_F24, None), Key::F24);
    }

    #[test]
    fn decoded_char_takes_priority() {
        // A layout where the keysym lookup decoded to a letter should
        // classify from the character.
        assert_eq!(map_key(0xFFFFFF, Some('m')), Key::M);
        assert_eq!(map_key(0xFFFFFF, Some('7')), Key::Digit7);
    }

    #[test]
    fn discrete_keysyms_map() {
        assert_eq!(map_key(XK_BACKSPACE, None), Key::Back);
        assert_eq!(map_key(XK_RETURN, None), Key::Return);
        assert_eq!(map_key(XK_SHIFT_L, None), Key::Shift);
        assert_eq!(map_key(XK_SHIFT_R, None), Key::Shift);
        assert_eq!(map_key(XK_KP_SPACE, None), Key::Space);
        assert_eq!(map_key(XK_DELETE, None), Key::Delete);
    }

    #[test]
    fn modifier_sides_resolve() {
        assert_eq!(modifier_side(XK_SHIFT_L), Some(Key::LShift));
        assert_eq!(modifier_side(XK_CONTROL_R), Some(Key::RControl));
        assert_eq!(modifier_side(XK_RETURN), None);
    }

    #[test]
    fn unmapped_keysyms_are_invalid() {
        assert_eq!(map_key(0x0021, None), Key::Invalid); // '!'
        assert_eq!(map_key(0xFF00, None), Key::Invalid);
        assert_eq!(map_key(u32::MAX, None), Key::Invalid);
    }
}
