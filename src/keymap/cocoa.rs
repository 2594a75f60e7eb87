//! Key map for the Cocoa-style backend (macOS virtual key codes).
//!
//! macOS key codes identify the physical position on a US keyboard, not
//! the key the active layout actually produces. Printable keys are
//! therefore classified from the decoded character first, and the key
//! code is only the fallback for non-printable keys.

use crate::input::Key;

pub const KEY_RETURN: u16 = 0x24;
pub const KEY_TAB: u16 = 0x30;
pub const KEY_SPACE: u16 = 0x31;
pub const KEY_DELETE: u16 = 0x33;
pub const KEY_ESCAPE: u16 = 0x35;
pub const KEY_COMMAND: u16 = 0x37;
pub const KEY_SHIFT: u16 = 0x38;
pub const KEY_CAPS_LOCK: u16 = 0x39;
pub const KEY_OPTION: u16 = 0x3A;
pub const KEY_CONTROL: u16 = 0x3B;
pub const KEY_RIGHT_SHIFT: u16 = 0x3C;
pub const KEY_RIGHT_OPTION: u16 = 0x3D;
pub const KEY_RIGHT_CONTROL: u16 = 0x3E;
pub const KEY_F17: u16 = 0x40;
pub const KEY_VOLUME_UP: u16 = 0x48;
pub const KEY_VOLUME_DOWN: u16 = 0x49;
pub const KEY_MUTE: u16 = 0x4A;
pub const KEY_F18: u16 = 0x4F;
pub const KEY_F19: u16 = 0x50;
pub const KEY_F20: u16 = 0x5A;
pub const KEY_F5: u16 = 0x60;
pub const KEY_F6: u16 = 0x61;
pub const KEY_F7: u16 = 0x62;
pub const KEY_F3: u16 = 0x63;
pub const KEY_F8: u16 = 0x64;
pub const KEY_F9: u16 = 0x65;
pub const KEY_F11: u16 = 0x67;
pub const KEY_F13: u16 = 0x69;
pub const KEY_F16: u16 = 0x6A;
pub const KEY_F14: u16 = 0x6B;
pub const KEY_F10: u16 = 0x6D;
pub const KEY_F12: u16 = 0x6F;
pub const KEY_F15: u16 = 0x71;
pub const KEY_HELP: u16 = 0x72;
pub const KEY_HOME: u16 = 0x73;
pub const KEY_PAGE_UP: u16 = 0x74;
pub const KEY_FORWARD_DELETE: u16 = 0x75;
pub const KEY_F4: u16 = 0x76;
pub const KEY_END: u16 = 0x77;
pub const KEY_F2: u16 = 0x78;
pub const KEY_PAGE_DOWN: u16 = 0x79;
pub const KEY_F1: u16 = 0x7A;
pub const KEY_LEFT_ARROW: u16 = 0x7B;
pub const KEY_RIGHT_ARROW: u16 = 0x7C;
pub const KEY_DOWN_ARROW: u16 = 0x7D;
pub const KEY_UP_ARROW: u16 = 0x7E;

/// Maps a macOS key notification to its normalized key.
///
/// The decoded character wins for alphanumerics and punctuation; the key
/// code is the fallback for everything non-printable. Unrecognized input
/// yields [`Key::Invalid`].
pub fn map_key(key_code: u16, ch: Option<char>) -> Key {
    if let Some(ch) = ch {
        if let Some(key) = Key::from_ascii_letter(ch) {
            return key;
        }
        if let Some(key) = Key::from_ascii_digit(ch) {
            return key;
        }
        match ch {
            ',' => return Key::OemComma,
            '.' => return Key::OemPeriod,
            _ => {}
        }
    }

    match key_code {
        KEY_F1 => Key::F1,
        KEY_F2 => Key::F2,
        KEY_F3 => Key::F3,
        KEY_F4 => Key::F4,
        KEY_F5 => Key::F5,
        KEY_F6 => Key::F6,
        KEY_F7 => Key::F7,
        KEY_F8 => Key::F8,
        KEY_F9 => Key::F9,
        KEY_F10 => Key::F10,
        KEY_F11 => Key::F11,
        KEY_F12 => Key::F12,
        KEY_F13 => Key::F13,
        KEY_F14 => Key::F14,
        KEY_F15 => Key::F15,
        KEY_F16 => Key::F16,
        KEY_F17 => Key::F17,
        KEY_F18 => Key::F18,
        KEY_F19 => Key::F19,
        KEY_F20 => Key::F20,
        KEY_RETURN => Key::Return,
        KEY_END => Key::End,
        KEY_HOME => Key::Home,
        KEY_PAGE_UP => Key::Prior,
        KEY_PAGE_DOWN => Key::Next,
        KEY_LEFT_ARROW => Key::Left,
        KEY_RIGHT_ARROW => Key::Right,
        KEY_UP_ARROW => Key::Up,
        KEY_DOWN_ARROW => Key::Down,
        KEY_SPACE => Key::Space,
        KEY_TAB => Key::Tab,
        KEY_ESCAPE => Key::Escape,
        KEY_DELETE | KEY_FORWARD_DELETE => Key::Delete,
        KEY_HELP => Key::Help,
        KEY_COMMAND => Key::LWin,
        KEY_CAPS_LOCK => Key::Capital,
        KEY_SHIFT => Key::Shift,
        KEY_CONTROL => Key::Control,
        KEY_OPTION => Key::Menu,
        KEY_RIGHT_SHIFT => Key::RShift,
        KEY_RIGHT_CONTROL => Key::RControl,
        KEY_RIGHT_OPTION => Key::RMenu,
        KEY_MUTE => Key::VolumeMute,
        KEY_VOLUME_UP => Key::VolumeUp,
        KEY_VOLUME_DOWN => Key::VolumeDown,
        _ => Key::Invalid,
    }
}
