//! Key map for the Win32-style backend (virtual-key codes).

use crate::input::Key;

/// `VK_SHIFT`
pub const VK_SHIFT: u8 = 0x10;
/// `VK_CONTROL`
pub const VK_CONTROL: u8 = 0x11;
/// `VK_MENU`
pub const VK_MENU: u8 = 0x12;
/// `VK_LSHIFT`
pub const VK_LSHIFT: u8 = 0xA0;
/// `VK_RSHIFT`
pub const VK_RSHIFT: u8 = 0xA1;
/// `VK_LCONTROL`
pub const VK_LCONTROL: u8 = 0xA2;
/// `VK_RCONTROL`
pub const VK_RCONTROL: u8 = 0xA3;
/// `VK_LMENU`
pub const VK_LMENU: u8 = 0xA4;
/// `VK_RMENU`
pub const VK_RMENU: u8 = 0xA5;

/// Which side of a paired modifier key a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Derives the side from the extended-key flag of a key notification.
    /// Right-hand Control and Menu set the flag; their left-hand twins
    /// do not.
    pub fn from_extended(extended: bool) -> Self {
        if extended { Side::Right } else { Side::Left }
    }
}

// Total map over the whole virtual-key byte, one entry per code.
// Unassigned and reserved codes map to Invalid.
#[rustfmt::skip]
const VK_TABLE: [Key; 256] = [
    // 0x00-0x07
    Key::Invalid, Key::LButton, Key::RButton, Key::Cancel,
    Key::MButton, Key::XButton1, Key::XButton2, Key::Invalid,
    // 0x08-0x0F
    Key::Back, Key::Tab, Key::Invalid, Key::Invalid,
    Key::Clear, Key::Return, Key::Invalid, Key::Invalid,
    // 0x10-0x17
    Key::Shift, Key::Control, Key::Menu, Key::Pause,
    Key::Capital, Key::Kana, Key::Invalid, Key::Junja,
    // 0x18-0x1F
    Key::Final, Key::Hanja, Key::Invalid, Key::Escape,
    Key::Convert, Key::Nonconvert, Key::Accept, Key::Modechange,
    // 0x20-0x27
    Key::Space, Key::Prior, Key::Next, Key::End,
    Key::Home, Key::Left, Key::Up, Key::Right,
    // 0x28-0x2F
    Key::Down, Key::Select, Key::Print, Key::Exec,
    Key::Snapshot, Key::Insert, Key::Delete, Key::Help,
    // 0x30-0x39: top-row digits
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3,
    Key::Digit4, Key::Digit5, Key::Digit6, Key::Digit7,
    Key::Digit8, Key::Digit9,
    // 0x3A-0x40
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid,
    // 0x41-0x5A: letters
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H,
    Key::I, Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P,
    Key::Q, Key::R, Key::S, Key::T, Key::U, Key::V, Key::W, Key::X,
    Key::Y, Key::Z,
    // 0x5B-0x5F
    Key::LWin, Key::RWin, Key::Apps, Key::Invalid, Key::Sleep,
    // 0x60-0x69: numpad digits
    Key::Numpad0, Key::Numpad1, Key::Numpad2, Key::Numpad3,
    Key::Numpad4, Key::Numpad5, Key::Numpad6, Key::Numpad7,
    Key::Numpad8, Key::Numpad9,
    // 0x6A-0x6F
    Key::Multiply, Key::Add, Key::Separator, Key::Subtract,
    Key::Decimal, Key::Divide,
    // 0x70-0x87: function keys
    Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6,
    Key::F7, Key::F8, Key::F9, Key::F10, Key::F11, Key::F12,
    Key::F13, Key::F14, Key::F15, Key::F16, Key::F17, Key::F18,
    Key::F19, Key::F20, Key::F21, Key::F22, Key::F23, Key::F24,
    // 0x88-0x8F
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    // 0x90-0x91
    Key::Numlock, Key::Scroll,
    // 0x92-0x9F
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid,
    // 0xA0-0xA5: side-specific modifiers
    Key::LShift, Key::RShift, Key::LControl, Key::RControl,
    Key::LMenu, Key::RMenu,
    // 0xA6-0xAC: browser keys
    Key::BrowserBack, Key::BrowserForward, Key::BrowserRefresh,
    Key::BrowserStop, Key::BrowserSearch, Key::BrowserFavorites,
    Key::BrowserHome,
    // 0xAD-0xB7: media and launch keys
    Key::VolumeMute, Key::VolumeDown, Key::VolumeUp,
    Key::MediaNextTrack, Key::MediaPrevTrack, Key::MediaStop,
    Key::MediaPlayPause, Key::LaunchMail, Key::LaunchMediaSelect,
    Key::LaunchApp1, Key::LaunchApp2,
    // 0xB8-0xB9
    Key::Invalid, Key::Invalid,
    // 0xBA-0xC0: OEM punctuation
    Key::Oem1, Key::OemPlus, Key::OemComma, Key::OemMinus,
    Key::OemPeriod, Key::Oem2, Key::Oem3,
    // 0xC1-0xDA
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid,
    // 0xDB-0xDF: more OEM keys
    Key::Oem4, Key::Oem5, Key::Oem6, Key::Oem7, Key::Oem8,
    // 0xE0-0xE5
    Key::Invalid, Key::Invalid, Key::Oem102, Key::Invalid,
    Key::Invalid, Key::Processkey,
    // 0xE6-0xF5
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    Key::Invalid, Key::Invalid, Key::Invalid, Key::Invalid,
    // 0xF6-0xFF
    Key::Attn, Key::Crsel, Key::Exsel, Key::Ereof, Key::Play,
    Key::Zoom, Key::Noname, Key::Pa1, Key::OemClear, Key::Invalid,
];

/// Maps a Win32 virtual-key code to its normalized key.
///
/// Total over the whole byte: unassigned codes yield [`Key::Invalid`].
pub fn vk_to_key(vk: u8) -> Key {
    VK_TABLE[vk as usize]
}

/// Expands a generic modifier notification into its pair of events.
///
/// Shift, Control and Menu arrive with the generic virtual-key code; the
/// side is carried separately (the extended-key flag for Control/Menu,
/// the scancode-resolved code for Shift). Returns `(generic, sided)` so
/// the pump can deliver both, letting callers bind either key. `None`
/// for non-modifier codes.
pub fn expand_modifier(vk: u8, side: Side) -> Option<(Key, Key)> {
    let sided = match (vk, side) {
        (VK_SHIFT, Side::Left) => VK_LSHIFT,
        (VK_SHIFT, Side::Right) => VK_RSHIFT,
        (VK_CONTROL, Side::Left) => VK_LCONTROL,
        (VK_CONTROL, Side::Right) => VK_RCONTROL,
        (VK_MENU, Side::Left) => VK_LMENU,
        (VK_MENU, Side::Right) => VK_RMENU,
        _ => return None,
    };
    Some((vk_to_key(vk), vk_to_key(sided)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_whole_byte() {
        // Totality: every code resolves without panicking, and repeated
        // lookups agree.
        for vk in 0..=255u8 {
            let first = vk_to_key(vk);
            assert_eq!(first, vk_to_key(vk));
        }
    }

    #[test]
    fn well_known_codes_map_exactly() {
        assert_eq!(vk_to_key(0x00), Key::Invalid);
        assert_eq!(vk_to_key(0x01), Key::LButton);
        assert_eq!(vk_to_key(0x0D), Key::Return);
        assert_eq!(vk_to_key(0x1B), Key::Escape);
        assert_eq!(vk_to_key(0x30), Key::Digit0);
        assert_eq!(vk_to_key(0x41), Key::A);
        assert_eq!(vk_to_key(0x5A), Key::Z);
        assert_eq!(vk_to_key(0x60), Key::Numpad0);
        assert_eq!(vk_to_key(0x70), Key::F1);
        assert_eq!(vk_to_key(0x87), Key::F24);
        assert_eq!(vk_to_key(0xA0), Key::LShift);
        assert_eq!(vk_to_key(0xBC), Key::OemComma);
        assert_eq!(vk_to_key(0xE2), Key::Oem102);
        assert_eq!(vk_to_key(0xFE), Key::OemClear);
        assert_eq!(vk_to_key(0xFF), Key::Invalid);
    }

    #[test]
    fn unassigned_gaps_are_invalid() {
        for vk in [0x07u8, 0x0A, 0x3A, 0x5E, 0x88, 0x92, 0xB8, 0xC1, 0xE0, 0xE6] {
            assert_eq!(vk_to_key(vk), Key::Invalid, "vk {vk:#04x}");
        }
    }

    #[test]
    fn modifiers_expand_to_generic_plus_side() {
        assert_eq!(
            expand_modifier(VK_SHIFT, Side::Left),
            Some((Key::Shift, Key::LShift))
        );
        assert_eq!(
            expand_modifier(VK_CONTROL, Side::Right),
            Some((Key::Control, Key::RControl))
        );
        assert_eq!(
            expand_modifier(VK_MENU, Side::Right),
            Some((Key::Menu, Key::RMenu))
        );
        assert_eq!(expand_modifier(0x41, Side::Left), None);
    }

    #[test]
    fn extended_flag_selects_the_right_side() {
        assert_eq!(Side::from_extended(false), Side::Left);
        assert_eq!(Side::from_extended(true), Side::Right);
    }
}
