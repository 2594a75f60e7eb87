//! Platform-independent key identifiers.

/// Platform-independent key identifier.
///
/// Backend key maps translate their native code space (Win32 virtual-key
/// codes, macOS virtual key codes, X11 keysyms) into this one enumeration.
/// The mapping is total: any native code that has no counterpart here maps
/// to [`Key::Invalid`] rather than failing.
///
/// Modifier keys exist both as generic variants (`Shift`, `Control`, `Menu`)
/// and as side-specific variants (`LShift`/`RShift`, ...). Backends that can
/// tell the sides apart deliver both, so callers may bind either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Unmapped or unrecognized native code.
    Invalid,
    /// Left mouse button.
    LButton,
    /// Right mouse button.
    RButton,
    /// Control-break processing.
    Cancel,
    /// Middle mouse button.
    MButton,
    /// First extra mouse button.
    XButton1,
    /// Second extra mouse button.
    XButton2,
    /// Backspace.
    Back,
    Tab,
    Clear,
    /// Return/Enter.
    Return,
    /// Generic shift (see also `LShift`/`RShift`).
    Shift,
    /// Generic control (see also `LControl`/`RControl`).
    Control,
    /// Generic alt/option (see also `LMenu`/`RMenu`).
    Menu,
    Pause,
    /// Caps lock.
    Capital,
    /// IME Kana/Hangul mode.
    Kana,
    Junja,
    Final,
    /// IME Hanja/Kanji mode.
    Hanja,
    Escape,
    Convert,
    Nonconvert,
    Accept,
    Modechange,
    Space,
    /// Page up.
    Prior,
    /// Page down.
    Next,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Select,
    Print,
    Exec,
    /// Print screen.
    Snapshot,
    Insert,
    Delete,
    Help,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    /// Left OS/command key.
    LWin,
    /// Right OS/command key.
    RWin,
    /// Application/context-menu key.
    Apps,
    Sleep,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    Multiply,
    Add,
    Separator,
    Subtract,
    Decimal,
    Divide,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    Numlock,
    /// Scroll lock.
    Scroll,
    LShift,
    RShift,
    LControl,
    RControl,
    LMenu,
    RMenu,
    BrowserBack,
    BrowserForward,
    BrowserRefresh,
    BrowserStop,
    BrowserSearch,
    BrowserFavorites,
    BrowserHome,
    VolumeMute,
    VolumeDown,
    VolumeUp,
    MediaNextTrack,
    MediaPrevTrack,
    MediaStop,
    MediaPlayPause,
    LaunchMail,
    LaunchMediaSelect,
    LaunchApp1,
    LaunchApp2,
    /// `;:` on US layouts.
    Oem1,
    /// `=+` on any layout.
    OemPlus,
    /// `,<` on any layout.
    OemComma,
    /// `-_` on any layout.
    OemMinus,
    /// `.>` on any layout.
    OemPeriod,
    /// `/?` on US layouts.
    Oem2,
    /// `` `~ `` on US layouts.
    Oem3,
    /// `[{` on US layouts.
    Oem4,
    /// `\|` on US layouts.
    Oem5,
    /// `]}` on US layouts.
    Oem6,
    /// `'"` on US layouts.
    Oem7,
    Oem8,
    /// `<>` or `\|` on 102-key keyboards.
    Oem102,
    Processkey,
    Attn,
    Crsel,
    Exsel,
    Ereof,
    Play,
    Zoom,
    Noname,
    Pa1,
    OemClear,
}

const LETTERS: [Key; 26] = [
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Digit0,
    Key::Digit1,
    Key::Digit2,
    Key::Digit3,
    Key::Digit4,
    Key::Digit5,
    Key::Digit6,
    Key::Digit7,
    Key::Digit8,
    Key::Digit9,
];

const NUMPAD: [Key; 10] = [
    Key::Numpad0,
    Key::Numpad1,
    Key::Numpad2,
    Key::Numpad3,
    Key::Numpad4,
    Key::Numpad5,
    Key::Numpad6,
    Key::Numpad7,
    Key::Numpad8,
    Key::Numpad9,
];

const FUNCTION: [Key; 24] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
    Key::F21,
    Key::F22,
    Key::F23,
    Key::F24,
];

impl Key {
    /// Maps an ASCII letter (either case) to its key, if it is one.
    pub fn from_ascii_letter(ch: char) -> Option<Key> {
        if ch.is_ascii_lowercase() {
            Some(LETTERS[(ch as u8 - b'a') as usize])
        } else if ch.is_ascii_uppercase() {
            Some(LETTERS[(ch as u8 - b'A') as usize])
        } else {
            None
        }
    }

    /// Maps an ASCII digit to its top-row key, if it is one.
    pub fn from_ascii_digit(ch: char) -> Option<Key> {
        ch.to_digit(10).map(|d| DIGITS[d as usize])
    }

    /// Numpad key for digit `n` (0-9).
    pub fn numpad(n: u8) -> Option<Key> {
        NUMPAD.get(n as usize).copied()
    }

    /// Function key `Fn` for `n` in 1..=24.
    pub fn function(n: u8) -> Option<Key> {
        if n == 0 {
            return None;
        }
        FUNCTION.get(n as usize - 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_case_insensitively() {
        assert_eq!(Key::from_ascii_letter('a'), Some(Key::A));
        assert_eq!(Key::from_ascii_letter('Z'), Some(Key::Z));
        assert_eq!(Key::from_ascii_letter('5'), None);
    }

    #[test]
    fn digits_and_numpad_are_distinct() {
        assert_eq!(Key::from_ascii_digit('0'), Some(Key::Digit0));
        assert_eq!(Key::numpad(0), Some(Key::Numpad0));
        assert_ne!(Key::from_ascii_digit('0'), Key::numpad(0));
        assert_eq!(Key::numpad(10), None);
    }

    #[test]
    fn function_keys_are_one_based() {
        assert_eq!(Key::function(0), None);
        assert_eq!(Key::function(1), Some(Key::F1));
        assert_eq!(Key::function(24), Some(Key::F24));
        assert_eq!(Key::function(25), None);
    }
}
