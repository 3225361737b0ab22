use std::fmt;

use winit::keyboard::{KeyCode, PhysicalKey};

macro_rules! keys {
    ($( $key:ident => $code:ident ),* $(,)?) => {
        /// Physical keyboard key.
        ///
        /// Keys not listed here map to `Key::Unknown` carrying the raw winit
        /// code so they can still be told apart.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum Key {
            $( $key, )*
            Unknown(u32),
        }

        fn map_key_code(code: KeyCode) -> Key {
            match code {
                $( KeyCode::$code => Key::$key, )*
                other => Key::Unknown(other as u32),
            }
        }
    };
}

keys! {
    Escape => Escape,
    Enter => Enter,
    Tab => Tab,
    Backspace => Backspace,
    Space => Space,
    Insert => Insert,
    Delete => Delete,
    Home => Home,
    End => End,
    PageUp => PageUp,
    PageDown => PageDown,

    Up => ArrowUp,
    Down => ArrowDown,
    Left => ArrowLeft,
    Right => ArrowRight,

    LeftShift => ShiftLeft,
    RightShift => ShiftRight,
    LeftControl => ControlLeft,
    RightControl => ControlRight,
    LeftAlt => AltLeft,
    RightAlt => AltRight,
    LeftSuper => SuperLeft,
    RightSuper => SuperRight,

    A => KeyA, B => KeyB, C => KeyC, D => KeyD, E => KeyE, F => KeyF,
    G => KeyG, H => KeyH, I => KeyI, J => KeyJ, K => KeyK, L => KeyL,
    M => KeyM, N => KeyN, O => KeyO, P => KeyP, Q => KeyQ, R => KeyR,
    S => KeyS, T => KeyT, U => KeyU, V => KeyV, W => KeyW, X => KeyX,
    Y => KeyY, Z => KeyZ,

    D0 => Digit0, D1 => Digit1, D2 => Digit2, D3 => Digit3, D4 => Digit4,
    D5 => Digit5, D6 => Digit6, D7 => Digit7, D8 => Digit8, D9 => Digit9,

    F1 => F1, F2 => F2, F3 => F3, F4 => F4, F5 => F5, F6 => F6,
    F7 => F7, F8 => F8, F9 => F9, F10 => F10, F11 => F11, F12 => F12,

    Minus => Minus,
    Equal => Equal,
    Comma => Comma,
    Period => Period,
    Slash => Slash,
    Semicolon => Semicolon,
    Apostrophe => Quote,
    GraveAccent => Backquote,
    LeftBracket => BracketLeft,
    RightBracket => BracketRight,
    Backslash => Backslash,
}

/// Maps a winit physical key to `(Key, stable code)`.
pub(crate) fn map_physical_key(key: PhysicalKey) -> (Key, u32) {
    match key {
        PhysicalKey::Code(code) => (map_key_code(code), code as u32),
        // NativeKeyCode has no portable numeric form.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unknown(code) => write!(f, "Unknown({code})"),
            other => write!(f, "{other:?}"),
        }
    }
}
